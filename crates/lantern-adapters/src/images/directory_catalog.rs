use std::path::PathBuf;

use lantern_core::{ImageCatalog, ImageCatalogError, ImageEntry};
use tracing::{debug, warn};
use walkdir::WalkDir;

/// Image files found by walking a directory tree.
pub struct DirectoryImageCatalog {
    root: PathBuf,
}

impl DirectoryImageCatalog {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }
}

impl ImageCatalog for DirectoryImageCatalog {
    fn list_images(&self) -> Result<Vec<ImageEntry>, ImageCatalogError> {
        if !self.root.is_dir() {
            return Err(ImageCatalogError::NotFound {
                path: self.root.clone(),
            });
        }

        let images: Vec<ImageEntry> = WalkDir::new(&self.root)
            .into_iter()
            .filter_map(|entry| match entry {
                Ok(entry) => Some(entry),
                Err(error) => {
                    warn!(%error, "skipping unreadable entry");
                    None
                }
            })
            .filter(|entry| entry.file_type().is_file())
            .filter_map(|entry| ImageEntry::from_path(entry.path()))
            .collect();

        debug!(root = %self.root.display(), count = images.len(), "scanned images");
        Ok(images)
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use tempfile::TempDir;

    use super::*;

    #[test]
    fn finds_images_recursively() {
        let directory = TempDir::new().unwrap();
        fs::create_dir_all(directory.path().join("course/week1")).unwrap();
        fs::write(directory.path().join("Cuis6.0.image"), b"").unwrap();
        fs::write(directory.path().join("Cuis6.0.changes"), b"").unwrap();
        fs::write(directory.path().join("course/week1/Exercises.image"), b"").unwrap();

        let catalog = DirectoryImageCatalog::new(directory.path());
        let mut names: Vec<String> = catalog
            .list_images()
            .unwrap()
            .into_iter()
            .map(|image| image.name)
            .collect();
        names.sort();

        assert_eq!(names, vec!["Cuis6.0", "Exercises"]);
    }

    #[test]
    fn directories_named_like_images_are_ignored() {
        let directory = TempDir::new().unwrap();
        fs::create_dir_all(directory.path().join("odd.image")).unwrap();

        let images = DirectoryImageCatalog::new(directory.path())
            .list_images()
            .unwrap();

        assert!(images.is_empty());
    }

    #[test]
    fn missing_directory_is_not_found() {
        let catalog = DirectoryImageCatalog::new("/nonexistent/images");

        assert!(matches!(
            catalog.list_images(),
            Err(ImageCatalogError::NotFound { .. })
        ));
    }
}
