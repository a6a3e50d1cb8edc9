use std::path::{Path, PathBuf};

use serde::Serialize;

/// Extension identifying launchable image files.
pub const IMAGE_EXTENSION: &str = ".image";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ImageEntry {
    pub name: String,
    pub path: PathBuf,
}

impl ImageEntry {
    /// Builds an entry when the file name carries the image extension.
    pub fn from_path(path: &Path) -> Option<Self> {
        let file_name = path.file_name()?.to_str()?;
        let name = file_name.strip_suffix(IMAGE_EXTENSION)?;

        Some(Self {
            name: name.to_string(),
            path: path.to_path_buf(),
        })
    }

    pub fn matches(&self, search: &str) -> bool {
        self.name.to_lowercase().contains(&search.to_lowercase())
    }

    /// Sort key used when listing images: the lowercased full path.
    pub fn sort_key(&self) -> String {
        self.path.to_string_lossy().to_lowercase()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_path_strips_extension() {
        let entry = ImageEntry::from_path(Path::new("/images/Cuis6.0.image")).unwrap();

        assert_eq!(entry.name, "Cuis6.0");
        assert_eq!(entry.path, PathBuf::from("/images/Cuis6.0.image"));
    }

    #[test]
    fn from_path_rejects_other_extensions() {
        assert!(ImageEntry::from_path(Path::new("/images/Cuis6.0.changes")).is_none());
        assert!(ImageEntry::from_path(Path::new("/images/notes.image.bak")).is_none());
    }

    #[test]
    fn from_path_is_case_sensitive_on_extension() {
        assert!(ImageEntry::from_path(Path::new("/images/Cuis.IMAGE")).is_none());
    }

    #[test]
    fn matches_name_without_extension() {
        let entry = ImageEntry::from_path(Path::new("/images/Cuis6.0.image")).unwrap();

        assert!(entry.matches("cuis6"));
        assert!(!entry.matches("image"));
    }

    #[test]
    fn sort_key_is_lowercased_path() {
        let entry = ImageEntry::from_path(Path::new("/Images/Cuis.image")).unwrap();

        assert_eq!(entry.sort_key(), "/images/cuis.image");
    }
}
