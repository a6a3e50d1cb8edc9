use std::path::PathBuf;

use lantern_core::{ImageCatalog, ImageCatalogError, ImageEntry};

pub struct StubImageCatalog {
    images: Vec<ImageEntry>,
}

impl StubImageCatalog {
    /// Builds a catalog from paths; paths without the image extension are dropped.
    pub fn with_paths(paths: &[&str]) -> Self {
        let images = paths
            .iter()
            .filter_map(|path| ImageEntry::from_path(&PathBuf::from(path)))
            .collect();
        Self { images }
    }
}

impl ImageCatalog for StubImageCatalog {
    fn list_images(&self) -> Result<Vec<ImageEntry>, ImageCatalogError> {
        Ok(self.images.clone())
    }
}
