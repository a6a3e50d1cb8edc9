use std::path::PathBuf;

use thiserror::Error;

use crate::domain::ImageEntry;

#[derive(Error, Debug, Clone)]
pub enum ImageCatalogError {
    #[error("images directory not found: {}", path.display())]
    NotFound { path: PathBuf },

    #[error("cannot scan images: {message}")]
    Scan { message: String },
}

pub trait ImageCatalog: Send + Sync {
    /// Every image file below the catalog root, in no particular order.
    fn list_images(&self) -> Result<Vec<ImageEntry>, ImageCatalogError>;
}
