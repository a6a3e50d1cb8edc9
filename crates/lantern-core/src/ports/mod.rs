mod bookmark_repository;
mod image_catalog;
mod launcher;
mod window_control;
mod window_source;

pub use bookmark_repository::{BookmarkRepository, BookmarkRepositoryError};
pub use image_catalog::{ImageCatalog, ImageCatalogError};
pub use launcher::{LaunchError, Launcher};
pub use window_control::{WindowControl, WindowControlError};
pub use window_source::{WindowSource, WindowSourceError};
