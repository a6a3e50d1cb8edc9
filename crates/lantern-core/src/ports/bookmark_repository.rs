use std::path::PathBuf;

use thiserror::Error;

use crate::domain::Bookmark;

#[derive(Error, Debug, Clone)]
pub enum BookmarkRepositoryError {
    #[error("bookmarks file not found: {}", path.display())]
    NotFound { path: PathBuf },

    #[error("cannot read bookmarks: {message}")]
    Read { message: String },
}

pub trait BookmarkRepository: Send + Sync {
    fn load_all(&self) -> Result<Vec<Bookmark>, BookmarkRepositoryError>;
}
