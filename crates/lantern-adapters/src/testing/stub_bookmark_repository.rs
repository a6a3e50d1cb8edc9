use std::sync::Mutex;

use lantern_core::{Bookmark, BookmarkRepository, BookmarkRepositoryError};

pub struct StubBookmarkRepository {
    bookmarks: Mutex<Vec<Bookmark>>,
}

impl StubBookmarkRepository {
    pub fn new() -> Self {
        Self::with_bookmarks(Vec::new())
    }

    pub fn with_bookmarks(bookmarks: Vec<Bookmark>) -> Self {
        Self {
            bookmarks: Mutex::new(bookmarks),
        }
    }

    pub fn given_bookmarks(&self, bookmarks: Vec<Bookmark>) {
        let mut guard = self.bookmarks.lock().unwrap();
        *guard = bookmarks;
    }
}

impl Default for StubBookmarkRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl BookmarkRepository for StubBookmarkRepository {
    fn load_all(&self) -> Result<Vec<Bookmark>, BookmarkRepositoryError> {
        Ok(self.bookmarks.lock().unwrap().clone())
    }
}
