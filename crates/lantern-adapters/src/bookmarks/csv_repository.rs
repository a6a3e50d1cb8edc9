use std::path::PathBuf;

use csv::{ReaderBuilder, StringRecord};
use lantern_core::{Bookmark, BookmarkRepository, BookmarkRepositoryError};
use tracing::{debug, warn};

const ID_COLUMN: usize = 0;
const NAME_COLUMN: usize = 1;
const URL_COLUMN: usize = 2;
const TAGS_COLUMN: usize = 3;
const DESCRIPTION_COLUMN: usize = 4;

/// Bookmarks read from a CSV file with an `id,name,url,tags,desc` header.
pub struct CsvBookmarkRepository {
    path: PathBuf,
}

impl CsvBookmarkRepository {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl BookmarkRepository for CsvBookmarkRepository {
    fn load_all(&self) -> Result<Vec<Bookmark>, BookmarkRepositoryError> {
        if !self.path.is_file() {
            return Err(BookmarkRepositoryError::NotFound {
                path: self.path.clone(),
            });
        }

        let mut reader = ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .from_path(&self.path)
            .map_err(|error| BookmarkRepositoryError::Read {
                message: error.to_string(),
            })?;

        let mut bookmarks = Vec::new();
        for (index, record) in reader.records().enumerate() {
            let record = record.map_err(|error| BookmarkRepositoryError::Read {
                message: error.to_string(),
            })?;

            match bookmark_from_record(&record) {
                Some(bookmark) => bookmarks.push(bookmark),
                None => warn!(
                    row = index + 2,
                    fields = record.len(),
                    "skipping bookmark row with missing columns"
                ),
            }
        }

        debug!(path = %self.path.display(), count = bookmarks.len(), "loaded bookmarks");
        Ok(bookmarks)
    }
}

fn bookmark_from_record(record: &StringRecord) -> Option<Bookmark> {
    Some(Bookmark::new(
        record.get(ID_COLUMN)?,
        record.get(NAME_COLUMN)?,
        record.get(URL_COLUMN)?,
        Bookmark::parse_tags(record.get(TAGS_COLUMN)?),
        record.get(DESCRIPTION_COLUMN)?,
    ))
}
