use std::sync::Arc;

use tracing::debug;

use super::{Plugin, PluginError};
use crate::domain::{Action, ActionCommand, Bookmark, Item};
use crate::ports::BookmarkRepository;

/// Opens bookmarks stored in a CSV file.
pub struct BookmarksPlugin {
    repository: Arc<dyn BookmarkRepository>,
}

impl BookmarksPlugin {
    pub fn new(repository: Arc<dyn BookmarkRepository>) -> Self {
        Self { repository }
    }
}

impl Plugin for BookmarksPlugin {
    fn id(&self) -> &'static str {
        "bookmarks"
    }

    fn name(&self) -> &'static str {
        "Bookmarks"
    }

    fn description(&self) -> &'static str {
        "Open bookmarks from CSV"
    }

    fn synopsis(&self) -> &'static str {
        "<bookmark>"
    }

    fn default_trigger(&self) -> &'static str {
        "bm "
    }

    fn handle_query(&self, query: &str) -> Result<Vec<Item>, PluginError> {
        let search = query.trim().to_lowercase();
        let bookmarks = self.repository.load_all()?;
        let total = bookmarks.len();

        let items: Vec<Item> = bookmarks
            .into_iter()
            .filter(|bookmark| search.is_empty() || bookmark.matches(&search))
            .map(bookmark_item)
            .collect();

        debug!(%search, total, matches = items.len(), "bookmark query handled");
        Ok(items)
    }
}

fn bookmark_item(bookmark: Bookmark) -> Item {
    Item::new(bookmark.id, bookmark.name, bookmark.url.clone())
        .with_completion(format!("bookmark {}", bookmark.url))
        .with_action(Action::new(
            "open",
            "Open URL",
            ActionCommand::OpenUrl {
                url: bookmark.url.clone(),
            },
        ))
        .with_action(Action::new(
            "copy",
            "Copy URL",
            ActionCommand::CopyText { text: bookmark.url },
        ))
}
