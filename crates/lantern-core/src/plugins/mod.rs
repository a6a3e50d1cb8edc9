//! Launcher plugins and the registry that routes host queries to them.

mod action;
mod bookmarks;
mod images;
mod registry;
mod window_switcher;

use thiserror::Error;

use crate::domain::Item;
use crate::ports::{BookmarkRepositoryError, ImageCatalogError, WindowSourceError};

pub use action::ActionError;
pub use bookmarks::BookmarksPlugin;
pub use images::ImageLauncherPlugin;
pub use registry::PluginRegistry;
pub use window_switcher::WindowSwitcherPlugin;

#[derive(Error, Debug)]
pub enum PluginError {
    #[error(transparent)]
    Windows(#[from] WindowSourceError),

    #[error(transparent)]
    Bookmarks(#[from] BookmarkRepositoryError),

    #[error(transparent)]
    Images(#[from] ImageCatalogError),
}

/// A query handler the host launcher exposes behind a trigger prefix.
pub trait Plugin: Send + Sync {
    fn id(&self) -> &'static str;

    fn name(&self) -> &'static str;

    fn description(&self) -> &'static str;

    fn synopsis(&self) -> &'static str;

    /// Prefix, including its trailing space, that routes a query here.
    fn default_trigger(&self) -> &'static str;

    /// Builds result items for the text typed after the trigger.
    fn handle_query(&self, query: &str) -> Result<Vec<Item>, PluginError>;
}
