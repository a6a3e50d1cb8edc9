//! Lantern core library
//!
//! Contains domain types, the window ranking algorithm, the launcher plugins
//! and the port definitions (traits) they depend on.
//! This crate has no knowledge of infrastructure concerns.

pub mod config;
pub mod domain;
pub mod plugins;
pub mod ports;

pub use config::{ImageLauncherSettings, Settings, SettingsError};
pub use domain::{
    highlight, rank, Action, ActionCommand, Bookmark, ImageEntry, Item, MatchSpan, RankOptions,
    RankedResult, Ranking, Scope, WindowRecord,
};
pub use plugins::{
    BookmarksPlugin, ImageLauncherPlugin, Plugin, PluginError, PluginRegistry,
    WindowSwitcherPlugin,
};
pub use ports::{
    BookmarkRepository, BookmarkRepositoryError, ImageCatalog, ImageCatalogError, LaunchError,
    Launcher, WindowControl, WindowControlError, WindowSource, WindowSourceError,
};
