//! Lantern adapters - Infrastructure implementations
//!
//! This crate contains concrete implementations of the ports defined in lantern-core.
//! It bridges the plugins with `wmctrl`, the filesystem and the desktop session.

pub mod bookmarks;
pub mod desktop;
pub mod images;
pub mod testing;
pub mod wmctrl;

pub use bookmarks::CsvBookmarkRepository;
pub use desktop::DesktopLauncher;
pub use images::DirectoryImageCatalog;
pub use testing::{
    FailingWindowSource, RecordingLauncher, RecordingWindowControl, StubBookmarkRepository,
    StubImageCatalog, StubWindowSource,
};
pub use wmctrl::Wmctrl;
