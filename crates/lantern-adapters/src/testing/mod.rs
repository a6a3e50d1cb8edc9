mod failing_window_source;
mod recording_launcher;
mod recording_window_control;
mod stub_bookmark_repository;
mod stub_image_catalog;
mod stub_window_source;

pub use failing_window_source::FailingWindowSource;
pub use recording_launcher::RecordingLauncher;
pub use recording_window_control::{RecordingWindowControl, WindowCall};
pub use stub_bookmark_repository::StubBookmarkRepository;
pub use stub_image_catalog::StubImageCatalog;
pub use stub_window_source::StubWindowSource;
