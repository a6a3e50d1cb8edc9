use thiserror::Error;

#[derive(Error, Debug, Clone)]
pub enum LaunchError {
    #[error("cannot open {url}: {message}")]
    OpenUrl { url: String, message: String },

    #[error("clipboard unavailable: {message}")]
    Clipboard { message: String },

    #[error("cannot start {program}: {message}")]
    Spawn { program: String, message: String },
}

/// Desktop side effects requested by item actions.
pub trait Launcher: Send + Sync {
    fn open_url(&self, url: &str) -> Result<(), LaunchError>;

    fn copy_text(&self, text: &str) -> Result<(), LaunchError>;

    /// Starts a process without waiting for it.
    fn run_detached(&self, program: &str, args: &[String]) -> Result<(), LaunchError>;
}
