use thiserror::Error;

#[derive(Error, Debug, Clone)]
pub enum WindowControlError {
    #[error("window manager tool unavailable: {tool}")]
    Unavailable { tool: String },

    #[error("window command failed for {window_id}: {message}")]
    Command { window_id: String, message: String },
}

pub trait WindowControl: Send + Sync {
    /// Switches to the window's workspace and raises it.
    fn activate(&self, window_id: &str) -> Result<(), WindowControlError>;

    /// Moves the window to the current workspace and raises it.
    fn move_to_current_workspace(&self, window_id: &str) -> Result<(), WindowControlError>;

    /// Asks the window to close gracefully.
    fn close(&self, window_id: &str) -> Result<(), WindowControlError>;
}
