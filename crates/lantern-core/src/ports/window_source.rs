use thiserror::Error;

use crate::domain::WindowRecord;

#[derive(Error, Debug, Clone)]
pub enum WindowSourceError {
    #[error("window manager tool unavailable: {tool}")]
    Unavailable { tool: String },

    #[error("window listing failed: {message}")]
    Command { message: String },
}

pub trait WindowSource: Send + Sync {
    /// Open windows in stacking order, excluding windows on no workspace.
    fn list_windows(&self) -> Result<Vec<WindowRecord>, WindowSourceError>;

    /// Identifier of the active workspace, `None` when it cannot be determined.
    fn current_workspace(&self) -> Result<Option<String>, WindowSourceError>;
}
