use lantern_core::{WindowRecord, WindowSource, WindowSourceError};

pub struct FailingWindowSource {
    error: WindowSourceError,
}

impl FailingWindowSource {
    pub fn unavailable() -> Self {
        Self {
            error: WindowSourceError::Unavailable {
                tool: "wmctrl".to_string(),
            },
        }
    }

    pub fn command_failed() -> Self {
        Self {
            error: WindowSourceError::Command {
                message: "exit status: 1".to_string(),
            },
        }
    }
}

impl WindowSource for FailingWindowSource {
    fn list_windows(&self) -> Result<Vec<WindowRecord>, WindowSourceError> {
        Err(self.error.clone())
    }

    fn current_workspace(&self) -> Result<Option<String>, WindowSourceError> {
        Err(self.error.clone())
    }
}
