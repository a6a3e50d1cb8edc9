use std::path::PathBuf;
use std::process::Command;

use lantern_core::{
    WindowControl, WindowControlError, WindowRecord, WindowSource, WindowSourceError,
};
use tracing::debug;

use super::parser::{parse_current_workspace, parse_window_list};

const PROGRAM: &str = "wmctrl";

enum RunError {
    Unavailable,
    Failed(String),
}

/// Window listing and control through the `wmctrl` command.
pub struct Wmctrl {
    program: Option<PathBuf>,
}

impl Wmctrl {
    /// Looks `wmctrl` up on `PATH`; a missing binary surfaces on first use.
    pub fn new() -> Self {
        let program = which::which(PROGRAM).ok();
        if program.is_none() {
            debug!("wmctrl not found on PATH");
        }
        Self { program }
    }

    pub fn with_program(program: Option<PathBuf>) -> Self {
        Self { program }
    }

    fn run(&self, args: &[&str]) -> Result<String, RunError> {
        let program = self.program.as_ref().ok_or(RunError::Unavailable)?;

        let output = Command::new(program)
            .args(args)
            .output()
            .map_err(|error| match error.kind() {
                std::io::ErrorKind::NotFound => RunError::Unavailable,
                _ => RunError::Failed(error.to_string()),
            })?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(RunError::Failed(format!(
                "{}: {}",
                output.status,
                stderr.trim()
            )));
        }

        debug!(?args, bytes = output.stdout.len(), "wmctrl succeeded");
        Ok(String::from_utf8_lossy(&output.stdout).into_owned())
    }

    fn source_error(error: RunError) -> WindowSourceError {
        match error {
            RunError::Unavailable => WindowSourceError::Unavailable {
                tool: PROGRAM.to_string(),
            },
            RunError::Failed(message) => WindowSourceError::Command { message },
        }
    }

    fn control(&self, flag: &str, window_id: &str) -> Result<(), WindowControlError> {
        self.run(&["-i", flag, window_id])
            .map(|_| ())
            .map_err(|error| match error {
                RunError::Unavailable => WindowControlError::Unavailable {
                    tool: PROGRAM.to_string(),
                },
                RunError::Failed(message) => WindowControlError::Command {
                    window_id: window_id.to_string(),
                    message,
                },
            })
    }
}

impl Default for Wmctrl {
    fn default() -> Self {
        Self::new()
    }
}

impl WindowSource for Wmctrl {
    fn list_windows(&self) -> Result<Vec<WindowRecord>, WindowSourceError> {
        let output = self.run(&["-l", "-x"]).map_err(Self::source_error)?;
        Ok(parse_window_list(&output))
    }

    fn current_workspace(&self) -> Result<Option<String>, WindowSourceError> {
        let output = self.run(&["-d"]).map_err(Self::source_error)?;
        Ok(parse_current_workspace(&output))
    }
}

impl WindowControl for Wmctrl {
    fn activate(&self, window_id: &str) -> Result<(), WindowControlError> {
        self.control("-a", window_id)
    }

    fn move_to_current_workspace(&self, window_id: &str) -> Result<(), WindowControlError> {
        self.control("-R", window_id)
    }

    fn close(&self, window_id: &str) -> Result<(), WindowControlError> {
        self.control("-c", window_id)
    }
}
