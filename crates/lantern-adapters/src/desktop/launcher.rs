use std::process::{Command, Stdio};

use arboard::Clipboard;
use lantern_core::{LaunchError, Launcher};
use tracing::{debug, warn};

const URL_OPENER: &str = "xdg-open";
const FALLBACK_BROWSERS: [&str; 4] = ["firefox", "google-chrome", "chromium", "brave-browser"];

/// Launcher backed by the running desktop session.
#[derive(Default)]
pub struct DesktopLauncher;

impl DesktopLauncher {
    pub fn new() -> Self {
        Self
    }

    fn spawn(program: &str, args: &[String]) -> std::io::Result<()> {
        let mut command = Command::new(program);
        command
            .args(args)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null());

        #[cfg(unix)]
        {
            use std::os::unix::process::CommandExt;
            command.process_group(0);
        }

        let child = command.spawn()?;
        debug!(program, pid = child.id(), "spawned detached process");
        Ok(())
    }
}

impl Launcher for DesktopLauncher {
    fn open_url(&self, url: &str) -> Result<(), LaunchError> {
        let args = [url.to_string()];

        let opener_error = match Self::spawn(URL_OPENER, &args) {
            Ok(()) => return Ok(()),
            Err(error) => error,
        };
        warn!(%opener_error, "xdg-open failed, trying browsers directly");

        for browser in FALLBACK_BROWSERS {
            if Self::spawn(browser, &args).is_ok() {
                return Ok(());
            }
        }

        Err(LaunchError::OpenUrl {
            url: url.to_string(),
            message: opener_error.to_string(),
        })
    }

    fn copy_text(&self, text: &str) -> Result<(), LaunchError> {
        let mut clipboard = Clipboard::new().map_err(|error| LaunchError::Clipboard {
            message: error.to_string(),
        })?;

        clipboard
            .set_text(text.to_string())
            .map_err(|error| LaunchError::Clipboard {
                message: error.to_string(),
            })
    }

    fn run_detached(&self, program: &str, args: &[String]) -> Result<(), LaunchError> {
        Self::spawn(program, args).map_err(|error| LaunchError::Spawn {
            program: program.to_string(),
            message: error.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_program_fails_to_spawn() {
        let launcher = DesktopLauncher::new();

        let result = launcher.run_detached("/nonexistent/bin/opener", &[]);

        assert!(matches!(result, Err(LaunchError::Spawn { .. })));
    }

    #[cfg(unix)]
    #[test]
    fn existing_program_is_spawned_without_waiting() {
        let launcher = DesktopLauncher::new();

        let result = launcher.run_detached("true", &["ignored".to_string()]);

        assert!(result.is_ok());
    }
}
