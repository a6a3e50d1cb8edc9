use thiserror::Error;
use tracing::info;

use crate::domain::ActionCommand;
use crate::ports::{LaunchError, Launcher, WindowControl, WindowControlError};

#[derive(Error, Debug)]
pub enum ActionError {
    #[error(transparent)]
    Window(#[from] WindowControlError),

    #[error(transparent)]
    Launch(#[from] LaunchError),
}

impl ActionCommand {
    pub fn execute(
        &self,
        windows: &dyn WindowControl,
        launcher: &dyn Launcher,
    ) -> Result<(), ActionError> {
        info!(command = ?self, "executing action");

        match self {
            ActionCommand::SwitchWindow { window_id } => windows.activate(window_id)?,
            ActionCommand::MoveWindowHere { window_id } => {
                windows.move_to_current_workspace(window_id)?
            }
            ActionCommand::CloseWindow { window_id } => windows.close(window_id)?,
            ActionCommand::OpenUrl { url } => launcher.open_url(url)?,
            ActionCommand::CopyText { text } => launcher.copy_text(text)?,
            ActionCommand::RunDetached { program, args } => launcher.run_detached(program, args)?,
        }

        Ok(())
    }
}
