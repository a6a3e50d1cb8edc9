use std::sync::Mutex;

use lantern_core::{LaunchError, Launcher};

/// Records desktop requests instead of performing them.
#[derive(Default)]
pub struct RecordingLauncher {
    opened_urls: Mutex<Vec<String>>,
    copied_texts: Mutex<Vec<String>>,
    spawned: Mutex<Vec<(String, Vec<String>)>>,
}

impl RecordingLauncher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn opened_urls(&self) -> Vec<String> {
        self.opened_urls.lock().unwrap().clone()
    }

    pub fn copied_texts(&self) -> Vec<String> {
        self.copied_texts.lock().unwrap().clone()
    }

    pub fn spawned(&self) -> Vec<(String, Vec<String>)> {
        self.spawned.lock().unwrap().clone()
    }
}

impl Launcher for RecordingLauncher {
    fn open_url(&self, url: &str) -> Result<(), LaunchError> {
        self.opened_urls.lock().unwrap().push(url.to_string());
        Ok(())
    }

    fn copy_text(&self, text: &str) -> Result<(), LaunchError> {
        self.copied_texts.lock().unwrap().push(text.to_string());
        Ok(())
    }

    fn run_detached(&self, program: &str, args: &[String]) -> Result<(), LaunchError> {
        self.spawned
            .lock()
            .unwrap()
            .push((program.to_string(), args.to_vec()));
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn records_each_request_kind_separately() {
        let launcher = RecordingLauncher::new();

        launcher.open_url("https://crates.io").unwrap();
        launcher.copy_text("https://crates.io").unwrap();
        launcher
            .run_detached("/opt/cuis/xdg-open.sh", &["images/a.image".to_string()])
            .unwrap();

        assert_eq!(launcher.opened_urls(), vec!["https://crates.io"]);
        assert_eq!(launcher.copied_texts(), vec!["https://crates.io"]);
        assert_eq!(
            launcher.spawned(),
            vec![(
                "/opt/cuis/xdg-open.sh".to_string(),
                vec!["images/a.image".to_string()]
            )]
        );
    }
}
