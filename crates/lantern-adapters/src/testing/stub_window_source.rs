use std::sync::Mutex;

use lantern_core::{WindowRecord, WindowSource, WindowSourceError};

pub struct StubWindowSource {
    windows: Mutex<Vec<WindowRecord>>,
    workspace: Mutex<Option<String>>,
}

impl StubWindowSource {
    pub fn new() -> Self {
        Self {
            windows: Mutex::new(Vec::new()),
            workspace: Mutex::new(None),
        }
    }

    pub fn with_windows(windows: Vec<WindowRecord>, workspace: Option<&str>) -> Self {
        Self {
            windows: Mutex::new(windows),
            workspace: Mutex::new(workspace.map(str::to_string)),
        }
    }

    pub fn given_windows(&self, windows: Vec<WindowRecord>) {
        let mut guard = self.windows.lock().unwrap();
        *guard = windows;
    }

    pub fn given_workspace(&self, workspace: Option<&str>) {
        let mut guard = self.workspace.lock().unwrap();
        *guard = workspace.map(str::to_string);
    }
}

impl Default for StubWindowSource {
    fn default() -> Self {
        Self::new()
    }
}

impl WindowSource for StubWindowSource {
    fn list_windows(&self) -> Result<Vec<WindowRecord>, WindowSourceError> {
        let windows = self.windows.lock().unwrap();
        Ok(windows.clone())
    }

    fn current_workspace(&self) -> Result<Option<String>, WindowSourceError> {
        let workspace = self.workspace.lock().unwrap();
        Ok(workspace.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn returns_nothing_by_default() {
        let source = StubWindowSource::new();

        assert!(source.list_windows().unwrap().is_empty());
        assert!(source.current_workspace().unwrap().is_none());
    }

    #[test]
    fn returns_given_windows_and_workspace() {
        let source = StubWindowSource::new();
        source.given_windows(vec![WindowRecord::new("0x01", "1", "kitty", "zsh")]);
        source.given_workspace(Some("1"));

        assert_eq!(source.list_windows().unwrap().len(), 1);
        assert_eq!(source.current_workspace().unwrap().as_deref(), Some("1"));
    }
}
