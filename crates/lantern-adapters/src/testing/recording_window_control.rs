use std::sync::Mutex;

use lantern_core::{WindowControl, WindowControlError};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WindowCall {
    Activate(String),
    MoveHere(String),
    Close(String),
}

/// Records every window command instead of running it.
#[derive(Default)]
pub struct RecordingWindowControl {
    calls: Mutex<Vec<WindowCall>>,
}

impl RecordingWindowControl {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn calls(&self) -> Vec<WindowCall> {
        self.calls.lock().unwrap().clone()
    }

    fn record(&self, call: WindowCall) -> Result<(), WindowControlError> {
        self.calls.lock().unwrap().push(call);
        Ok(())
    }
}

impl WindowControl for RecordingWindowControl {
    fn activate(&self, window_id: &str) -> Result<(), WindowControlError> {
        self.record(WindowCall::Activate(window_id.to_string()))
    }

    fn move_to_current_workspace(&self, window_id: &str) -> Result<(), WindowControlError> {
        self.record(WindowCall::MoveHere(window_id.to_string()))
    }

    fn close(&self, window_id: &str) -> Result<(), WindowControlError> {
        self.record(WindowCall::Close(window_id.to_string()))
    }
}
