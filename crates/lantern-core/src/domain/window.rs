use serde::Serialize;

/// Workspace identifier used by window managers for sticky windows.
pub const NO_WORKSPACE: &str = "-1";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WindowRecord {
    pub id: String,
    pub workspace: String,
    pub class_name: String,
    pub host: String,
    pub title: String,
}

impl WindowRecord {
    pub fn new(
        id: impl Into<String>,
        workspace: impl Into<String>,
        class_name: impl Into<String>,
        title: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            workspace: workspace.into(),
            class_name: class_name.into(),
            host: String::new(),
            title: title.into(),
        }
    }

    pub fn with_host(mut self, host: impl Into<String>) -> Self {
        self.host = host.into();
        self
    }

    /// Segment of the class name after its last `.`.
    pub fn class_tail(&self) -> &str {
        match self.class_name.rfind('.') {
            Some(index) => &self.class_name[index + 1..],
            None => &self.class_name,
        }
    }

    /// Text the ranker matches against and match spans index into.
    pub fn description(&self) -> String {
        format!("{} {}", self.class_tail(), self.title)
    }

    pub fn is_on_workspace(&self, workspace: &str) -> bool {
        self.workspace == workspace
    }
}
