use serde::Serialize;

/// A result row handed back to the host launcher.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Item {
    pub id: String,
    pub text: String,
    pub subtext: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub completion: Option<String>,
    pub actions: Vec<Action>,
}

impl Item {
    pub fn new(id: impl Into<String>, text: impl Into<String>, subtext: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            text: text.into(),
            subtext: subtext.into(),
            completion: None,
            actions: Vec::new(),
        }
    }

    pub fn with_completion(mut self, completion: impl Into<String>) -> Self {
        self.completion = Some(completion.into());
        self
    }

    pub fn with_action(mut self, action: Action) -> Self {
        self.actions.push(action);
        self
    }

    /// Looks up an action by id, falling back to the first action.
    pub fn action(&self, id: Option<&str>) -> Option<&Action> {
        match id {
            Some(id) => self.actions.iter().find(|action| action.id == id),
            None => self.actions.first(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Action {
    pub id: String,
    pub label: String,
    pub command: ActionCommand,
}

impl Action {
    pub fn new(id: impl Into<String>, label: impl Into<String>, command: ActionCommand) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            command,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ActionCommand {
    SwitchWindow { window_id: String },
    MoveWindowHere { window_id: String },
    CloseWindow { window_id: String },
    OpenUrl { url: String },
    CopyText { text: String },
    RunDetached { program: String, args: Vec<String> },
}
