use serde::Serialize;

/// Leading character that widens a window query to every workspace.
pub const SCOPE_SENTINEL: char = '*';

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Scope {
    CurrentWorkspace,
    AllWorkspaces,
}

/// A window query split into its scope and lowercased search tokens.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedQuery {
    pub scope: Scope,
    pub tokens: Vec<String>,
}

impl ParsedQuery {
    pub fn parse(raw: &str) -> Self {
        let mut tokens: Vec<String> = raw.split_whitespace().map(str::to_lowercase).collect();
        let mut scope = Scope::CurrentWorkspace;

        if let Some(first) = tokens.first_mut() {
            if first.starts_with(SCOPE_SENTINEL) {
                scope = Scope::AllWorkspaces;

                let stripped = first.trim_matches(SCOPE_SENTINEL).to_string();
                if stripped.is_empty() {
                    tokens.remove(0);
                } else {
                    *first = stripped;
                }
            }
        }

        Self { scope, tokens }
    }

    pub fn has_tokens(&self) -> bool {
        !self.tokens.is_empty()
    }
}
