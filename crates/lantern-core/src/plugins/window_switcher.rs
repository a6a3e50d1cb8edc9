use std::sync::Arc;

use tracing::{debug, warn};

use super::{Plugin, PluginError};
use crate::domain::{highlight, rank, Action, ActionCommand, Item, RankOptions, RankedResult};
use crate::ports::WindowSource;

const HIGHLIGHT_OPEN: &str = "<u>";
const HIGHLIGHT_CLOSE: &str = "</u>";
const CLASS_TITLE_SEPARATOR: char = '➜';

/// Lists and ranks open windows.
///
/// Queries search the current workspace; a leading `*` searches all of them.
/// Tokens are matched independently, so their order does not matter.
pub struct WindowSwitcherPlugin {
    source: Arc<dyn WindowSource>,
    options: RankOptions,
}

impl WindowSwitcherPlugin {
    pub fn new(source: Arc<dyn WindowSource>, options: RankOptions) -> Self {
        Self { source, options }
    }

    fn current_workspace(&self) -> Option<String> {
        match self.source.current_workspace() {
            Ok(workspace) => workspace,
            Err(error) => {
                warn!(%error, "current workspace unknown, searching every workspace");
                None
            }
        }
    }
}

impl Plugin for WindowSwitcherPlugin {
    fn id(&self) -> &'static str {
        "window-switcher"
    }

    fn name(&self) -> &'static str {
        "Window Switcher Plus"
    }

    fn description(&self) -> &'static str {
        "X11 Window Switcher"
    }

    fn synopsis(&self) -> &'static str {
        "<window-name>"
    }

    fn default_trigger(&self) -> &'static str {
        "win "
    }

    fn handle_query(&self, query: &str) -> Result<Vec<Item>, PluginError> {
        let current_workspace = self.current_workspace();
        let windows = self.source.list_windows()?;

        let ranking = rank(query, current_workspace.as_deref(), &windows, &self.options);
        debug!(
            query,
            workspace = ?current_workspace,
            windows = windows.len(),
            results = ranking.len(),
            "window query handled"
        );

        Ok(ranking.results.iter().map(window_item).collect())
    }
}

fn window_item(result: &RankedResult<'_>) -> Item {
    let window = result.record;
    let class_tail = window.class_tail();

    let text = format!("{}: {}", window.workspace, class_tail.replace('-', " "));
    let description = format!("{class_tail}{CLASS_TITLE_SEPARATOR}{}", window.title);
    let subtext = if result.spans.is_empty() {
        description
    } else {
        highlight(&description, &result.spans, HIGHLIGHT_OPEN, HIGHLIGHT_CLOSE)
    };

    let window_id = window.id.clone();
    Item::new(window_id.clone(), text, subtext)
        .with_action(Action::new(
            "switch",
            "Switch Window",
            ActionCommand::SwitchWindow {
                window_id: window_id.clone(),
            },
        ))
        .with_action(Action::new(
            "move",
            "Move window to this desktop",
            ActionCommand::MoveWindowHere {
                window_id: window_id.clone(),
            },
        ))
        .with_action(Action::new(
            "close",
            "Close the window gracefully.",
            ActionCommand::CloseWindow { window_id },
        ))
}
