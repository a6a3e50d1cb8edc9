use tracing::debug;

use super::Plugin;

#[derive(Default)]
pub struct PluginRegistry {
    plugins: Vec<Box<dyn Plugin>>,
}

impl PluginRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, plugin: Box<dyn Plugin>) {
        self.plugins.push(plugin);
    }

    pub fn with(mut self, plugin: Box<dyn Plugin>) -> Self {
        self.register(plugin);
        self
    }

    pub fn plugins(&self) -> impl Iterator<Item = &dyn Plugin> {
        self.plugins.iter().map(|plugin| plugin.as_ref())
    }

    /// Picks the plugin whose trigger prefixes `raw` and returns the rest of
    /// the text as its query. A bare trigger word selects the plugin with an
    /// empty query.
    pub fn resolve<'q>(&self, raw: &'q str) -> Option<(&dyn Plugin, &'q str)> {
        let raw = raw.trim_start();

        let resolved = self.plugins().find_map(|plugin| {
            let trigger = plugin.default_trigger();
            if let Some(rest) = raw.strip_prefix(trigger) {
                return Some((plugin, rest));
            }
            (raw.trim_end() == trigger.trim_end()).then_some((plugin, ""))
        });

        if let Some((plugin, query)) = resolved {
            debug!(plugin = plugin.id(), query, "resolved trigger");
        }
        resolved
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Item;
    use crate::plugins::PluginError;

    struct Echo {
        id: &'static str,
        trigger: &'static str,
    }

    impl Plugin for Echo {
        fn id(&self) -> &'static str {
            self.id
        }

        fn name(&self) -> &'static str {
            "Echo"
        }

        fn description(&self) -> &'static str {
            "Echoes the query"
        }

        fn synopsis(&self) -> &'static str {
            "<text>"
        }

        fn default_trigger(&self) -> &'static str {
            self.trigger
        }

        fn handle_query(&self, query: &str) -> Result<Vec<Item>, PluginError> {
            Ok(vec![Item::new(query, query, "")])
        }
    }

    fn registry() -> PluginRegistry {
        PluginRegistry::new()
            .with(Box::new(Echo {
                id: "windows",
                trigger: "win ",
            }))
            .with(Box::new(Echo {
                id: "bookmarks",
                trigger: "bm ",
            }))
    }

    #[test]
    fn resolves_by_trigger_prefix() {
        let registry = registry();

        let (plugin, query) = registry.resolve("bm rust docs").unwrap();

        assert_eq!(plugin.id(), "bookmarks");
        assert_eq!(query, "rust docs");
    }

    #[test]
    fn bare_trigger_word_gives_empty_query() {
        let registry = registry();

        let (plugin, query) = registry.resolve("win").unwrap();

        assert_eq!(plugin.id(), "windows");
        assert_eq!(query, "");
    }

    #[test]
    fn unknown_trigger_resolves_nothing() {
        assert!(registry().resolve("calc 1+1").is_none());
        assert!(registry().resolve("window").is_none());
    }

    #[test]
    fn plugins_keep_registration_order() {
        let ids: Vec<&str> = registry().plugins().map(|plugin| plugin.id()).collect();

        assert_eq!(ids, vec!["windows", "bookmarks"]);
    }
}
