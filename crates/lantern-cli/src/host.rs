use std::sync::Arc;

use anyhow::{anyhow, Context, Result};
use lantern_adapters::{CsvBookmarkRepository, DesktopLauncher, DirectoryImageCatalog, Wmctrl};
use lantern_core::{
    BookmarkRepository, BookmarksPlugin, ImageCatalog, ImageLauncherPlugin, Item, Launcher,
    Plugin, PluginRegistry, RankOptions, Settings, WindowControl, WindowSource, WindowSwitcherPlugin,
};
use tracing::info;

/// Minimal stand-in for a launcher host: owns the plugins and the ports
/// their actions need.
pub struct Host {
    registry: PluginRegistry,
    window_control: Arc<dyn WindowControl>,
    launcher: Arc<dyn Launcher>,
}

pub struct HostPorts {
    pub window_source: Arc<dyn WindowSource>,
    pub window_control: Arc<dyn WindowControl>,
    pub bookmarks: Arc<dyn BookmarkRepository>,
    pub images: Arc<dyn ImageCatalog>,
    pub launcher: Arc<dyn Launcher>,
}

impl Host {
    pub fn new(settings: &Settings) -> Self {
        let wmctrl = Arc::new(Wmctrl::new());

        Self::with_ports(
            settings,
            HostPorts {
                window_source: wmctrl.clone(),
                window_control: wmctrl,
                bookmarks: Arc::new(CsvBookmarkRepository::new(&settings.bookmarks_csv)),
                images: Arc::new(DirectoryImageCatalog::new(&settings.images.images_dir)),
                launcher: Arc::new(DesktopLauncher::new()),
            },
        )
    }

    /// Host with only the window switcher, for when bookmark and image paths
    /// cannot be resolved.
    pub fn windows_only(rank: RankOptions) -> Self {
        let wmctrl = Arc::new(Wmctrl::new());
        Self::windows_only_with_ports(rank, wmctrl.clone(), wmctrl, Arc::new(DesktopLauncher::new()))
    }

    pub fn windows_only_with_ports(
        rank: RankOptions,
        window_source: Arc<dyn WindowSource>,
        window_control: Arc<dyn WindowControl>,
        launcher: Arc<dyn Launcher>,
    ) -> Self {
        Self {
            registry: PluginRegistry::new()
                .with(Box::new(WindowSwitcherPlugin::new(window_source, rank))),
            window_control,
            launcher,
        }
    }

    pub fn with_ports(settings: &Settings, ports: HostPorts) -> Self {
        let mut host = Self::windows_only_with_ports(
            settings.rank,
            ports.window_source,
            ports.window_control,
            ports.launcher,
        );
        host.registry
            .register(Box::new(BookmarksPlugin::new(ports.bookmarks)));
        host.registry.register(Box::new(ImageLauncherPlugin::new(
            ports.images,
            settings.images.clone(),
        )));
        host
    }

    pub fn plugins(&self) -> impl Iterator<Item = &dyn Plugin> {
        self.registry.plugins()
    }

    /// Routes `raw` to the plugin owning its trigger.
    pub fn query(&self, raw: &str) -> Result<(&dyn Plugin, Vec<Item>)> {
        let (plugin, query) = self
            .registry
            .resolve(raw)
            .ok_or_else(|| anyhow!("no plugin handles {raw:?}; run `lantern plugins` for triggers"))?;

        let items = plugin
            .handle_query(query)
            .with_context(|| format!("{} failed", plugin.name()))?;

        Ok((plugin, items))
    }

    /// Re-runs `raw`, then executes `action_id` (or the first action) of `item_id`.
    pub fn activate(&self, raw: &str, item_id: &str, action_id: Option<&str>) -> Result<Item> {
        let (plugin, items) = self.query(raw)?;

        let item = items
            .into_iter()
            .find(|item| item.id == item_id)
            .ok_or_else(|| anyhow!("{} has no result {item_id:?}", plugin.name()))?;

        let action = item
            .action(action_id)
            .ok_or_else(|| anyhow!("result {item_id:?} has no action {:?}", action_id.unwrap_or("")))?;

        info!(plugin = plugin.id(), item = item_id, action = %action.id, "activating result");
        action
            .command
            .execute(self.window_control.as_ref(), self.launcher.as_ref())
            .with_context(|| format!("{} failed", action.label))?;

        Ok(item)
    }
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use lantern_adapters::testing::{
        FailingWindowSource, RecordingLauncher, RecordingWindowControl, StubBookmarkRepository,
        StubImageCatalog, StubWindowSource, WindowCall,
    };
    use lantern_core::{Bookmark, WindowRecord};

    use super::*;

    struct Fixture {
        host: Host,
        window_control: Arc<RecordingWindowControl>,
        launcher: Arc<RecordingLauncher>,
    }

    fn settings() -> Settings {
        let lookup = |_: &str| None;
        Settings::resolve(lookup, Some(PathBuf::from("/home/ada"))).unwrap()
    }

    fn fixture_with_source(window_source: Arc<dyn WindowSource>) -> Fixture {
        let window_control = Arc::new(RecordingWindowControl::new());
        let launcher = Arc::new(RecordingLauncher::new());
        let bookmarks = StubBookmarkRepository::with_bookmarks(vec![Bookmark::new(
            "7",
            "Crates",
            "https://crates.io",
            vec!["rust".to_string()],
            "Rust package registry",
        )]);
        let images = StubImageCatalog::with_paths(&[
            "/home/ada/files/cuis-university/images/Cuis6.0.image",
        ]);

        let host = Host::with_ports(
            &settings(),
            HostPorts {
                window_source,
                window_control: window_control.clone(),
                bookmarks: Arc::new(bookmarks),
                images: Arc::new(images),
                launcher: launcher.clone(),
            },
        );

        Fixture {
            host,
            window_control,
            launcher,
        }
    }

    fn fixture() -> Fixture {
        let windows = StubWindowSource::with_windows(
            vec![
                WindowRecord::new("0x01", "1", "Navigator.firefox", "GitHub"),
                WindowRecord::new("0x02", "1", "Alacritty.Alacritty", "zsh"),
            ],
            Some("1"),
        );
        fixture_with_source(Arc::new(windows))
    }

    #[test]
    fn lists_plugins_in_registration_order() {
        let fixture = fixture();

        let triggers: Vec<&str> = fixture
            .host
            .plugins()
            .map(|plugin| plugin.default_trigger())
            .collect();

        assert_eq!(triggers, vec!["win ", "bm ", "cuis "]);
    }

    #[test]
    fn window_query_is_routed_to_switcher() {
        let fixture = fixture();

        let (plugin, items) = fixture.host.query("win git").unwrap();

        assert_eq!(plugin.id(), "window-switcher");
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].id, "0x01");
    }

    #[test]
    fn unknown_trigger_is_an_error() {
        let fixture = fixture();

        assert!(fixture.host.query("calc 2+2").is_err());
    }

    #[test]
    fn windows_only_host_still_switches_windows() {
        let windows = StubWindowSource::with_windows(
            vec![WindowRecord::new("0x01", "1", "Navigator.firefox", "GitHub")],
            Some("1"),
        );
        let window_control = Arc::new(RecordingWindowControl::new());
        let host = Host::windows_only_with_ports(
            RankOptions::default(),
            Arc::new(windows),
            window_control.clone(),
            Arc::new(RecordingLauncher::new()),
        );

        let ids: Vec<&str> = host.plugins().map(|plugin| plugin.id()).collect();
        assert_eq!(ids, vec!["window-switcher"]);
        assert!(host.query("bm rust").is_err());

        host.activate("win git", "0x01", None).unwrap();
        assert_eq!(
            window_control.calls(),
            vec![WindowCall::Activate("0x01".to_string())]
        );
    }

    #[test]
    fn window_source_failure_is_an_error() {
        let fixture = fixture_with_source(Arc::new(FailingWindowSource::unavailable()));

        let Err(error) = fixture.host.query("win git") else {
            panic!("window listing should fail without wmctrl");
        };

        assert!(format!("{error:#}").contains("wmctrl"));

        let fixture = fixture_with_source(Arc::new(FailingWindowSource::command_failed()));
        assert!(fixture.host.query("win").is_err());
    }

    #[test]
    fn each_query_reads_the_sources_again() {
        let windows = Arc::new(StubWindowSource::new());
        let bookmarks = Arc::new(StubBookmarkRepository::new());
        let host = Host::with_ports(
            &settings(),
            HostPorts {
                window_source: windows.clone(),
                window_control: Arc::new(RecordingWindowControl::new()),
                bookmarks: bookmarks.clone(),
                images: Arc::new(StubImageCatalog::with_paths(&[])),
                launcher: Arc::new(RecordingLauncher::new()),
            },
        );

        assert!(host.query("win zsh").unwrap().1.is_empty());
        assert!(host.query("bm crates").unwrap().1.is_empty());

        windows.given_windows(vec![WindowRecord::new("0x05", "2", "kitty.kitty", "zsh")]);
        windows.given_workspace(Some("2"));
        bookmarks.given_bookmarks(vec![Bookmark::new(
            "7",
            "Crates",
            "https://crates.io",
            Vec::new(),
            "",
        )]);

        assert_eq!(host.query("win zsh").unwrap().1[0].id, "0x05");
        assert_eq!(host.query("bm crates").unwrap().1[0].id, "7");
    }

    #[test]
    fn activating_window_defaults_to_switch() {
        let fixture = fixture();

        fixture.host.activate("win zsh", "0x02", None).unwrap();

        assert_eq!(
            fixture.window_control.calls(),
            vec![WindowCall::Activate("0x02".to_string())]
        );
    }

    #[test]
    fn activating_named_action_runs_it() {
        let fixture = fixture();

        fixture.host.activate("win", "0x01", Some("close")).unwrap();

        assert_eq!(
            fixture.window_control.calls(),
            vec![WindowCall::Close("0x01".to_string())]
        );
    }

    #[test]
    fn bookmark_actions_reach_launcher() {
        let fixture = fixture();

        fixture.host.activate("bm crates", "7", None).unwrap();
        fixture.host.activate("bm crates", "7", Some("copy")).unwrap();

        assert_eq!(fixture.launcher.opened_urls(), vec!["https://crates.io"]);
        assert_eq!(fixture.launcher.copied_texts(), vec!["https://crates.io"]);
    }

    #[test]
    fn image_action_spawns_opener() {
        let fixture = fixture();

        fixture.host.activate("cuis cuis6", "Cuis6.0", None).unwrap();

        assert_eq!(
            fixture.launcher.spawned(),
            vec![(
                "/home/ada/files/cuis-university/xdg-open.sh".to_string(),
                vec!["images/Cuis6.0.image".to_string()]
            )]
        );
    }

    #[test]
    fn missing_item_or_action_is_an_error() {
        let fixture = fixture();

        assert!(fixture.host.activate("win", "0x99", None).is_err());
        assert!(fixture.host.activate("win", "0x01", Some("minimize")).is_err());
        assert!(fixture.window_control.calls().is_empty());
    }
}
