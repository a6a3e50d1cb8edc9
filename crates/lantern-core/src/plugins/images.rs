use std::sync::Arc;

use tracing::debug;

use super::{Plugin, PluginError};
use crate::config::ImageLauncherSettings;
use crate::domain::{Action, ActionCommand, ImageEntry, Item};
use crate::ports::ImageCatalog;

/// Launches Cuis Smalltalk images found below the images directory.
pub struct ImageLauncherPlugin {
    catalog: Arc<dyn ImageCatalog>,
    settings: ImageLauncherSettings,
}

impl ImageLauncherPlugin {
    pub fn new(catalog: Arc<dyn ImageCatalog>, settings: ImageLauncherSettings) -> Self {
        Self { catalog, settings }
    }

    fn image_item(&self, image: ImageEntry) -> Item {
        let relative = image
            .path
            .strip_prefix(&self.settings.root_dir)
            .unwrap_or(&image.path)
            .to_string_lossy()
            .into_owned();

        Item::new(
            image.name.clone(),
            image.name.clone(),
            image.path.to_string_lossy(),
        )
        .with_completion(format!("cuis {}", image.name))
        .with_action(Action::new(
            "open",
            "Open",
            ActionCommand::RunDetached {
                program: self.settings.opener_script.to_string_lossy().into_owned(),
                args: vec![relative],
            },
        ))
    }
}

impl Plugin for ImageLauncherPlugin {
    fn id(&self) -> &'static str {
        "images"
    }

    fn name(&self) -> &'static str {
        "Cuis"
    }

    fn description(&self) -> &'static str {
        "Launch Cuis images"
    }

    fn synopsis(&self) -> &'static str {
        "<cuis-image>"
    }

    fn default_trigger(&self) -> &'static str {
        "cuis "
    }

    fn handle_query(&self, query: &str) -> Result<Vec<Item>, PluginError> {
        let search = query.trim().to_lowercase();

        let mut images: Vec<ImageEntry> = self
            .catalog
            .list_images()?
            .into_iter()
            .filter(|image| image.matches(&search))
            .collect();
        images.sort_by_cached_key(ImageEntry::sort_key);

        debug!(%search, matches = images.len(), "image query handled");
        Ok(images
            .into_iter()
            .map(|image| self.image_item(image))
            .collect())
    }
}
