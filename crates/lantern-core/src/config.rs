use std::path::PathBuf;

use thiserror::Error;

use crate::domain::RankOptions;

pub const BOOKMARKS_CSV_VARIABLE: &str = "LANTERN_BOOKMARKS_CSV";
pub const CUIS_DIR_VARIABLE: &str = "LANTERN_CUIS_DIR";

const DEFAULT_BOOKMARKS_CSV: &str = "notebook/bookmarks.csv";
const DEFAULT_CUIS_DIR: &str = "files/cuis-university";
const IMAGES_SUBDIRECTORY: &str = "images";
const OPENER_SCRIPT: &str = "xdg-open.sh";

#[derive(Error, Debug)]
pub enum SettingsError {
    #[error("cannot determine the home directory; set {variable}")]
    HomeNotFound { variable: &'static str },
}

/// Runtime settings for every plugin, resolved per invocation.
#[derive(Debug, Clone, PartialEq)]
pub struct Settings {
    pub bookmarks_csv: PathBuf,
    pub images: ImageLauncherSettings,
    pub rank: RankOptions,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageLauncherSettings {
    /// Installation directory; launched image paths are relative to it.
    pub root_dir: PathBuf,
    pub images_dir: PathBuf,
    pub opener_script: PathBuf,
}

impl ImageLauncherSettings {
    pub fn from_root(root_dir: PathBuf) -> Self {
        Self {
            images_dir: root_dir.join(IMAGES_SUBDIRECTORY),
            opener_script: root_dir.join(OPENER_SCRIPT),
            root_dir,
        }
    }
}

impl Settings {
    /// Resolves paths from the environment, defaulting below the home directory.
    pub fn from_env() -> Result<Self, SettingsError> {
        Self::resolve(|name| std::env::var(name).ok(), dirs::home_dir())
    }

    pub fn resolve(
        lookup: impl Fn(&str) -> Option<String>,
        home: Option<PathBuf>,
    ) -> Result<Self, SettingsError> {
        let bookmarks_csv = path_setting(
            &lookup,
            BOOKMARKS_CSV_VARIABLE,
            home.as_ref(),
            DEFAULT_BOOKMARKS_CSV,
        )?;
        let cuis_dir = path_setting(&lookup, CUIS_DIR_VARIABLE, home.as_ref(), DEFAULT_CUIS_DIR)?;

        Ok(Self {
            bookmarks_csv,
            images: ImageLauncherSettings::from_root(cuis_dir),
            rank: RankOptions::default(),
        })
    }

    pub fn with_rank_options(mut self, rank: RankOptions) -> Self {
        self.rank = rank;
        self
    }
}

fn path_setting(
    lookup: &impl Fn(&str) -> Option<String>,
    variable: &'static str,
    home: Option<&PathBuf>,
    default_relative: &str,
) -> Result<PathBuf, SettingsError> {
    if let Some(value) = lookup(variable).filter(|value| !value.trim().is_empty()) {
        return Ok(PathBuf::from(value));
    }

    home.map(|home| home.join(default_relative))
        .ok_or(SettingsError::HomeNotFound { variable })
}
