// src/config/settings.rs
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

const APP_DIR: &str = "notebook-compare";
const LOCAL_FILE: &str = "notebook-compare.toml";
const ENV_PREFIX: &str = "NOTEBOOK_COMPARE";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Path or http(s) URL of the catalog JSON.
    pub catalog_source: String,
    pub max_compare_items: usize,
    /// Shown on cards whose record carries no operating system.
    pub default_os: String,
    /// Filter options. Empty means "derive from the loaded catalog".
    pub categories: Vec<String>,
    pub log_level: String,
    pub window_width: f32,
    pub window_height: f32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            catalog_source: "data/notebooks.json".to_string(),
            max_compare_items: 3,
            default_os: "Windows 11".to_string(),
            categories: Vec::new(),
            log_level: "info".to_string(),
            window_width: 1024.0,
            window_height: 768.0,
        }
    }
}

impl Settings {
    /// User config dir, then the working directory, then the environment.
    pub fn load() -> Result<Self> {
        let user_file = Self::user_settings_path();
        Self::load_from(user_file.as_deref(), Some(Path::new(LOCAL_FILE)))
    }

    pub fn load_from(user_file: Option<&Path>, local_file: Option<&Path>) -> Result<Self> {
        let mut builder = config::Config::builder();

        for path in [user_file, local_file].into_iter().flatten() {
            builder = builder.add_source(config::File::from(path.to_path_buf()).required(false));
        }

        let settings: Settings = builder
            .add_source(
                config::Environment::with_prefix(ENV_PREFIX)
                    .try_parsing(true)
                    .list_separator(",")
                    .with_list_parse_key("categories"),
            )
            .build()
            .context("Failed to read settings")?
            .try_deserialize()
            .context("Failed to parse settings")?;

        Ok(settings.normalized())
    }

    fn normalized(mut self) -> Self {
        // A comparison needs at least two columns
        self.max_compare_items = self.max_compare_items.max(2);
        self.categories.retain(|c| !c.trim().is_empty());
        self
    }

    pub fn user_settings_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join(APP_DIR).join("settings.toml"))
    }
}
