//! Settings for the application being built: package, activity, flavor and tool paths.
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::app::App;
use crate::error::{Error, Result};

pub const LOCAL_CONFIG_FILE: &str = "droidcmd.json";

const DEFAULT_PACKAGE: &str = "org.citra.citra_emu";
const DEFAULT_ACTIVITY: &str = "org.citra.citra_emu.ui.main.MainActivity";
const DEFAULT_FLAVOR: &str = "Nightly";

#[cfg(windows)]
const DEFAULT_GRADLE: &str = r".\gradlew.bat";
#[cfg(not(windows))]
const DEFAULT_GRADLE: &str = "./gradlew";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub package: String,
    pub launch_activity: String,
    /// Product flavor in `install<Flavor><Config>` / `uninstall<Flavor><Config>`.
    pub flavor: String,
    pub gradle: String,
    /// adb serial, passed as `-s` when set.
    pub device: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            package: DEFAULT_PACKAGE.to_string(),
            launch_activity: DEFAULT_ACTIVITY.to_string(),
            flavor: DEFAULT_FLAVOR.to_string(),
            gradle: DEFAULT_GRADLE.to_string(),
            device: None,
        }
    }
}

impl Config {
    /// Loads `./droidcmd.json`, falling back to the user config file and then
    /// to defaults, and applies `DROIDCMD_*` environment overrides on top.
    pub fn load() -> Result<Self> {
        let config = match Self::candidate_paths().into_iter().find(|p| p.is_file()) {
            Some(path) => Self::load_from(&path)?,
            None => {
                debug!("no config file found, using defaults");
                Self::default()
            }
        };
        Ok(config.with_env(|key| std::env::var(key).ok()))
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        let raw = fs::read_to_string(path).map_err(|source| Error::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;
        let config = serde_json::from_str(&raw).map_err(|source| Error::ConfigParse {
            path: path.to_path_buf(),
            source,
        })?;
        debug!(path = %path.display(), "loaded config");
        Ok(config)
    }

    fn candidate_paths() -> Vec<PathBuf> {
        let mut paths = vec![PathBuf::from(LOCAL_CONFIG_FILE)];
        if let Some(dirs) = ProjectDirs::from("", "", "droidcmd") {
            paths.push(dirs.config_dir().join("config.json"));
        }
        paths
    }

    /// Applies overrides from `lookup`, which maps variable names to values.
    pub fn with_env<F>(mut self, lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let non_empty = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        if let Some(v) = non_empty("DROIDCMD_PACKAGE") {
            self.package = v;
        }
        if let Some(v) = non_empty("DROIDCMD_ACTIVITY") {
            self.launch_activity = v;
        }
        if let Some(v) = non_empty("DROIDCMD_FLAVOR") {
            self.flavor = v;
        }
        if let Some(v) = non_empty("DROIDCMD_GRADLE") {
            self.gradle = v;
        }
        if let Some(v) = non_empty("DROIDCMD_DEVICE") {
            self.device = Some(v);
        }
        self
    }

    pub fn app(&self) -> App {
        App::new(&self.package, &self.launch_activity)
    }
}
