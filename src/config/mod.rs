//! Settings for budgetdash: where the spreadsheet lives, which sheets to read,
//! and the reconciliation offsets.

mod settings;

use anyhow::Result;
use std::path::{Path, PathBuf};

pub(crate) use settings::Settings;

/// Environment variable naming a config file.
pub(crate) const CONFIG_ENV: &str = "BUDGETDASH_CONFIG";

pub(crate) fn project_dirs() -> Result<directories::ProjectDirs> {
    directories::ProjectDirs::from("com", "budgetdash", "budgetdash")
        .ok_or_else(|| anyhow::anyhow!("Could not determine config directory"))
}

pub(crate) fn default_config_path() -> Result<PathBuf> {
    Ok(project_dirs()?.config_dir().join("config.yaml"))
}

/// An explicit path (flag or environment) must exist. The default location
/// falls back to built-in settings when absent.
pub(crate) fn load(explicit: Option<&Path>) -> Result<Settings> {
    if let Some(path) = explicit {
        return Settings::load(path);
    }
    if let Ok(path) = std::env::var(CONFIG_ENV) {
        return Settings::load(Path::new(&path));
    }
    Settings::load_or_default(&default_config_path()?)
}

#[cfg(test)]
mod tests;
