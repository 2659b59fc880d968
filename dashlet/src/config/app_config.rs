//! Runtime configuration loaded from environment variables.

use std::path::PathBuf;

use super::validation::validate_setting;

/// Version reported when `DASHLET_APP_VERSION` is not set.
pub const BUILD_VERSION: &str = env!("CARGO_PKG_VERSION");

const DEFAULT_LOCALE: &str = "en";
const CATALOG_FILE: &str = "announcements.json";

/// Runtime configuration for the dashlet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub data_dir: PathBuf,
    pub catalog_path: PathBuf,
    pub translations_path: Option<PathBuf>,
    pub locale: String,
    /// Resolved once at startup; every evaluation uses the same value.
    pub application_version: String,
    pub active_game_mode: Option<String>,
}

impl AppConfig {
    /// Load configuration from the process environment.
    pub fn load() -> Result<Self, anyhow::Error> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build configuration from an arbitrary key lookup.
    ///
    /// Empty values count as unset. Invalid values are logged and replaced
    /// by their default.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, anyhow::Error>
    where
        F: Fn(&str) -> Option<String>,
    {
        let g = |key: &str| -> Option<String> {
            let value = lookup(key)?;
            let value = value.trim();
            if value.is_empty() {
                return None;
            }
            match validate_setting(key, value) {
                Ok(()) => Some(value.to_string()),
                Err(e) => {
                    tracing::warn!(key, value, "Ignoring invalid setting: {e}");
                    None
                }
            }
        };

        let data_dir = g("DASHLET_DATA_DIR")
            .map(PathBuf::from)
            .unwrap_or_else(default_data_dir);

        let catalog_path = g("DASHLET_CATALOG_PATH")
            .map(PathBuf::from)
            .unwrap_or_else(|| data_dir.join(CATALOG_FILE));

        Ok(Self {
            catalog_path,
            translations_path: g("DASHLET_TRANSLATIONS_PATH").map(PathBuf::from),
            locale: g("DASHLET_LOCALE").unwrap_or_else(|| DEFAULT_LOCALE.into()),
            application_version: g("DASHLET_APP_VERSION").unwrap_or_else(|| BUILD_VERSION.into()),
            active_game_mode: g("DASHLET_GAME_MODE"),
            data_dir,
        })
    }
}

/// Used when DASHLET_DATA_DIR is unset: ~/.announcement-dashlet
fn default_data_dir() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".announcement-dashlet")
}
