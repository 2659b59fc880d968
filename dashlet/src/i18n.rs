//! Localization: string lookup and locale-aware date display.

use std::collections::HashMap;
use std::path::Path;

use announcements::Announcement;
use chrono::NaiveDate;

use crate::error::LoadError;

/// Translation service the view renders through.
pub trait Translator {
    /// Translated text for `key`, or `key` itself when untranslated.
    fn translate(&self, key: &str) -> String;

    /// Locale identifier used for date formatting.
    fn locale(&self) -> &str;
}

/// Translator backed by an in-memory key/text table.
#[derive(Debug, Clone, Default)]
pub struct StaticTranslator {
    locale: String,
    entries: HashMap<String, String>,
}

impl StaticTranslator {
    /// Identity translator for `locale`.
    pub fn new(locale: impl Into<String>) -> Self {
        Self {
            locale: locale.into(),
            entries: HashMap::new(),
        }
    }

    pub fn with_entries(mut self, entries: HashMap<String, String>) -> Self {
        self.entries = entries;
        self
    }

    /// Load a flat JSON object of `"key": "text"` pairs.
    pub fn load(locale: impl Into<String>, path: &Path) -> Result<Self, LoadError> {
        let raw = std::fs::read_to_string(path).map_err(|source| LoadError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let entries: HashMap<String, String> =
            serde_json::from_str(&raw).map_err(|source| LoadError::Json {
                path: path.to_path_buf(),
                source,
            })?;
        tracing::info!(count = entries.len(), "Loaded translations from {}", path.display());
        Ok(Self::new(locale).with_entries(entries))
    }
}

impl Translator for StaticTranslator {
    fn translate(&self, key: &str) -> String {
        self.entries
            .get(key)
            .cloned()
            .unwrap_or_else(|| key.to_string())
    }

    fn locale(&self) -> &str {
        &self.locale
    }
}

/// Short numeric date in the convention of `locale`.
pub fn format_date(date: NaiveDate, locale: &str) -> String {
    let normalized = locale.trim().replace('_', "-").to_ascii_lowercase();
    let language = normalized.split('-').next().unwrap_or_default();

    let pattern = match (language, normalized.as_str()) {
        (_, "en" | "en-us") => "%-m/%-d/%Y",
        ("en" | "fr" | "es" | "it" | "pt", _) => "%d/%m/%Y",
        ("de" | "ru" | "pl" | "tr", _) => "%d.%m.%Y",
        ("ja" | "zh", _) => "%Y/%m/%d",
        _ => "%Y-%m-%d",
    };
    date.format(pattern).to_string()
}

/// Display string for an announcement's date; unparseable dates are shown raw.
pub fn display_date(announce: &Announcement, locale: &str) -> String {
    match announce.parsed_date() {
        Some(date) => format_date(date, locale),
        None => {
            tracing::debug!(date = %announce.date, "Unparseable announcement date");
            announce.date.clone()
        }
    }
}
