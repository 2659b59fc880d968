//! Announcement records and the evaluation context they are matched against.

use chrono::{DateTime, NaiveDate, NaiveDateTime};
use serde::de::IgnoredAny;
use serde::{Deserialize, Deserializer, Serialize};

/// A single announcement as delivered by the upstream catalog.
///
/// `gamemode` and `version` are targeting fields: `None` matches any context.
/// Optional fields holding a non-string value are read as absent, and a
/// non-string severity as an unknown tag.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Announcement {
    pub description: String,
    #[serde(
        default,
        deserialize_with = "lenient_severity",
        skip_serializing_if = "Option::is_none"
    )]
    pub severity: Option<Severity>,
    pub date: String,
    #[serde(
        default,
        deserialize_with = "lenient_text",
        skip_serializing_if = "Option::is_none"
    )]
    pub link: Option<String>,
    #[serde(
        default,
        deserialize_with = "lenient_text",
        skip_serializing_if = "Option::is_none"
    )]
    pub gamemode: Option<String>,
    #[serde(
        default,
        deserialize_with = "lenient_text",
        skip_serializing_if = "Option::is_none"
    )]
    pub version: Option<String>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum LenientText {
    Text(String),
    Malformed(IgnoredAny),
}

fn lenient_text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<LenientText>::deserialize(deserializer)? {
        Some(LenientText::Text(text)) => Some(text),
        Some(LenientText::Malformed(_)) | None => None,
    })
}

fn lenient_severity<'de, D>(deserializer: D) -> Result<Option<Severity>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Option::<LenientText>::deserialize(deserializer)? {
        Some(LenientText::Text(tag)) => Some(Severity::from(tag)),
        Some(LenientText::Malformed(_)) => Some(Severity::Other(String::new())),
        None => None,
    })
}

impl Announcement {
    /// Create an untargeted announcement with no severity or link.
    pub fn new(description: impl Into<String>, date: impl Into<String>) -> Self {
        Self {
            description: description.into(),
            severity: None,
            date: date.into(),
            link: None,
            gamemode: None,
            version: None,
        }
    }

    pub fn with_severity(mut self, severity: Severity) -> Self {
        self.severity = Some(severity);
        self
    }

    pub fn with_link(mut self, link: impl Into<String>) -> Self {
        self.link = Some(link.into());
        self
    }

    pub fn with_gamemode(mut self, gamemode: impl Into<String>) -> Self {
        self.gamemode = Some(gamemode.into());
        self
    }

    pub fn with_version(mut self, version: impl Into<String>) -> Self {
        self.version = Some(version.into());
        self
    }

    /// Calendar date of the announcement, if `date` is parseable.
    ///
    /// Accepts RFC 3339 timestamps, offset-less `YYYY-MM-DDTHH:MM:SS` and
    /// bare `YYYY-MM-DD`. Timestamps keep the date in their own offset.
    pub fn parsed_date(&self) -> Option<NaiveDate> {
        let raw = self.date.trim();
        if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
            return Some(dt.date_naive());
        }
        if let Ok(dt) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f") {
            return Some(dt.date());
        }
        NaiveDate::parse_from_str(raw, "%Y-%m-%d").ok()
    }
}

/// Severity tag of an announcement.
///
/// Unrecognized tags are kept verbatim in `Other` instead of being rejected.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Severity {
    Information,
    Warning,
    Critical,
    Other(String),
}

impl Severity {
    pub fn as_str(&self) -> &str {
        match self {
            Self::Information => "information",
            Self::Warning => "warning",
            Self::Critical => "critical",
            Self::Other(tag) => tag,
        }
    }
}

impl From<String> for Severity {
    fn from(value: String) -> Self {
        match value.as_str() {
            "information" => Self::Information,
            "warning" => Self::Warning,
            "critical" => Self::Critical,
            _ => Self::Other(value),
        }
    }
}

impl From<&str> for Severity {
    fn from(value: &str) -> Self {
        Self::from(value.to_string())
    }
}

impl From<Severity> for String {
    fn from(value: Severity) -> Self {
        match value {
            Severity::Other(tag) => tag,
            known => known.as_str().to_string(),
        }
    }
}

/// What the filter matches announcements against.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Context {
    active_game_mode: Option<String>,
    application_version: String,
}

impl Context {
    /// Build a context. An empty game id means no game is active.
    pub fn new(active_game_mode: Option<&str>, application_version: impl Into<String>) -> Self {
        let active_game_mode = active_game_mode
            .filter(|mode| !mode.is_empty())
            .map(str::to_string);
        Self {
            active_game_mode,
            application_version: application_version.into(),
        }
    }

    pub fn active_game_mode(&self) -> Option<&str> {
        self.active_game_mode.as_deref()
    }

    pub fn application_version(&self) -> &str {
        &self.application_version
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_minimal_record() {
        let raw = serde_json::json!({
            "description": "Servers are down",
            "date": "2019-03-01T10:00:00Z"
        });
        let a: Announcement = serde_json::from_value(raw).expect("failed to parse announcement");

        assert_eq!(a.description, "Servers are down");
        assert!(a.severity.is_none());
        assert!(a.link.is_none());
        assert!(a.gamemode.is_none());
        assert!(a.version.is_none());
    }

    #[test]
    fn unknown_severity_is_kept() {
        let raw = serde_json::json!({
            "description": "x",
            "date": "2019-03-01",
            "severity": "bogus"
        });
        let a: Announcement = serde_json::from_value(raw).expect("failed to parse announcement");
        assert_eq!(a.severity, Some(Severity::Other("bogus".into())));

        let back = serde_json::to_value(&a).expect("failed to serialize announcement");
        assert_eq!(back["severity"], "bogus");
    }

    #[test]
    fn known_severities_parse() {
        assert_eq!(Severity::from("warning"), Severity::Warning);
        assert_eq!(Severity::from("critical"), Severity::Critical);
        assert_eq!(Severity::from("information"), Severity::Information);
        // Tags are case sensitive.
        assert_eq!(Severity::from("Warning"), Severity::Other("Warning".into()));
    }

    #[test]
    fn parsed_date_formats() {
        let expected = NaiveDate::from_ymd_opt(2019, 3, 1);
        assert_eq!(Announcement::new("a", "2019-03-01T23:30:00+02:00").parsed_date(), expected);
        assert_eq!(Announcement::new("a", "2019-03-01T10:00:00.000Z").parsed_date(), expected);
        assert_eq!(Announcement::new("a", "2019-03-01T10:00:00").parsed_date(), expected);
        assert_eq!(Announcement::new("a", "2019-03-01").parsed_date(), expected);
        assert_eq!(Announcement::new("a", "yesterday").parsed_date(), None);
    }

    #[test]
    fn malformed_optional_fields_degrade() {
        let raw = serde_json::json!({
            "description": "odd",
            "date": "2020-01-01",
            "severity": 3,
            "version": 2,
            "gamemode": { "id": "skyrim" },
            "link": false
        });
        let a: Announcement = serde_json::from_value(raw).expect("malformed optionals must not fail");

        assert_eq!(a.severity, Some(Severity::Other(String::new())));
        assert_eq!(a.version, None);
        assert_eq!(a.gamemode, None);
        assert_eq!(a.link, None);
    }

    #[test]
    fn null_optional_fields_are_absent() {
        let raw = serde_json::json!({
            "description": "x",
            "date": "2020-01-01",
            "severity": null,
            "gamemode": null
        });
        let a: Announcement = serde_json::from_value(raw).expect("failed to parse announcement");
        assert_eq!(a.severity, None);
        assert_eq!(a.gamemode, None);
    }

    #[test]
    fn only_empty_game_mode_is_no_game() {
        assert_eq!(Context::new(Some(""), "1.0").active_game_mode(), None);
        assert_eq!(Context::new(None, "1.0").active_game_mode(), None);
        // Whitespace is a real (if odd) game id.
        assert_eq!(Context::new(Some(" "), "1.0").active_game_mode(), Some(" "));
        assert_eq!(
            Context::new(Some("skyrim"), "1.0").active_game_mode(),
            Some("skyrim")
        );
    }

    #[test]
    fn context_exposes_version() {
        assert_eq!(Context::new(None, "1.2.0").application_version(), "1.2.0");
    }
}
