//! Severity to icon/label mapping.

use crate::model::Severity;

/// Icon shared by warning and critical announcements.
pub const WARNING_ICON: &str = "feedback-warning";

/// Display affordance for a severity. `label` is an untranslated key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeverityDisplay {
    pub icon_id: Option<&'static str>,
    pub label: &'static str,
}

/// Suffix for the `announcement-icon-<tag>` class name.
pub fn css_suffix(severity: Option<&Severity>) -> &str {
    severity.map_or("information", Severity::as_str)
}

/// Map a severity to its icon and label. A missing severity is `Information`;
/// an unrecognized one gets no icon and an empty label.
pub fn classify(severity: Option<&Severity>) -> SeverityDisplay {
    match severity.unwrap_or(&Severity::Information) {
        Severity::Warning => SeverityDisplay {
            icon_id: Some(WARNING_ICON),
            label: "Warning",
        },
        Severity::Critical => SeverityDisplay {
            icon_id: Some(WARNING_ICON),
            label: "Critical",
        },
        Severity::Information => SeverityDisplay {
            icon_id: None,
            label: "Information",
        },
        Severity::Other(_) => SeverityDisplay {
            icon_id: None,
            label: "",
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_is_information() {
        assert_eq!(classify(None), classify(Some(&Severity::Information)));
        assert_eq!(classify(None).label, "Information");
        assert_eq!(classify(None).icon_id, None);
    }

    #[test]
    fn warning_and_critical_share_icon() {
        let warning = classify(Some(&Severity::Warning));
        let critical = classify(Some(&Severity::Critical));
        assert_eq!(warning.icon_id, critical.icon_id);
        assert_eq!(warning.icon_id, Some(WARNING_ICON));
        assert_eq!(warning.label, "Warning");
        assert_eq!(critical.label, "Critical");
    }

    #[test]
    fn css_suffix_defaults_to_information() {
        assert_eq!(css_suffix(None), "information");
        assert_eq!(css_suffix(Some(&Severity::Critical)), "critical");
        assert_eq!(css_suffix(Some(&Severity::from("bogus"))), "bogus");
    }

    #[test]
    fn unknown_has_empty_label() {
        let bogus = classify(Some(&Severity::from("bogus")));
        assert_eq!(bogus.label, "");
        assert_eq!(bogus.icon_id, None);
    }
}
