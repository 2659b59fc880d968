//! Presentation payload handed to the renderer.

use announcements::{Announcement, Context, Severity, classify, css_suffix, filter_announcements};
use serde::Serialize;

use crate::i18n::{Translator, display_date};

const PLACEHOLDER_ICON: &str = "announcements";
const LINK_ICON: &str = "about";

/// Everything the renderer needs to draw the dashlet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DashletView {
    pub title: String,
    pub body: DashletBody,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum DashletBody {
    /// Nothing applies to the current context.
    Placeholder {
        icon: String,
        text: String,
        subtext: String,
    },
    List { items: Vec<AnnouncementItem> },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AnnouncementItem {
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon: Option<IconView>,
    pub date: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub link: Option<LinkButton>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IconView {
    pub name: String,
    pub class_name: String,
    pub tooltip: String,
}

/// "View Issue" affordance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LinkButton {
    pub url: String,
    pub icon: String,
    pub tooltip: String,
}

impl DashletView {
    pub fn is_placeholder(&self) -> bool {
        matches!(self.body, DashletBody::Placeholder { .. })
    }

    pub fn items(&self) -> &[AnnouncementItem] {
        match &self.body {
            DashletBody::List { items } => items,
            DashletBody::Placeholder { .. } => &[],
        }
    }
}

/// Filter `catalog` for `ctx` and build the view.
pub fn render(catalog: &[Announcement], ctx: &Context, t: &dyn Translator) -> DashletView {
    let visible = filter_announcements(catalog, ctx);

    let body = if visible.is_empty() {
        DashletBody::Placeholder {
            icon: PLACEHOLDER_ICON.into(),
            text: t.translate("No Announcements"),
            subtext: t.translate("No news is good news!"),
        }
    } else {
        DashletBody::List {
            items: visible.into_iter().map(|a| render_item(a, t)).collect(),
        }
    };

    DashletView {
        title: t.translate("Announcements"),
        body,
    }
}

pub fn render_item(announce: &Announcement, t: &dyn Translator) -> AnnouncementItem {
    AnnouncementItem {
        description: announce.description.clone(),
        icon: render_icon(announce.severity.as_ref(), t),
        date: display_date(announce, t.locale()),
        link: announce.link.as_ref().map(|url| LinkButton {
            url: url.clone(),
            icon: LINK_ICON.into(),
            tooltip: t.translate("View Issue"),
        }),
    }
}

/// Only severities that carry an icon are drawn; the label becomes its tooltip.
fn render_icon(severity: Option<&Severity>, t: &dyn Translator) -> Option<IconView> {
    let display = classify(severity);
    let name = display.icon_id?;
    Some(IconView {
        name: name.into(),
        class_name: format!("announcement-icon announcement-icon-{}", css_suffix(severity)),
        tooltip: t.translate(display.label),
    })
}
