//! Relevance filter: which announcements apply to the current context.

use crate::model::{Announcement, Context};

/// Select the announcements visible in `ctx`, in catalog order.
///
/// An announcement is visible when it targets the active game (or no game)
/// and the running application version (or no version). Missing targeting
/// fields match everything; nothing here can fail.
pub fn filter_announcements<'a>(
    catalog: &'a [Announcement],
    ctx: &Context,
) -> Vec<&'a Announcement> {
    let mode = ctx.active_game_mode();

    let visible: Vec<&Announcement> = catalog
        .iter()
        .filter(|announce| matches_game_mode(announce, mode))
        .filter(|announce| matches_version(announce, ctx.application_version()))
        .collect();

    tracing::debug!(
        total = catalog.len(),
        visible = visible.len(),
        game_mode = mode.unwrap_or(""),
        version = ctx.application_version(),
        "Filtered announcements"
    );
    visible
}

/// With no active game only untargeted announcements match.
pub fn matches_game_mode(announce: &Announcement, active: Option<&str>) -> bool {
    match (announce.gamemode.as_deref(), active) {
        (None, _) => true,
        (Some(target), Some(active)) => target == active,
        (Some(_), None) => false,
    }
}

/// Exact string comparison; no semver or range handling.
pub fn matches_version(announce: &Announcement, app_version: &str) -> bool {
    announce
        .version
        .as_deref()
        .is_none_or(|target| target == app_version)
}
