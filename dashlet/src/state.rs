use std::sync::{Arc, RwLock};

use announcements::{Announcement, Context};

/// Shared application state the dashlet reads from.
///
/// Holds the announcement catalog (owned and refreshed upstream) and the id
/// of the active game. Readers get snapshots; nothing is cached between
/// evaluations.
#[derive(Clone, Default)]
pub struct SharedState {
    inner: Arc<RwLock<StateInner>>,
}

#[derive(Default)]
struct StateInner {
    announcements: Vec<Announcement>,
    active_game: Option<String>,
}

impl SharedState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the whole catalog.
    pub fn set_announcements(&self, announcements: Vec<Announcement>) {
        let Ok(mut inner) = self.inner.write() else {
            tracing::error!("State lock poisoned, dropping catalog update");
            return;
        };
        tracing::debug!(count = announcements.len(), "Announcement catalog replaced");
        inner.announcements = announcements;
    }

    /// Switch the active game. `None` or an empty id means no game is active.
    pub fn set_active_game(&self, game_id: Option<&str>) {
        let Ok(mut inner) = self.inner.write() else {
            tracing::error!("State lock poisoned, dropping active game update");
            return;
        };
        inner.active_game = game_id
            .filter(|id| !id.is_empty())
            .map(str::to_string);
    }

    pub fn announcements(&self) -> Vec<Announcement> {
        let Ok(inner) = self.inner.read() else {
            return Vec::new();
        };
        inner.announcements.clone()
    }

    pub fn active_game(&self) -> Option<String> {
        let Ok(inner) = self.inner.read() else {
            return None;
        };
        inner.active_game.clone()
    }

    /// Evaluation context for the current active game.
    pub fn context(&self, application_version: &str) -> Context {
        Context::new(self.active_game().as_deref(), application_version)
    }
}
