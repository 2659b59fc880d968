//! Announcement selection for the dashboard.
//!
//! Picks the announcements relevant to the active game and the running
//! application version, and maps their severity to a display affordance.

pub mod filter;
pub mod model;
pub mod severity;

pub use filter::{filter_announcements, matches_game_mode, matches_version};
pub use model::{Announcement, Context, Severity};
pub use severity::{SeverityDisplay, classify, css_suffix};
