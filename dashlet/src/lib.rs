pub mod catalog;
pub mod config;
pub mod error;
pub mod i18n;
pub mod opener;
pub mod state;
pub mod view;

use config::AppConfig;
use i18n::{StaticTranslator, Translator};
use opener::{LinkOpener, SystemOpener};
use state::SharedState;
use view::DashletView;

/// The announcement dashlet: reads the shared state, renders through the
/// translator and opens links through the opener.
pub struct Dashlet {
    state: SharedState,
    application_version: String,
    translator: Box<dyn Translator + Send + Sync>,
    opener: Box<dyn LinkOpener + Send + Sync>,
}

impl Dashlet {
    pub fn new(
        state: SharedState,
        application_version: impl Into<String>,
        translator: Box<dyn Translator + Send + Sync>,
    ) -> Self {
        Self {
            state,
            application_version: application_version.into(),
            translator,
            opener: Box::new(SystemOpener),
        }
    }

    pub fn with_opener(mut self, opener: Box<dyn LinkOpener + Send + Sync>) -> Self {
        self.opener = opener;
        self
    }

    pub fn state(&self) -> &SharedState {
        &self.state
    }

    /// Render against the current catalog and active game.
    pub fn view(&self) -> DashletView {
        let catalog = self.state.announcements();
        let ctx = self.state.context(&self.application_version);
        view::render(&catalog, &ctx, self.translator.as_ref())
    }

    /// Open an announcement link. Never reports failure.
    pub fn open_link(&self, url: &str) {
        opener::open_link(self.opener.as_ref(), url);
    }
}

/// Load .env from multiple candidate paths.
fn load_dotenv() {
    let candidates = [".env", "../.env", "../../.env"];
    for path in &candidates {
        if dotenvy::from_filename(path).is_ok() {
            tracing::info!("Loaded .env from: {path}");
            return;
        }
    }
    tracing::info!("No .env file found, using system environment variables");
}

/// Load config, catalog and translations, and assemble the dashlet.
pub fn init_foundation() -> Result<(AppConfig, Dashlet), anyhow::Error> {
    load_dotenv();
    let config = AppConfig::load()?;

    let state = SharedState::new();
    state.set_announcements(catalog::load_catalog(&config.catalog_path)?);
    state.set_active_game(config.active_game_mode.as_deref());

    let translator = match &config.translations_path {
        Some(path) => StaticTranslator::load(config.locale.clone(), path)?,
        None => StaticTranslator::new(config.locale.clone()),
    };

    tracing::info!(
        version = %config.application_version,
        locale = %config.locale,
        game = config.active_game_mode.as_deref().unwrap_or(""),
        "Settings loaded"
    );
    let dashlet = Dashlet::new(state, config.application_version.clone(), Box::new(translator));
    Ok((config, dashlet))
}
