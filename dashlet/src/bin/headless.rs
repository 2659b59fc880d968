//! Headless renderer: evaluates the dashlet once and prints the view.
//!
//! Reads configuration from the environment (and `.env`), loads the catalog,
//! and writes the presentation payload as JSON to stdout. Logs go to stderr.

use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let (config, dashlet) = announcement_dashlet_lib::init_foundation()?;
    let view = dashlet.view();

    tracing::info!(
        catalog = %config.catalog_path.display(),
        visible = view.items().len(),
        "Rendered announcements"
    );

    println!("{}", serde_json::to_string_pretty(&view)?);
    Ok(())
}
