//! Announcement catalog loading.
//!
//! The catalog is fetched and refreshed by another component; this only reads
//! what it left on disk. Both a bare array and the session envelope
//! `{ "announcements": [...] }` are accepted. Records are decoded one at a
//! time so a single bad entry only costs that entry.

use std::path::Path;

use announcements::Announcement;
use serde::Deserialize;
use serde_json::Value;

use crate::error::LoadError;

#[derive(Deserialize)]
#[serde(untagged)]
enum CatalogFile {
    List(Vec<Value>),
    Envelope { announcements: Vec<Value> },
}

/// Parse catalog JSON. Only a malformed document is an error; records that
/// cannot be read are logged and skipped.
pub fn parse_catalog(raw: &str) -> Result<Vec<Announcement>, serde_json::Error> {
    let records = match serde_json::from_str::<CatalogFile>(raw)? {
        CatalogFile::List(list) => list,
        CatalogFile::Envelope { announcements } => announcements,
    };

    Ok(records
        .into_iter()
        .enumerate()
        .filter_map(|(index, record)| match serde_json::from_value::<Announcement>(record) {
            Ok(announce) => Some(announce),
            Err(e) => {
                tracing::warn!(index, "Skipping unreadable announcement: {e}");
                None
            }
        })
        .collect())
}

/// Read the catalog at `path`. A missing file is an empty catalog.
pub fn load_catalog(path: &Path) -> Result<Vec<Announcement>, LoadError> {
    let raw = match std::fs::read_to_string(path) {
        Ok(raw) => raw,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            tracing::info!("No announcement catalog at {}, showing none", path.display());
            return Ok(Vec::new());
        }
        Err(source) => {
            return Err(LoadError::Io {
                path: path.to_path_buf(),
                source,
            });
        }
    };

    let catalog = parse_catalog(&raw).map_err(|source| LoadError::Json {
        path: path.to_path_buf(),
        source,
    })?;
    tracing::info!(count = catalog.len(), "Loaded announcement catalog");
    Ok(catalog)
}
