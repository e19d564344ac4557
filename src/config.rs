// src/config.rs
//
// Configuration structs. The embedding application decides where the
// values come from (env, file, flags); this crate only defines the shape.

use serde::Deserialize;

/// Connection settings for the external movie catalog.
#[derive(Debug, Clone, Deserialize)]
pub struct CatalogClientConfig {
    /// Base URL of the catalog API.
    pub url: String,
    /// API key sent on every request.
    pub key: String,
}

/// Startup migration settings: which external ids to ingest on boot.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct MigrationConfig {
    #[serde(default)]
    pub enabled: bool,
    /// Processed in order; keep previously migrated ids at the front so
    /// the stop-at-first-already-found shortcut converges.
    #[serde(default)]
    pub ids: Vec<String>,
}
