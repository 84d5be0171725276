//! Portfolio document persistence over a key-value backend.
//!
//! # Responsibility
//! - Load the document from one storage key, falling back to seed data.
//! - Apply the canonical settings overrides to every persisted document.
//! - Write the full document back on every save.
//!
//! # Invariants
//! - `load` never fails: absent, unreadable or corrupt blobs yield the seed.
//! - `save` never fails: encode/backend errors are logged and dropped.

use crate::model::document::PortfolioDocument;
use crate::model::seed::{apply_canonical_overrides, seed_document};
use crate::repo::kv_store::KeyValueStore;
use log::{error, info, warn};

/// Storage key shared with already-persisted documents.
pub const DEFAULT_STORAGE_KEY: &str = "portfolio_data_v2";

/// Where a loaded document came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadSource {
    /// Decoded from storage (with canonical overrides applied).
    Persisted,
    /// Nothing stored under the key.
    SeedAbsent,
    /// Stored blob failed to decode.
    SeedCorrupt,
    /// Backend read failed.
    SeedUnavailable,
}

impl LoadSource {
    fn as_str(self) -> &'static str {
        match self {
            Self::Persisted => "persisted",
            Self::SeedAbsent => "seed_absent",
            Self::SeedCorrupt => "seed_corrupt",
            Self::SeedUnavailable => "seed_unavailable",
        }
    }
}

/// Load/save contract consumed by the portfolio store.
pub trait PortfolioRepository {
    fn load(&self) -> PortfolioDocument;
    fn save(&mut self, document: &PortfolioDocument);
}

/// Serializes the document to its persisted JSON shape.
pub fn encode_document(document: &PortfolioDocument) -> serde_json::Result<String> {
    serde_json::to_string(document)
}

/// Parses a persisted blob without applying any overrides.
pub fn decode_document(raw: &str) -> serde_json::Result<PortfolioDocument> {
    serde_json::from_str(raw)
}

/// JSON-blob repository over any `KeyValueStore`.
pub struct JsonPortfolioRepository<S: KeyValueStore> {
    backend: S,
    key: String,
}

impl<S: KeyValueStore> JsonPortfolioRepository<S> {
    /// Creates a repository using `DEFAULT_STORAGE_KEY`.
    pub fn new(backend: S) -> Self {
        Self::with_key(backend, DEFAULT_STORAGE_KEY)
    }

    pub fn with_key(backend: S, key: impl Into<String>) -> Self {
        Self {
            backend,
            key: key.into(),
        }
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn backend(&self) -> &S {
        &self.backend
    }

    /// Loads the document and reports which path produced it.
    pub fn load_with_source(&self) -> (PortfolioDocument, LoadSource) {
        let (document, source) = self.read_document();
        let status = if source == LoadSource::Persisted {
            "ok"
        } else {
            "fallback"
        };
        info!(
            "event=storage_load module=repo status={} source={} projects={} leads={}",
            status,
            source.as_str(),
            document.projects.len(),
            document.leads.len()
        );
        (document, source)
    }

    fn read_document(&self) -> (PortfolioDocument, LoadSource) {
        let raw = match self.backend.get(&self.key) {
            Ok(Some(raw)) => raw,
            Ok(None) => return (seed_document(), LoadSource::SeedAbsent),
            Err(err) => {
                error!(
                    "event=storage_load module=repo status=error error_code=storage_read_failed error={}",
                    err
                );
                return (seed_document(), LoadSource::SeedUnavailable);
            }
        };

        match decode_document(&raw) {
            Ok(mut document) => {
                apply_canonical_overrides(&mut document.settings);
                (document, LoadSource::Persisted)
            }
            Err(err) => {
                // Position only: decode messages can echo stored values.
                warn!(
                    "event=storage_load module=repo status=error error_code=storage_decode_failed category={:?} line={} column={}",
                    err.classify(),
                    err.line(),
                    err.column()
                );
                (seed_document(), LoadSource::SeedCorrupt)
            }
        }
    }
}

impl<S: KeyValueStore> PortfolioRepository for JsonPortfolioRepository<S> {
    fn load(&self) -> PortfolioDocument {
        self.load_with_source().0
    }

    fn save(&mut self, document: &PortfolioDocument) {
        let encoded = match encode_document(document) {
            Ok(encoded) => encoded,
            Err(err) => {
                error!(
                    "event=storage_save module=repo status=error error_code=storage_encode_failed error={}",
                    err
                );
                return;
            }
        };

        match self.backend.set(&self.key, &encoded) {
            Ok(()) => info!(
                "event=storage_save module=repo status=ok bytes={}",
                encoded.len()
            ),
            Err(err) => error!(
                "event=storage_save module=repo status=error error_code=storage_write_failed error={}",
                err
            ),
        }
    }
}
