//! Core domain logic for the folio portfolio site.
//! This crate is the single source of truth for content invariants.

pub mod app;
pub mod assist;
pub mod config;
pub mod db;
pub mod logging;
pub mod model;
pub mod repo;
pub mod route;
pub mod service;

pub use app::{AppError, FolioApp};
pub use assist::copywriter::{
    Copywriter, DESCRIPTION_EMPTY_FALLBACK, DESCRIPTION_ERROR_FALLBACK,
};
pub use assist::gemini::GeminiTextGenerator;
pub use assist::single_flight::SingleFlight;
pub use assist::{AssistError, TextGenerator};
pub use config::{FolioConfig, TextGenerationConfig};
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::document::PortfolioDocument;
pub use model::ids::{Clock, IdGenerator, SystemClock};
pub use model::lead::{ContactForm, Lead, LeadId};
pub use model::project::{Project, ProjectCategory, ProjectDraft, ProjectId};
pub use model::settings::{Settings, Socials};
pub use model::testimonial::Testimonial;
pub use model::validation::ValidationError;
pub use repo::kv_store::{
    KeyValueStore, MemoryKeyValueStore, SqliteKeyValueStore, StorageError, StorageResult,
};
pub use repo::portfolio_repo::{
    JsonPortfolioRepository, LoadSource, PortfolioRepository, DEFAULT_STORAGE_KEY,
};
pub use route::page::{is_nav_active, select_page, Page, NAV_ITEMS};
pub use route::router::{NavigationListener, Router, ScrollReset};
pub use service::admin_console::{AdminConsole, AdminTab, AssistOutcome};
pub use service::contact_service::submit_contact;
pub use service::portfolio_store::PortfolioStore;
pub use service::showcase::CategoryFilter;

/// Minimal health-check API for early integration.
pub fn ping() -> &'static str {
    "pong"
}

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
