//! Application wiring: storage, store and router in one owned value.
//!
//! # Responsibility
//! - Open the configured key-value backend and load the portfolio store.
//! - Seed the router from the initial fragment.
//! - Build the admin console over the configured text-generation client.

use crate::assist::copywriter::Copywriter;
use crate::assist::gemini::GeminiTextGenerator;
use crate::config::FolioConfig;
use crate::logging::init_logging;
use crate::repo::kv_store::{SqliteKeyValueStore, StorageError};
use crate::repo::portfolio_repo::JsonPortfolioRepository;
use crate::route::page::Page;
use crate::route::router::Router;
use crate::service::admin_console::AdminConsole;
use crate::service::portfolio_store::PortfolioStore;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type AppStore = PortfolioStore<JsonPortfolioRepository<SqliteKeyValueStore>>;

/// Startup failure. Only backend setup can fail; loading never does.
#[derive(Debug)]
pub enum AppError {
    Logging(String),
    Storage(StorageError),
}

impl Display for AppError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Logging(message) => write!(f, "logging setup failed: {message}"),
            Self::Storage(err) => write!(f, "storage setup failed: {err}"),
        }
    }
}

impl Error for AppError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Logging(_) => None,
            Self::Storage(err) => Some(err),
        }
    }
}

impl From<StorageError> for AppError {
    fn from(value: StorageError) -> Self {
        Self::Storage(value)
    }
}

pub struct FolioApp {
    config: FolioConfig,
    store: AppStore,
    router: Router,
}

impl FolioApp {
    /// Opens storage per `config`, loads the store and seeds the router.
    pub fn open(config: FolioConfig, initial_fragment: Option<&str>) -> Result<Self, AppError> {
        if let Some(log_dir) = &config.log_dir {
            init_logging(&config.log_level, log_dir).map_err(AppError::Logging)?;
        }

        let backend = match &config.database_path {
            Some(path) => SqliteKeyValueStore::open(path)?,
            None => SqliteKeyValueStore::open_in_memory()?,
        };
        let repo = JsonPortfolioRepository::with_key(backend, config.storage_key.clone());
        let store = PortfolioStore::load(repo);
        let mut router = Router::new(initial_fragment);
        // Initial load counts as a navigation, like a fragment-change event.
        let initial_path = router.current_path().to_string();
        router.navigate(&initial_path);

        Ok(Self {
            config,
            store,
            router,
        })
    }

    pub fn store(&self) -> &AppStore {
        &self.store
    }

    pub fn store_mut(&mut self) -> &mut AppStore {
        &mut self.store
    }

    pub fn router(&self) -> &Router {
        &self.router
    }

    pub fn navigate(&mut self, fragment: &str) -> Page {
        self.router.navigate(fragment)
    }

    /// Admin console over the configured Gemini client and current settings.
    pub fn admin_console(&self) -> AdminConsole<GeminiTextGenerator> {
        let generator = GeminiTextGenerator::new(self.config.text_generation.clone());
        AdminConsole::new(Copywriter::new(generator), self.store.settings())
    }
}
