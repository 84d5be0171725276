//! Portfolio store: the single owner of the mutable document.
//!
//! # Responsibility
//! - Hold the current `PortfolioDocument` loaded through a repository.
//! - Apply each mutation and immediately persist the full document.
//!
//! # Invariants
//! - Loading writes the loaded document back once, replacing corrupt or
//!   missing blobs and storing the canonical settings overrides.
//! - Every mutation entry point saves exactly once, including no-op cases.
//! - Mutations are synchronous and never fail for valid input.

use crate::model::document::PortfolioDocument;
use crate::model::lead::Lead;
use crate::model::project::Project;
use crate::model::settings::Settings;
use crate::model::testimonial::Testimonial;
use crate::repo::portfolio_repo::PortfolioRepository;
use log::debug;

/// Owned store passed by reference to pages and the admin console.
pub struct PortfolioStore<R: PortfolioRepository> {
    repo: R,
    document: PortfolioDocument,
}

impl<R: PortfolioRepository> PortfolioStore<R> {
    /// Loads the document through `repo` and persists it once.
    ///
    /// Never fails; see `PortfolioRepository::load`.
    pub fn load(mut repo: R) -> Self {
        let document = repo.load();
        repo.save(&document);
        Self { repo, document }
    }

    /// Read-only snapshot handed to renderers.
    pub fn document(&self) -> &PortfolioDocument {
        &self.document
    }

    pub fn settings(&self) -> &Settings {
        &self.document.settings
    }

    pub fn projects(&self) -> &[Project] {
        &self.document.projects
    }

    pub fn testimonials(&self) -> &[Testimonial] {
        &self.document.testimonials
    }

    pub fn leads(&self) -> &[Lead] {
        &self.document.leads
    }

    pub fn repository(&self) -> &R {
        &self.repo
    }

    /// Replaces the settings sub-document wholesale.
    pub fn update_settings(&mut self, settings: Settings) {
        self.document.replace_settings(settings);
        self.persist("update_settings");
    }

    /// Prepends a caller-built project. Id uniqueness is the caller's job.
    pub fn add_project(&mut self, project: Project) {
        self.document.prepend_project(project);
        self.persist("add_project");
    }

    /// Removes the project with `id`; unknown ids are a no-op.
    pub fn delete_project(&mut self, id: &str) -> bool {
        let removed = self.document.remove_project(id);
        self.persist("delete_project");
        removed
    }

    /// Prepends a caller-built lead (id, timestamp and `read=false` set).
    pub fn add_lead(&mut self, lead: Lead) {
        self.document.prepend_lead(lead);
        self.persist("add_lead");
    }

    /// Marks the lead read; unknown or already-read ids are a no-op.
    pub fn mark_lead_read(&mut self, id: &str) -> bool {
        let changed = self.document.mark_lead_read(id);
        self.persist("mark_lead_read");
        changed
    }

    fn persist(&mut self, op: &'static str) {
        debug!(
            "event=store_mutation module=service op={} projects={} leads={}",
            op,
            self.document.projects.len(),
            self.document.leads.len()
        );
        self.repo.save(&self.document);
    }
}
