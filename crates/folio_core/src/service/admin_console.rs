//! Admin console editing flow.
//!
//! # Responsibility
//! - Hold the console's tab selection and form drafts.
//! - Run assistance requests under a single-flight guard and write their
//!   results back into the drafts.
//! - Commit drafts to the store through its mutation entry points.
//!
//! # Invariants
//! - At most one assistance request is outstanding per console.
//! - Draft borrows are never held across an await point.
//! - Console state is single-threaded UI state (interior mutability, `!Sync`).

use crate::assist::copywriter::Copywriter;
use crate::assist::single_flight::SingleFlight;
use crate::assist::TextGenerator;
use crate::model::ids::{Clock, IdGenerator};
use crate::model::project::{Project, ProjectDraft};
use crate::model::settings::Settings;
use crate::model::validation::ValidationError;
use crate::repo::portfolio_repo::PortfolioRepository;
use crate::service::portfolio_store::PortfolioStore;
use log::{debug, info};
use std::cell::{Cell, Ref, RefCell};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AdminTab {
    #[default]
    Settings,
    Projects,
    Leads,
}

/// Result of an assistance action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssistOutcome {
    /// Request completed and the draft was updated.
    Applied,
    /// Another request is outstanding; nothing was sent.
    Busy,
    /// Preconditions unmet (e.g. empty project title); nothing was sent.
    Skipped,
}

pub struct AdminConsole<G: TextGenerator> {
    copywriter: Copywriter<G>,
    flight: SingleFlight,
    active_tab: Cell<AdminTab>,
    settings_draft: RefCell<Settings>,
    project_draft: RefCell<ProjectDraft>,
}

impl<G: TextGenerator> AdminConsole<G> {
    /// Opens the console with the settings draft copied from `settings`.
    pub fn new(copywriter: Copywriter<G>, settings: &Settings) -> Self {
        Self {
            copywriter,
            flight: SingleFlight::new(),
            active_tab: Cell::new(AdminTab::default()),
            settings_draft: RefCell::new(settings.clone()),
            project_draft: RefCell::new(ProjectDraft::default()),
        }
    }

    pub fn active_tab(&self) -> AdminTab {
        self.active_tab.get()
    }

    pub fn select_tab(&self, tab: AdminTab) {
        self.active_tab.set(tab);
    }

    pub fn settings_draft(&self) -> Ref<'_, Settings> {
        self.settings_draft.borrow()
    }

    pub fn edit_settings(&self, edit: impl FnOnce(&mut Settings)) {
        edit(&mut *self.settings_draft.borrow_mut());
    }

    pub fn project_draft(&self) -> Ref<'_, ProjectDraft> {
        self.project_draft.borrow()
    }

    pub fn edit_project_draft(&self, edit: impl FnOnce(&mut ProjectDraft)) {
        edit(&mut *self.project_draft.borrow_mut());
    }

    /// Whether assistance buttons should be disabled.
    pub fn is_assist_pending(&self) -> bool {
        self.flight.is_pending()
    }

    /// Rewrites the bio in the settings draft. Failures leave it unchanged.
    pub async fn optimize_bio(&self) -> AssistOutcome {
        let Some(_permit) = self.flight.try_begin() else {
            debug!("event=assist_request module=admin op=improve_bio status=busy");
            return AssistOutcome::Busy;
        };
        let current_bio = self.settings_draft.borrow().bio.clone();
        let improved = self.copywriter.improve_bio(&current_bio).await;
        self.settings_draft.borrow_mut().bio = improved;
        AssistOutcome::Applied
    }

    /// Fills the project draft description from its title and skills.
    pub async fn draft_project_description(&self) -> AssistOutcome {
        let (title, skills) = {
            let draft = self.project_draft.borrow();
            (draft.title.clone(), draft.skills.clone())
        };
        if title.is_empty() {
            return AssistOutcome::Skipped;
        }
        let Some(_permit) = self.flight.try_begin() else {
            debug!("event=assist_request module=admin op=project_description status=busy");
            return AssistOutcome::Busy;
        };
        let description = self
            .copywriter
            .generate_project_description(&title, &skills)
            .await;
        self.project_draft.borrow_mut().description = description;
        AssistOutcome::Applied
    }

    /// Replaces the stored settings with the current draft.
    pub fn save_settings<R: PortfolioRepository>(&self, store: &mut PortfolioStore<R>) {
        store.update_settings(self.settings_draft.borrow().clone());
        info!("event=admin_save_settings module=admin status=ok");
    }

    /// Adds the drafted project and resets the draft.
    ///
    /// Validation failures leave both the store and the draft untouched.
    pub fn submit_project<R: PortfolioRepository, C: Clock>(
        &self,
        store: &mut PortfolioStore<R>,
        ids: &mut IdGenerator<C>,
    ) -> Result<Project, ValidationError> {
        let project = {
            let draft = self.project_draft.borrow();
            draft.validate()?;
            draft.to_project(ids.next_id())?
        };
        store.add_project(project.clone());
        *self.project_draft.borrow_mut() = ProjectDraft::default();
        info!(
            "event=admin_add_project module=admin status=ok project_id={}",
            project.id
        );
        Ok(project)
    }

    pub fn delete_project<R: PortfolioRepository>(
        &self,
        store: &mut PortfolioStore<R>,
        id: &str,
    ) -> bool {
        store.delete_project(id)
    }

    pub fn mark_lead_read<R: PortfolioRepository>(
        &self,
        store: &mut PortfolioStore<R>,
        id: &str,
    ) -> bool {
        store.mark_lead_read(id)
    }
}
