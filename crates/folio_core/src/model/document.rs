//! Aggregate root holding every piece of portfolio content.
//!
//! # Responsibility
//! - Own the project, testimonial and lead sequences plus site settings.
//! - Provide the pure transformations the store applies before persisting.
//!
//! # Invariants
//! - Additions are prepended, keeping sequences most-recent-first.
//! - Removal and read-marking are no-ops for unknown ids.

use crate::model::lead::Lead;
use crate::model::project::Project;
use crate::model::settings::Settings;
use crate::model::testimonial::Testimonial;
use serde::{Deserialize, Serialize};

/// The one portfolio document per process.
///
/// Missing sequences decode as empty; `settings` is required.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PortfolioDocument {
    #[serde(default)]
    pub projects: Vec<Project>,
    #[serde(default)]
    pub testimonials: Vec<Testimonial>,
    #[serde(default)]
    pub leads: Vec<Lead>,
    pub settings: Settings,
}

impl PortfolioDocument {
    pub fn replace_settings(&mut self, settings: Settings) {
        self.settings = settings;
    }

    pub fn prepend_project(&mut self, project: Project) {
        self.projects.insert(0, project);
    }

    /// Removes the first project with `id`. Returns whether one was removed.
    pub fn remove_project(&mut self, id: &str) -> bool {
        match self.projects.iter().position(|project| project.id == id) {
            Some(index) => {
                self.projects.remove(index);
                true
            }
            None => false,
        }
    }

    pub fn prepend_lead(&mut self, lead: Lead) {
        self.leads.insert(0, lead);
    }

    /// Marks the lead with `id` as read. Returns whether state changed.
    pub fn mark_lead_read(&mut self, id: &str) -> bool {
        self.leads
            .iter_mut()
            .find(|lead| lead.id == id)
            .is_some_and(Lead::mark_read)
    }
}
