//! Project domain model.
//!
//! # Responsibility
//! - Define the portfolio project record and its fixed category set.
//! - Turn admin draft input into a validated `Project`.
//!
//! # Invariants
//! - `id` is assigned once at creation and never reused.
//! - Projects are never edited in place; they are only added or deleted.

use crate::model::validation::{require, ValidationError};
use serde::{Deserialize, Serialize};

/// Stable project identifier (stringified creation millis for new records).
pub type ProjectId = String;

/// Image used by the admin form until the user supplies one.
pub const DEFAULT_PROJECT_IMAGE_URL: &str = "https://picsum.photos/800/600";

/// Fixed project category set. Serialized as the display label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ProjectCategory {
    #[serde(rename = "Web Development")]
    Web,
    #[serde(rename = "Mobile App")]
    Mobile,
    #[serde(rename = "UI/UX Design")]
    Design,
    #[serde(rename = "AI/ML")]
    Ai,
}

impl ProjectCategory {
    /// All categories in display order.
    pub const ALL: [ProjectCategory; 4] = [Self::Web, Self::Mobile, Self::Design, Self::Ai];

    pub fn label(self) -> &'static str {
        match self {
            Self::Web => "Web Development",
            Self::Mobile => "Mobile App",
            Self::Design => "UI/UX Design",
            Self::Ai => "AI/ML",
        }
    }
}

/// Portfolio project shown on the home showcase and portfolio pages.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: ProjectId,
    pub title: String,
    pub description: String,
    pub category: ProjectCategory,
    pub image_url: String,
    pub skills: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub github: Option<String>,
    /// Shown in the condensed home-page showcase.
    pub featured: bool,
}

/// Admin "new project" form state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectDraft {
    pub title: String,
    pub description: String,
    pub category: ProjectCategory,
    pub image_url: String,
    pub skills: Vec<String>,
    pub featured: bool,
    pub link: Option<String>,
    pub github: Option<String>,
}

impl Default for ProjectDraft {
    fn default() -> Self {
        Self {
            title: String::new(),
            description: String::new(),
            category: ProjectCategory::Web,
            image_url: DEFAULT_PROJECT_IMAGE_URL.to_string(),
            skills: Vec::new(),
            featured: false,
            link: None,
            github: None,
        }
    }
}

impl ProjectDraft {
    /// Replaces skills from comma-separated input, dropping blank entries.
    pub fn set_skills_csv(&mut self, input: &str) {
        self.skills = input
            .split(',')
            .map(str::trim)
            .filter(|skill| !skill.is_empty())
            .map(str::to_string)
            .collect();
    }

    /// Checks the fields the admin form requires before submission.
    pub fn validate(&self) -> Result<(), ValidationError> {
        require("title", &self.title)?;
        require("description", &self.description)?;
        Ok(())
    }

    /// Builds a project with the caller-generated `id`.
    ///
    /// Blank optional links are stored as absent.
    pub fn to_project(&self, id: impl Into<ProjectId>) -> Result<Project, ValidationError> {
        self.validate()?;
        Ok(Project {
            id: id.into(),
            title: self.title.clone(),
            description: self.description.clone(),
            category: self.category,
            image_url: self.image_url.clone(),
            skills: self.skills.clone(),
            link: non_blank(self.link.as_deref()),
            github: non_blank(self.github.as_deref()),
            featured: self.featured,
        })
    }
}

fn non_blank(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|value| !value.is_empty())
        .map(str::to_string)
}
