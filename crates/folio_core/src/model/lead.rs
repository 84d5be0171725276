//! Lead domain model and the public contact form that creates leads.
//!
//! # Invariants
//! - `read` starts `false` and only transitions to `true`.
//! - Leads are never deleted.

use crate::model::validation::{require, ValidationError};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

static EMAIL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("valid email regex"));

/// Stable lead identifier.
pub type LeadId = String;

/// Subject prefilled in a fresh contact form.
pub const DEFAULT_CONTACT_SUBJECT: &str = "Project Inquiry";

/// Inbound contact-form submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Lead {
    pub id: LeadId,
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
    /// Creation instant, Unix epoch milliseconds.
    pub timestamp: i64,
    #[serde(default)]
    pub read: bool,
}

impl Lead {
    /// Flips the lead to read. Returns `false` when it already was.
    pub fn mark_read(&mut self) -> bool {
        if self.read {
            return false;
        }
        self.read = true;
        true
    }
}

/// Contact page form state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

impl Default for ContactForm {
    fn default() -> Self {
        Self {
            name: String::new(),
            email: String::new(),
            subject: DEFAULT_CONTACT_SUBJECT.to_string(),
            message: String::new(),
        }
    }
}

impl ContactForm {
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        subject: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            subject: subject.into(),
            message: message.into(),
        }
    }

    /// All four fields are required; email must look like an address.
    pub fn validate(&self) -> Result<(), ValidationError> {
        require("name", &self.name)?;
        require("email", &self.email)?;
        require("subject", &self.subject)?;
        require("message", &self.message)?;
        if !EMAIL_RE.is_match(self.email.trim()) {
            return Err(ValidationError::InvalidEmail(self.email.clone()));
        }
        Ok(())
    }

    /// Builds an unread lead from the form contents.
    pub fn to_lead(&self, id: impl Into<LeadId>, timestamp: i64) -> Result<Lead, ValidationError> {
        self.validate()?;
        Ok(Lead {
            id: id.into(),
            name: self.name.clone(),
            email: self.email.trim().to_string(),
            subject: self.subject.clone(),
            message: self.message.clone(),
            timestamp,
            read: false,
        })
    }

    /// Restores the blank form shown after a successful submission.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

#[cfg(test)]
mod tests {
    use super::{ContactForm, DEFAULT_CONTACT_SUBJECT};
    use crate::model::validation::ValidationError;

    #[test]
    fn fresh_form_prefills_subject() {
        let form = ContactForm::default();
        assert_eq!(form.subject, DEFAULT_CONTACT_SUBJECT);
        assert!(form.name.is_empty());
    }

    #[test]
    fn rejects_malformed_email() {
        let form = ContactForm::new("Ada", "ada-at-x", "Hi", "Test");
        assert_eq!(
            form.validate().unwrap_err(),
            ValidationError::InvalidEmail("ada-at-x".to_string())
        );
    }

    #[test]
    fn rejects_blank_message() {
        let form = ContactForm::new("Ada", "ada@x.com", "Hi", "  ");
        assert_eq!(
            form.validate().unwrap_err(),
            ValidationError::MissingField("message")
        );
    }

    #[test]
    fn mark_read_is_one_way() {
        let mut lead = ContactForm::new("Ada", "ada@x.com", "Hi", "Test")
            .to_lead("7", 7)
            .unwrap();
        assert!(!lead.read);
        assert!(lead.mark_read());
        assert!(!lead.mark_read());
        assert!(lead.read);
    }
}
