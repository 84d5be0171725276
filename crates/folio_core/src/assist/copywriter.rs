//! Fail-soft copywriting operations for the admin console.
//!
//! # Invariants
//! - `generate_project_description` always resolves to text: generated copy,
//!   `DESCRIPTION_EMPTY_FALLBACK`, or `DESCRIPTION_ERROR_FALLBACK`.
//! - `improve_bio` resolves to the input bio on any failure or empty reply.

use crate::assist::TextGenerator;
use log::{info, warn};
use std::time::Instant;

/// Returned when the service answers with no text.
pub const DESCRIPTION_EMPTY_FALLBACK: &str = "Failed to generate description.";
/// Returned when the request itself fails.
pub const DESCRIPTION_ERROR_FALLBACK: &str = "Error generating description with AI.";

pub fn project_description_prompt(title: &str, skills: &[String]) -> String {
    format!(
        "Write a professional 2-sentence description for a portfolio project titled \"{title}\" using these technologies: {}. Keep it impactful and results-oriented.",
        skills.join(", ")
    )
}

pub fn bio_prompt(current_bio: &str) -> String {
    format!(
        "Improve this professional portfolio bio to be more engaging and authoritative: \"{current_bio}\". Use a modern, professional tone. Keep it under 100 words."
    )
}

enum Completion {
    Text(String),
    Empty,
    Failed,
}

pub struct Copywriter<G: TextGenerator> {
    generator: G,
}

impl<G: TextGenerator> Copywriter<G> {
    pub fn new(generator: G) -> Self {
        Self { generator }
    }

    pub async fn generate_project_description(&self, title: &str, skills: &[String]) -> String {
        let prompt = project_description_prompt(title, skills);
        match self.complete("project_description", &prompt).await {
            Completion::Text(text) => text,
            Completion::Empty => DESCRIPTION_EMPTY_FALLBACK.to_string(),
            Completion::Failed => DESCRIPTION_ERROR_FALLBACK.to_string(),
        }
    }

    pub async fn improve_bio(&self, current_bio: &str) -> String {
        let prompt = bio_prompt(current_bio);
        match self.complete("improve_bio", &prompt).await {
            Completion::Text(text) => text,
            Completion::Empty | Completion::Failed => current_bio.to_string(),
        }
    }

    async fn complete(&self, op: &'static str, prompt: &str) -> Completion {
        let started_at = Instant::now();
        match self.generator.generate(prompt).await {
            Ok(text) => {
                let empty = text.is_empty();
                info!(
                    "event=assist_request module=assist op={} status={} duration_ms={} chars={}",
                    op,
                    if empty { "empty" } else { "ok" },
                    started_at.elapsed().as_millis(),
                    text.chars().count()
                );
                if empty {
                    Completion::Empty
                } else {
                    Completion::Text(text)
                }
            }
            Err(err) => {
                warn!(
                    "event=assist_request module=assist op={} status=error duration_ms={} error={}",
                    op,
                    started_at.elapsed().as_millis(),
                    err
                );
                Completion::Failed
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{bio_prompt, project_description_prompt};

    #[test]
    fn project_prompt_lists_skills_comma_separated() {
        let prompt =
            project_description_prompt("Folio", &["Rust".to_string(), "SQLite".to_string()]);
        assert!(prompt.contains("titled \"Folio\""));
        assert!(prompt.contains("technologies: Rust, SQLite."));
    }

    #[test]
    fn bio_prompt_quotes_current_bio() {
        assert!(bio_prompt("I build things").contains("\"I build things\""));
    }
}
