//! Optional text-generation assistance for admin copy.
//!
//! # Responsibility
//! - Define the async text-generation boundary (`TextGenerator`).
//! - Wrap it in fail-soft copywriting operations with fixed fallbacks.
//! - Guard against overlapping requests from one admin session.
//!
//! # Invariants
//! - No assistance failure is ever returned to page callers.
//! - No retries and no timeout beyond the HTTP client's own.

use async_trait::async_trait;
use std::error::Error;
use std::fmt::{Display, Formatter};

pub mod copywriter;
pub mod gemini;
pub mod single_flight;

/// Failure from a text-generation backend.
#[derive(Debug)]
pub enum AssistError {
    /// No credential configured; requests are not attempted.
    MissingApiKey,
    /// Network or protocol failure.
    Transport(reqwest::Error),
    /// Service answered with a non-success status.
    Status(u16),
}

impl Display for AssistError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::MissingApiKey => write!(f, "text generation api key is not configured"),
            Self::Transport(err) => write!(f, "text generation request failed: {err}"),
            Self::Status(code) => write!(f, "text generation service returned status {code}"),
        }
    }
}

impl Error for AssistError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Transport(err) => Some(err),
            Self::MissingApiKey | Self::Status(_) => None,
        }
    }
}

impl From<reqwest::Error> for AssistError {
    fn from(value: reqwest::Error) -> Self {
        Self::Transport(value)
    }
}

/// Plain-text completion: one prompt in, one text out. May return empty text.
#[async_trait]
pub trait TextGenerator: Send + Sync {
    async fn generate(&self, prompt: &str) -> Result<String, AssistError>;
}
