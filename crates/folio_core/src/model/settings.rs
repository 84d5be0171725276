//! Site settings singleton.
//!
//! Replaced wholesale by the admin console; the only partial update is the
//! canonical override applied on load (see `model::seed`).

use serde::{Deserialize, Serialize};

/// Identity and hero copy shown across all pages.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Settings {
    pub name: String,
    pub brand_name: String,
    pub bio: String,
    pub hero_headline: String,
    pub hero_subline: String,
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(default)]
    pub socials: Socials,
}

/// Social profile links. Every entry is optional.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Socials {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub github: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub linkedin: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub twitter: Option<String>,
}

impl Settings {
    /// First word of the brand name, used as the header logo text.
    pub fn brand_mark(&self) -> &str {
        self.brand_name.split(' ').next().unwrap_or_default()
    }
}
