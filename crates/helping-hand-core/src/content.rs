//! Site content loaded once at startup
//!
//! Two JSON documents live in the data directory: `config.json` with the
//! organization settings and bank details, and `stories.json` with the
//! ordered list of published stories. Both are read when the process starts
//! and are never mutated afterwards.

use crate::error::{Result, SiteError};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;
use tracing::{debug, info};

/// Settings document file name
pub const CONFIG_FILE_NAME: &str = "config.json";

/// Stories document file name
pub const STORIES_FILE_NAME: &str = "stories.json";

/// Organization-wide settings
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    pub site_name: Option<String>,
    pub tagline: Option<String>,
    pub description: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub ogrn: Option<String>,
    pub inn: Option<String>,
    pub socials: Vec<SocialLink>,
    pub bank: BankDetails,
    /// Fields the site does not know about, passed through to templates
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SocialLink {
    pub title: String,
    pub url: String,
}

/// Bank transfer details shown on the donate page and encoded into the QR
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct BankDetails {
    pub beneficiary: Option<String>,
    pub inn: Option<String>,
    pub account: Option<String>,
    pub bank_name: Option<String>,
    pub bik: Option<String>,
    pub purpose: Option<String>,
}

/// A published story
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Story {
    pub id: String,
    #[serde(default)]
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub body: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub goal: Option<String>,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

/// Immutable site content shared by every request
#[derive(Debug, Clone)]
pub struct SiteContent {
    config: SiteConfig,
    stories: Vec<Story>,
}

impl SiteContent {
    /// Build content from already parsed parts, rejecting duplicate story ids
    pub fn new(config: SiteConfig, stories: Vec<Story>) -> Result<Self> {
        let mut seen = HashSet::new();
        for story in &stories {
            if !seen.insert(story.id.as_str()) {
                return Err(SiteError::DuplicateStory(story.id.clone()));
            }
        }
        Ok(Self { config, stories })
    }

    /// Load `config.json` and `stories.json` from a data directory
    pub fn load(data_dir: &Path) -> Result<Self> {
        let config: SiteConfig = read_json(&data_dir.join(CONFIG_FILE_NAME))?;
        let stories: Vec<Story> = read_json(&data_dir.join(STORIES_FILE_NAME))?;
        info!(
            "Loaded site content from {}: {} stories",
            data_dir.display(),
            stories.len()
        );
        Self::new(config, stories)
    }

    pub fn config(&self) -> &SiteConfig {
        &self.config
    }

    pub fn bank(&self) -> &BankDetails {
        &self.config.bank
    }

    pub fn stories(&self) -> &[Story] {
        &self.stories
    }

    /// Find a story by exact id match
    pub fn story(&self, id: &str) -> Option<&Story> {
        self.stories.iter().find(|s| s.id == id)
    }
}

fn read_json<T: DeserializeOwned>(path: &Path) -> Result<T> {
    debug!("Reading {}", path.display());
    let content = std::fs::read_to_string(path).map_err(|source| SiteError::ContentRead {
        path: path.to_path_buf(),
        source,
    })?;
    serde_json::from_str(&content).map_err(|source| SiteError::ContentParse {
        path: path.to_path_buf(),
        source,
    })
}
