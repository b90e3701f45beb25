//! Contact form submissions
//!
//! Each submission is written as its own pretty-printed JSON file in the
//! submissions directory. Files are only ever created, never rewritten.

use crate::error::{Result, SiteError};
use chrono::Utc;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tokio::io::AsyncWriteExt;
use tracing::{info, warn};

/// Maximum length of the name part of a submission file name
pub const MAX_TOKEN_LEN: usize = 40;

/// Token used when nothing of the name survives sanitizing
pub const FALLBACK_TOKEN: &str = "user";

static UNSAFE_CHARS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[^A-Za-z0-9_-]+").expect("valid regex"));

/// Contact form fields as posted by the visitor
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactForm {
    pub name: String,
    pub contact: String,
    pub message: String,
}

impl ContactForm {
    /// Every field must be non-empty after trimming
    pub fn validate(&self) -> Result<()> {
        for (field, value) in [
            ("name", &self.name),
            ("contact", &self.contact),
            ("message", &self.message),
        ] {
            if value.trim().is_empty() {
                return Err(SiteError::Validation(format!("{} is required", field)));
            }
        }
        Ok(())
    }
}

/// A persisted submission record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactSubmission {
    pub ts: i64,
    pub name: String,
    pub contact: String,
    pub message: String,
}

/// Derive a file name fragment from a submitter's name.
///
/// Runs of characters outside `[A-Za-z0-9_-]` collapse into one `_`, the
/// result is cut to [`MAX_TOKEN_LEN`], and an empty result becomes
/// [`FALLBACK_TOKEN`].
pub fn safe_token(name: &str) -> String {
    let token: String = UNSAFE_CHARS
        .replace_all(name, "_")
        .chars()
        .take(MAX_TOKEN_LEN)
        .collect();
    if token.is_empty() {
        FALLBACK_TOKEN.to_string()
    } else {
        token
    }
}

/// Append-only store of contact submissions
#[derive(Debug, Clone)]
pub struct SubmissionStore {
    dir: PathBuf,
}

impl SubmissionStore {
    /// Open the store, creating the directory when missing
    pub fn new(dir: impl Into<PathBuf>) -> Result<Self> {
        let dir = dir.into();
        std::fs::create_dir_all(&dir).map_err(|source| SiteError::StorageWrite {
            path: dir.clone(),
            source,
        })?;
        Ok(Self { dir })
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Validate and persist a submission, returning the file written
    pub async fn save(&self, form: &ContactForm) -> Result<PathBuf> {
        form.validate()?;

        let submission = ContactSubmission {
            ts: Utc::now().timestamp(),
            name: form.name.clone(),
            contact: form.contact.clone(),
            message: form.message.clone(),
        };
        let body = serde_json::to_vec_pretty(&submission)?;
        let stem = format!("{}_{}", submission.ts, safe_token(&submission.name));

        let mut attempt = 1u32;
        loop {
            let path = if attempt == 1 {
                self.dir.join(format!("{}.json", stem))
            } else {
                self.dir.join(format!("{}-{}.json", stem, attempt))
            };

            match write_new(&path, &body).await {
                Ok(()) => {
                    info!("Saved contact submission to {}", path.display());
                    return Ok(path);
                }
                Err(e) if e.kind() == std::io::ErrorKind::AlreadyExists => {
                    attempt += 1;
                }
                Err(source) => return Err(SiteError::StorageWrite { path, source }),
            }
        }
    }
}

/// Create `path` (failing if it exists) and write `body`; a partial file is removed
async fn write_new(path: &Path, body: &[u8]) -> std::io::Result<()> {
    let mut file = tokio::fs::OpenOptions::new()
        .write(true)
        .create_new(true)
        .open(path)
        .await?;

    let written = async {
        file.write_all(body).await?;
        file.sync_all().await
    }
    .await;

    if let Err(e) = written {
        drop(file);
        if let Err(remove_err) = tokio::fs::remove_file(path).await {
            warn!("Failed to remove partial file {}: {}", path.display(), remove_err);
        }
        return Err(e);
    }
    Ok(())
}
