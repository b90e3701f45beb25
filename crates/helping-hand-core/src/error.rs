//! Error types for Helping Hand

use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, SiteError>;

#[derive(Error, Debug)]
pub enum SiteError {
    #[error("Failed to read {path}: {source}")]
    ContentRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse {path}: {source}")]
    ContentParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Duplicate story id: {0}")]
    DuplicateStory(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Failed to write submission {path}: {source}")]
    StorageWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("QR encoding error: {0}")]
    Qr(#[from] qrcode::types::QrError),

    #[error("Image encoding error: {0}")]
    Image(#[from] image::ImageError),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
