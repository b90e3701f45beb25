//! Helping Hand - Core Library
//!
//! Site content loading, payment QR generation and contact submission
//! storage for the Helping Hand charity website.

pub mod content;
pub mod error;
pub mod links;
pub mod qr;
pub mod submission;

pub use content::{BankDetails, SiteConfig, SiteContent, SocialLink, Story};
pub use error::{Result, SiteError};
pub use submission::{ContactForm, ContactSubmission, SubmissionStore};
