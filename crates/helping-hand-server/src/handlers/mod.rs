//! HTTP handlers

pub mod contacts;
pub mod donate;
pub mod health;
pub mod pages;
pub mod stories;

pub use health::health;
