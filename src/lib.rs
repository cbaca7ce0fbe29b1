//! TubeAPI Configuration Library
//!
//! Connection settings for clients of a TubeAPI server.
//!
//! This crate provides:
//! - The compiled-in API base URL and API key
//! - A load-time confirmation banner that never shows the full key
//! - Review-time checks for authoring mistakes
//! - A production template operators can start from

pub mod config;

pub use config::TubeApiConfig;
