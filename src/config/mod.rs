//! Configuration module for TubeAPI clients.
//!
//! Holds the compiled-in API endpoint and credential, renders the
//! load-time confirmation banner, and provides review-time checks and a
//! production template for operators.

mod banner;
mod review;
mod settings;
mod template;

pub use banner::ConfigBanner;
pub use review::{has_errors, review, Finding, ReviewIssue, Severity};
pub use settings::{key_preview, ConfigError, TubeApiConfig};

/// Base URL of the TubeAPI server.
pub const API_URL: &str = "http://localhost:5000/api";

/// API key presented to the TubeAPI server.
pub const API_KEY: &str = "sk-admin-test-key-10k-requests";

/// Number of key characters shown in the confirmation banner.
pub const KEY_PREVIEW_LEN: usize = 10;

/// Suffix appended to the key preview.
pub const KEY_PREVIEW_SUFFIX: &str = "...";

/// Base URL used in the production template.
pub const PRODUCTION_API_URL: &str = "https://tubeapi-production.replit.app/api";

/// Placeholder key used in the production template.
pub const PRODUCTION_API_KEY: &str = "sk-prod-your-actual-api-key-here";
