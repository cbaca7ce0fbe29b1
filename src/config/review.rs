//! Review-time checks for the compiled-in settings.
//!
//! The loader never validates; an empty URL or key is an authoring mistake
//! that these checks surface before a build ships.

use std::fmt;

use thiserror::Error;

use super::settings::TubeApiConfig;
use super::KEY_PREVIEW_LEN;

/// How serious a review finding is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// The settings cannot work as written.
    Error,
    /// The settings break a convention but may still work.
    Warning,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Error => write!(f, "error"),
            Self::Warning => write!(f, "warning"),
        }
    }
}

/// Problems that review can find in the settings.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ReviewIssue {
    #[error("API URL is empty")]
    EmptyUrl,

    #[error("API key is empty")]
    EmptyKey,

    #[error("API URL does not use http:// or https://: {url}")]
    UnexpectedScheme { url: String },

    #[error("API URL does not end in /api: {url}")]
    MissingApiPath { url: String },

    #[error("API key does not start with the sk- prefix")]
    MissingKeyPrefix,

    #[error("API key has only {length} characters; the preview shows it in full")]
    ShortKey { length: usize },
}

impl ReviewIssue {
    /// Severity of this issue.
    #[must_use]
    pub const fn severity(&self) -> Severity {
        match self {
            Self::EmptyUrl | Self::EmptyKey => Severity::Error,
            Self::UnexpectedScheme { .. }
            | Self::MissingApiPath { .. }
            | Self::MissingKeyPrefix
            | Self::ShortKey { .. } => Severity::Warning,
        }
    }
}

/// A single review result.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Finding {
    pub severity: Severity,
    pub issue: ReviewIssue,
}

impl From<ReviewIssue> for Finding {
    fn from(issue: ReviewIssue) -> Self {
        Self {
            severity: issue.severity(),
            issue,
        }
    }
}

/// Checks the settings against authoring conventions.
#[must_use]
pub fn review(config: &TubeApiConfig) -> Vec<Finding> {
    let mut issues = Vec::new();
    let url = config.api_url();
    let key = config.api_key();

    if url.is_empty() {
        issues.push(ReviewIssue::EmptyUrl);
    } else {
        if !has_http_scheme(url) {
            issues.push(ReviewIssue::UnexpectedScheme { url: url.to_owned() });
        }
        if !url.trim_end_matches('/').ends_with("/api") {
            issues.push(ReviewIssue::MissingApiPath { url: url.to_owned() });
        }
    }

    if key.is_empty() {
        issues.push(ReviewIssue::EmptyKey);
    } else {
        if !key.starts_with("sk-") {
            issues.push(ReviewIssue::MissingKeyPrefix);
        }
        let length = key.chars().count();
        if length < KEY_PREVIEW_LEN {
            issues.push(ReviewIssue::ShortKey { length });
        }
    }

    issues.into_iter().map(Finding::from).collect()
}

/// Scheme comparison ignores ASCII case, as URL schemes do.
fn has_http_scheme(url: &str) -> bool {
    ["http://", "https://"].iter().any(|scheme| {
        url.get(..scheme.len())
            .is_some_and(|prefix| prefix.eq_ignore_ascii_case(scheme))
    })
}

/// Returns true if any finding is an error.
#[must_use]
pub fn has_errors(findings: &[Finding]) -> bool {
    findings.iter().any(|f| f.severity == Severity::Error)
}
