//! The TubeAPI connection settings and their load-time side effect.

use std::fmt;
use std::io::{self, Write};
use std::sync::LazyLock;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use super::banner::ConfigBanner;
use super::{API_KEY, API_URL, KEY_PREVIEW_LEN, KEY_PREVIEW_SUFFIX};

static GLOBAL: LazyLock<TubeApiConfig> = LazyLock::new(TubeApiConfig::load);

/// Read-only view of the TubeAPI connection settings.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TubeApiConfig {
    /// Base URL of the TubeAPI server.
    api_url: String,

    /// API key presented to the TubeAPI server.
    api_key: String,
}

impl TubeApiConfig {
    /// Builds the settings from the compiled-in constants without printing.
    #[must_use]
    pub fn compiled() -> Self {
        Self::with_values(API_URL, API_KEY)
    }

    pub(crate) fn with_values(api_url: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            api_url: api_url.into(),
            api_key: api_key.into(),
        }
    }

    /// Loads the compiled-in settings and prints the confirmation banner
    /// to standard output.
    ///
    /// A stdout that cannot be written (closed pipe, full device) is logged
    /// and otherwise ignored; the settings are returned regardless.
    pub fn load() -> Self {
        Self::load_reporting(&mut io::stdout().lock())
    }

    fn load_reporting<W: Write>(out: &mut W) -> Self {
        match Self::load_into(out) {
            Ok(config) => config,
            Err(e) => {
                warn!("Could not print TubeAPI configuration banner: {}", e);
                Self::compiled()
            }
        }
    }

    /// Loads the compiled-in settings, writing the confirmation banner to `out`.
    pub fn load_into<W: Write>(out: &mut W) -> io::Result<Self> {
        let config = Self::compiled();
        config.banner().write_to(out)?;
        debug!("TubeAPI configuration loaded for {}", config.api_url);
        Ok(config)
    }

    /// Returns the process-wide settings.
    ///
    /// The first call loads them and prints the banner; later calls return
    /// the same instance without output.
    #[must_use]
    pub fn global() -> &'static Self {
        &GLOBAL
    }

    /// Base URL of the TubeAPI server.
    #[must_use]
    pub fn api_url(&self) -> &str {
        &self.api_url
    }

    /// API key presented to the TubeAPI server.
    #[must_use]
    pub fn api_key(&self) -> &str {
        &self.api_key
    }

    /// Truncated form of the API key safe for display.
    #[must_use]
    pub fn key_preview(&self) -> String {
        key_preview(&self.api_key)
    }

    /// Confirmation banner for these settings.
    #[must_use]
    pub fn banner(&self) -> ConfigBanner<'_> {
        ConfigBanner::new(self)
    }
}

impl fmt::Debug for TubeApiConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TubeApiConfig")
            .field("api_url", &self.api_url)
            .field("api_key", &self.key_preview())
            .finish()
    }
}

/// Returns the first [`KEY_PREVIEW_LEN`] characters of `key` followed by
/// [`KEY_PREVIEW_SUFFIX`]. Shorter keys are shown whole.
#[must_use]
pub fn key_preview(key: &str) -> String {
    let mut preview: String = key.chars().take(KEY_PREVIEW_LEN).collect();
    preview.push_str(KEY_PREVIEW_SUFFIX);
    preview
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to write configuration file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to serialize configuration: {0}")]
    Serialize(#[from] serde_json::Error),
}
