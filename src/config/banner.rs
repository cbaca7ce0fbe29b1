//! Load-time confirmation banner.

use std::fmt;
use std::io::{self, Write};

use super::settings::TubeApiConfig;

const HEADLINE: &str = "🚀 TubeAPI Configuration Loaded";
const URL_LABEL: &str = "📡 API URL:";
const KEY_LABEL: &str = "🔑 API Key:";

/// The three confirmation lines shown when the configuration is loaded.
#[derive(Debug, Clone, Copy)]
pub struct ConfigBanner<'a> {
    config: &'a TubeApiConfig,
}

impl<'a> ConfigBanner<'a> {
    /// Creates a banner for the given settings.
    #[must_use]
    pub const fn new(config: &'a TubeApiConfig) -> Self {
        Self { config }
    }

    /// Returns the banner lines without trailing newlines.
    #[must_use]
    pub fn lines(&self) -> [String; 3] {
        [
            HEADLINE.to_owned(),
            format!("{URL_LABEL} {}", self.config.api_url()),
            format!("{KEY_LABEL} {}", self.config.key_preview()),
        ]
    }

    /// Writes the banner to `out` and flushes it.
    pub fn write_to<W: Write>(&self, out: &mut W) -> io::Result<()> {
        write!(out, "{self}")?;
        out.flush()
    }
}

impl fmt::Display for ConfigBanner<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for line in self.lines() {
            writeln!(f, "{line}")?;
        }
        Ok(())
    }
}
