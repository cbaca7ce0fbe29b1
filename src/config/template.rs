//! Production template for operators replacing the development values.

use std::path::Path;

use tracing::info;

use super::settings::{ConfigError, TubeApiConfig};
use super::{PRODUCTION_API_KEY, PRODUCTION_API_URL};

impl TubeApiConfig {
    /// Creates the production example for operators to reference.
    #[must_use]
    pub fn production_template() -> Self {
        Self::with_values(PRODUCTION_API_URL, PRODUCTION_API_KEY)
    }

    /// Saves the settings to a JSON file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be written.
    pub fn save_to_file(&self, path: impl AsRef<Path>) -> Result<(), ConfigError> {
        let path = path.as_ref();
        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        info!("Wrote TubeAPI configuration template to {}", path.display());
        Ok(())
    }
}
