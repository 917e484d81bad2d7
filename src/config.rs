use std::path::PathBuf;

use tracing::{error, info};

use crate::error::IngestError;

/// Default endpoint of the document-library service.
pub const DEFAULT_BASE_URL: &str = "https://api.mistral.ai";

/// Fully resolved configuration for one ingestion run.
///
/// Secrets come from the environment; everything else from CLI flags with
/// their defaults (`files` directory, fixed library name and description).
#[derive(Debug, Clone)]
pub struct IngestConfig {
    pub api_key: String,
    pub base_url: String,
    pub files_dir: PathBuf,
    pub library_name: String,
    pub library_description: String,
}

impl IngestConfig {
    /// Merges CLI-provided settings with required env vars for secrets.
    /// Fails with a configuration error before any remote call is attempted.
    pub fn from_env(
        files_dir: PathBuf,
        library_name: String,
        library_description: String,
    ) -> Result<Self, IngestError> {
        let api_key = match std::env::var("MISTRAL_API_KEY") {
            Ok(key) if !key.is_empty() => {
                info!("MISTRAL_API_KEY found in env");
                key
            }
            Ok(_) => {
                error!("MISTRAL_API_KEY is set but empty");
                return Err(IngestError::Configuration(
                    "MISTRAL_API_KEY environment variable is empty".to_string(),
                ));
            }
            Err(e) => {
                error!(error = ?e, "MISTRAL_API_KEY environment variable not set");
                return Err(IngestError::Configuration(format!(
                    "MISTRAL_API_KEY environment variable not set: {e}"
                )));
            }
        };

        let base_url = match std::env::var("MISTRAL_BASE_URL") {
            Ok(url) => {
                info!(base_url = %url, "Using base URL override from env");
                url
            }
            Err(_) => DEFAULT_BASE_URL.to_string(),
        };

        info!(
            files_dir = %files_dir.display(),
            library_name = %library_name,
            "Config loaded and merged successfully"
        );

        Ok(IngestConfig {
            api_key,
            base_url,
            files_dir,
            library_name,
            library_description,
        })
    }
}
