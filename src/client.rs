//! # Mistral client (CLI <-> contract)
//!
//! This module wires up the [`LibraryClient`] trait for real use against the
//! Mistral document-library API, and provides the [`MistralClient`] used by
//! the CLI for networked uploads.
//!
//! - Construct [`MistralClient`] from an [`IngestConfig`] (API key plus base
//!   URL; the key comes from `MISTRAL_API_KEY`).
//! - All transport, serialization, and error mapping are encapsulated here.
//!   The trait itself is agnostic of authentication and wire details.

use async_trait::async_trait;
use tracing::{error, info};

use crate::config::IngestConfig;
use crate::contract::{Document, Library, LibraryClient, NewDocument, NewLibrary};
use crate::error::IngestError;

pub struct MistralClient {
    http: reqwest::Client,
    base_url: String,
    api_key: String,
}

impl MistralClient {
    pub fn new(api_key: String, base_url: String) -> Self {
        MistralClient {
            http: reqwest::Client::new(),
            base_url,
            api_key,
        }
    }

    pub fn from_config(config: &IngestConfig) -> Self {
        Self::new(config.api_key.clone(), config.base_url.clone())
    }

    async fn check_status(
        resp: reqwest::Response,
        stage: &'static str,
    ) -> Result<reqwest::Response, IngestError> {
        let status = resp.status();
        if status.is_success() {
            return Ok(resp);
        }
        let body = resp.text().await.unwrap_or_default();
        error!(%status, stage, body = %body, "Service rejected request");
        Err(IngestError::remote(
            stage,
            format!("HTTP {status}: {body}"),
        ))
    }
}

#[async_trait]
impl LibraryClient for MistralClient {
    async fn create_library<'a>(&self, req: NewLibrary<'a>) -> Result<Library, IngestError> {
        info!(name = req.name, "Creating document library");

        let url = format!("{}/v1/libraries", self.base_url);
        let body = serde_json::json!({
            "name": req.name,
            "description": req.description,
        });

        let resp = self
            .http
            .post(&url)
            .bearer_auth(&self.api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| IngestError::remote("create_library", e.to_string()))?;

        let resp = Self::check_status(resp, "create_library").await?;

        match resp.json::<Library>().await {
            Ok(library) => {
                info!(library_id = %library.id, "Successfully created library");
                Ok(library)
            }
            Err(e) => {
                error!(error = ?e, "Failed to decode create_library response");
                Err(IngestError::remote("create_library", e.to_string()))
            }
        }
    }

    async fn upload_document<'a>(&self, req: NewDocument<'a>) -> Result<Document, IngestError> {
        info!(
            library_id = req.library_id,
            file_name = req.file_name,
            size = req.content.len(),
            "Uploading document"
        );

        let url = format!(
            "{}/v1/libraries/{}/documents",
            self.base_url, req.library_id
        );
        let part = reqwest::multipart::Part::bytes(req.content)
            .file_name(req.file_name.to_string());
        let form = reqwest::multipart::Form::new().part("file", part);

        let resp = self
            .http
            .post(&url)
            .bearer_auth(&self.api_key)
            .multipart(form)
            .send()
            .await
            .map_err(|e| IngestError::remote("upload_document", e.to_string()))?;

        let resp = Self::check_status(resp, "upload_document").await?;

        match resp.json::<Document>().await {
            Ok(document) => {
                info!(
                    document_id = %document.id,
                    file_name = req.file_name,
                    "Successfully uploaded document"
                );
                Ok(document)
            }
            Err(e) => {
                error!(error = ?e, file_name = req.file_name, "Failed to decode upload response");
                Err(IngestError::remote("upload_document", e.to_string()))
            }
        }
    }
}
