//! # contract: interface for document-library clients
//!
//! This module defines a single trait ([`LibraryClient`]) and the concrete
//! supporting types for creating a remote document library and uploading
//! local file contents into it as documents.
//!
//! ## Interface & Extensibility
//! - Implement the [`LibraryClient`] trait to create new clients (real API,
//!   local fake, mock).
//! - All methods are async and return [`IngestError`] on failure.
//!
//! ## Mocking & Testing
//! - The trait is annotated for `mockall` so consumers can generate
//!   deterministic mocks for unit/integration tests. The orchestration in
//!   [`crate::ingest`] takes the client as an injected dependency for exactly
//!   this reason; there is no module-level client state.

use async_trait::async_trait;

use mockall::automock;

use crate::error::IngestError;

/// Request payload for creating a document library.
pub struct NewLibrary<'a> {
    /// Human-readable name for the library.
    pub name: &'a str,
    /// Free-form description shown alongside the library.
    pub description: &'a str,
}

/// A document library as returned by the service after creation.
#[derive(Debug, Clone, serde::Deserialize)]
pub struct Library {
    /// Opaque identifier assigned by the service.
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
}

/// Request payload for uploading one local file as a document.
pub struct NewDocument<'a> {
    /// The library the document belongs to.
    pub library_id: &'a str,
    /// Base name of the local file, declared as the remote file name.
    pub file_name: &'a str,
    /// Raw file bytes, read fully before the call.
    pub content: Vec<u8>,
}

/// A document as returned by the service after upload.
#[derive(Debug, Clone, serde::Deserialize)]
pub struct Document {
    /// Opaque identifier assigned by the service.
    pub id: String,
    #[serde(default)]
    pub name: Option<String>,
}

/// Trait for creating libraries and uploading documents asynchronously.
/// The implementor is responsible for transport, authentication and
/// serialization against the backing service.
#[cfg_attr(any(test, feature = "test-export-mocks"), automock)]
#[async_trait]
pub trait LibraryClient: Send + Sync {
    /// Create a new document library and return it with its assigned id.
    async fn create_library<'a>(&self, req: NewLibrary<'a>) -> Result<Library, IngestError>;

    /// Upload one file's bytes as a new document in an existing library.
    async fn upload_document<'a>(&self, req: NewDocument<'a>) -> Result<Document, IngestError>;
}
