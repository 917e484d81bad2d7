//! High-level pipeline: create library → scan directory → upload each file.
//!
//! This module provides the top-level orchestration for one ingestion run:
//!   - Creates one document library on the remote service (a fresh library
//!     per invocation; reruns never reuse an earlier one)
//!   - Resolves the configured directory to an absolute path and lists it
//!   - Uploads every entry with an allowed suffix via [`LibraryClient`]
//!   - Aggregates and returns a report of what was uploaded
//!
//! # Error Handling
//! Fail-fast: the first failed step (library creation, directory listing,
//! file read, upload) returns immediately. Documents uploaded before the
//! failure remain on the service; there is no rollback or retry.
//!
//! # Callable From
//! - Used by both the CLI binary and the integration tests
//! - Expects a concrete (async) [`LibraryClient`] implementation, injected
//!   so tests can substitute a mock for the real API client

use tracing::{error, info};

use crate::config::IngestConfig;
use crate::contract::{LibraryClient, NewDocument, NewLibrary};
use crate::error::IngestError;
use crate::scan;

/// Output report with the created library and all uploaded documents.
#[derive(Debug)]
pub struct IngestReport {
    pub library_id: String,
    pub documents: Vec<DocumentReport>,
}

#[derive(Debug)]
pub struct DocumentReport {
    pub file_name: String,
    pub document_id: String,
}

/// Entrypoint: run the ingestion pipeline according to config.
pub async fn ingest<C>(config: &IngestConfig, client: &C) -> Result<IngestReport, IngestError>
where
    C: LibraryClient,
{
    info!("[INGEST] Starting ingestion run");

    // Step 1: Create the library. Happens before the directory is touched,
    // so a missing directory still leaves a library behind.
    let library = match client
        .create_library(NewLibrary {
            name: &config.library_name,
            description: &config.library_description,
        })
        .await
    {
        Ok(library) => {
            info!(library_id = %library.id, "[INGEST] Library created");
            library
        }
        Err(e) => {
            error!(error = ?e, "[INGEST][ERROR] Library creation failed");
            return Err(e);
        }
    };
    println!("Library ID: {}", library.id);

    // Step 2: Resolve and list the local directory.
    let files_dir = std::fs::canonicalize(&config.files_dir)
        .map_err(|e| IngestError::local_io(&config.files_dir, e))?;
    info!(dir = %files_dir.display(), "[INGEST] Scanning directory");
    let candidates = scan::scan_directory(&files_dir)?;
    info!(count = candidates.len(), "[INGEST] Matching files found");

    // Step 3: Upload each matching file, fail-fast on the first error.
    let mut documents = Vec::new();
    for path in candidates {
        let file_name = match path.file_name() {
            Some(name) => name.to_string_lossy().into_owned(),
            // read_dir always yields entries with a final component.
            None => continue,
        };

        info!(file = %file_name, "[INGEST][UPLOAD] Reading file");
        // fs::read opens, reads and closes the handle before the upload
        // call, on success and failure alike.
        let content = match std::fs::read(&path) {
            Ok(bytes) => bytes,
            Err(e) => {
                error!(file = %file_name, error = ?e, "[INGEST][ERROR] Failed to read file");
                return Err(IngestError::local_io(&path, e));
            }
        };

        let uploaded = match client
            .upload_document(NewDocument {
                library_id: &library.id,
                file_name: &file_name,
                content,
            })
            .await
        {
            Ok(doc) => {
                info!(file = %file_name, document_id = %doc.id, "[INGEST][UPLOAD] Upload succeeded");
                doc
            }
            Err(e) => {
                error!(file = %file_name, error = ?e, "[INGEST][ERROR][UPLOAD] Upload failed");
                return Err(e);
            }
        };

        println!("Uploaded: {} as {}", file_name, uploaded.id);
        documents.push(DocumentReport {
            file_name,
            document_id: uploaded.id,
        });
    }

    info!(uploaded = documents.len(), "[INGEST] Ingestion run complete");
    Ok(IngestReport {
        library_id: library.id,
        documents,
    })
}
