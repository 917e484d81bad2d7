#![doc = "doclib-ingest: upload local PDF/XLSX files into a Mistral document library."]

//! This crate contains the full ingestion pipeline: configuration from the
//! environment, the document-library client abstraction, the real Mistral
//! implementation, local directory scanning, and the orchestrating `ingest`
//! entrypoint used by the CLI binary.

pub mod cli;
pub mod client;
pub mod config;
pub mod contract;
pub mod error;
pub mod ingest;
pub mod scan;
