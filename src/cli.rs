use anyhow::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

use crate::client::MistralClient;
use crate::config::IngestConfig;
use crate::ingest::ingest;

/// CLI for doclib-ingest: publish local documents to a Mistral library.
#[derive(Parser)]
#[clap(
    name = "doclib-ingest",
    version,
    about = "Upload local PDF and XLSX files into a Mistral document library"
)]
pub struct Cli {
    #[clap(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Create a library and upload all matching files from a local directory
    Ingest {
        /// Directory scanned for files to upload
        #[clap(long, default_value = "files")]
        dir: PathBuf,
        /// Name of the library created on the service
        #[clap(long, default_value = "My Knowledge Base")]
        name: String,
        /// Description of the created library
        #[clap(long, default_value = "All my important files")]
        description: String,
    },
}

/// Extracted async CLI logic entrypoint for integration tests and main()
pub async fn run(cli: Cli) -> Result<()> {
    match cli.command {
        Commands::Ingest {
            dir,
            name,
            description,
        } => {
            let config = IngestConfig::from_env(dir, name, description)?;
            let client = MistralClient::from_config(&config);
            println!("Ingest starting...");
            match ingest(&config, &client).await {
                Ok(report) => {
                    println!("Ingest complete.\nReport:");
                    println!("{:#?}", report);
                    Ok(())
                }
                Err(e) => {
                    eprintln!("[ERROR] Ingestion failed: {}", e);
                    Err(e.into())
                }
            }
        }
    }
}
