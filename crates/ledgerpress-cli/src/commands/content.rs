//! Content command
//!
//! Usage:
//!   ledgerpress content put <FILE> [--local <DIR>]
//!   ledgerpress content get <CONTENT_ID> [--output <FILE>] [--local <DIR>]
//!
//! With `--local` the content-addressed store under DIR is used instead of
//! the publisher and aggregator.

use std::path::PathBuf;
use std::sync::Arc;

use clap::{Args, Subcommand};
use ledgerpress_core::BlobStore;
use ledgerpress_store::{FsBlobStore, HttpBlobStore};

use crate::context::{CliResult, ConnectionArgs};

#[derive(Debug, Args)]
pub struct ContentArgs {
    /// Local content store directory
    #[arg(long, global = true)]
    pub local: Option<PathBuf>,

    #[command(subcommand)]
    pub command: ContentCommand,
}

#[derive(Debug, Subcommand)]
pub enum ContentCommand {
    /// Store a file and print its content id
    Put { file: PathBuf },
    /// Fetch content by id
    Get {
        content_id: String,
        /// Output file path (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

fn store(args: &ContentArgs, conn: &ConnectionArgs) -> CliResult<Arc<dyn BlobStore>> {
    let store: Arc<dyn BlobStore> = match &args.local {
        Some(dir) => Arc::new(FsBlobStore::new(dir)),
        None => Arc::new(HttpBlobStore::new(conn.blob_config())?),
    };
    Ok(store)
}

pub async fn execute(args: ContentArgs, conn: &ConnectionArgs) -> CliResult {
    let blobs = store(&args, conn)?;
    match args.command {
        ContentCommand::Put { file } => {
            let bytes = std::fs::read(&file)?;
            let content_id = blobs.put(bytes).await?;
            println!("{}", content_id);
        }
        ContentCommand::Get { content_id, output } => {
            let bytes = blobs
                .get(&content_id)
                .await?
                .ok_or_else(|| format!("content {} not found", content_id))?;
            match output {
                Some(path) => {
                    std::fs::write(&path, bytes)?;
                    println!("✓ Wrote {}", path.display());
                }
                None => {
                    use std::io::Write;
                    std::io::stdout().write_all(&bytes)?;
                }
            }
        }
    }
    Ok(())
}
