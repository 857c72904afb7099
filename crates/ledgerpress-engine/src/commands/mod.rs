//! Command and query orchestration

pub mod engine_command;
pub mod engine_query;
pub mod executor;
mod instrument;
pub mod page_index;
pub mod read_tools;
pub mod record_reads;

use ledgerpress_core::{BlobStore, CmsConfig, LedgerClient};

/// Collaborators and configuration one engine call runs against
#[derive(Clone, Copy)]
pub struct EngineContext<'a> {
    pub config: &'a CmsConfig,
    pub ledger: &'a dyn LedgerClient,
    pub blobs: &'a dyn BlobStore,
}
