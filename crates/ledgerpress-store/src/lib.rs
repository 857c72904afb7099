//! ledgerpress store - collaborator adapters
//!
//! Implementations of the core's `BlobStore` and `LedgerClient` traits:
//! - `cas::FsBlobStore`: local content-addressed blob store
//! - `http_blob::HttpBlobStore`: publisher/aggregator HTTP blob service
//! - `rpc::JsonRpcLedger`: JSON-RPC fullnode client

pub mod cas;
pub mod errors;
pub mod http_blob;
pub mod rpc;

pub use cas::FsBlobStore;
pub use http_blob::{BlobStoreConfig, HttpBlobStore};
pub use rpc::JsonRpcLedger;
