//! Filesystem content-addressed blob store
//!
//! Provides:
//! - SHA-256 hex content ids
//! - Atomic writes with collision detection
//! - Sharding by the first 2 hex chars of the id

mod atomic;
mod fs_store;
mod sharding;

pub use fs_store::FsBlobStore;
