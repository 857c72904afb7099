//! ledgerpress engine - orchestration layer
//!
//! Coordinates the pure core (validation, intents, reconstruction) with the
//! ledger and blob store collaborators. `Cms` is the typed facade;
//! `apply_engine_command` and `apply_engine_query` are the dispatch surface
//! underneath it.

pub mod client;
pub mod commands;

pub use client::Cms;
pub use commands::engine_command::{apply_engine_command, EngineCommand, EngineCommandResult};
pub use commands::engine_query::{apply_engine_query, EngineQuery, EngineQueryResult};
pub use commands::read_tools::{Completeness, ScanResult, ScanWindow};
pub use commands::EngineContext;
