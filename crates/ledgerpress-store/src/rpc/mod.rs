//! JSON-RPC fullnode adapter
//!
//! `client` owns the transport; `decode` turns fullnode JSON into the
//! core's ledger types and holds no I/O, so it is tested directly.

mod client;
pub mod decode;

pub use client::JsonRpcLedger;
