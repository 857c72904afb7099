//! Ledger collaborator seam
//!
//! The core never talks to a network itself. Everything it needs from the
//! ledger goes through `LedgerClient`; signing goes through `Signer`.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::errors::ExError;
use crate::intent::Intent;

/// Shared clock object every timestamped entry point takes
pub const CLOCK_OBJECT_ID: &str = "0x6";

/// Raw ledger object as the collaborator returns it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LedgerObject {
    pub object_id: String,
    /// Fully qualified type, `None` for packages and other non-struct data
    pub type_tag: Option<String>,
    /// Field bag of the struct; anything but a JSON object is not decodable
    pub fields: serde_json::Value,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EventOrder {
    Ascending,
    Descending,
}

/// One page of an event stream
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventQuery {
    /// Fully qualified event type, e.g. `0xabc::cms::PageCreated`
    pub event_type: String,
    pub page_size: usize,
    pub order: EventOrder,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EventRecord {
    pub event_type: String,
    pub tx_digest: String,
    pub event_seq: u64,
    pub timestamp_ms: Option<i64>,
    /// Decoded event fields
    pub payload: serde_json::Value,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum ExecutionStatus {
    Success,
    Failure { error: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ObjectChangeKind {
    Created,
    Mutated,
    Transferred,
    Deleted,
    Wrapped,
    Published,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ObjectChange {
    pub kind: ObjectChangeKind,
    pub object_id: String,
    pub object_type: Option<String>,
}

/// What the ledger reports after running a submitted intent
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExecutionOutcome {
    pub digest: String,
    pub status: ExecutionStatus,
    pub changes: Vec<ObjectChange>,
}

impl ExecutionOutcome {
    pub fn is_success(&self) -> bool {
        matches!(self.status, ExecutionStatus::Success)
    }

    /// Ids of created objects whose type ends with `::<suffix>`
    pub fn created_of_type(&self, suffix: &str) -> Vec<&str> {
        let suffix = format!("::{}", suffix);
        self.changes
            .iter()
            .filter(|c| c.kind == ObjectChangeKind::Created)
            .filter(|c| c.object_type.as_deref().is_some_and(|t| t.ends_with(&suffix)))
            .map(|c| c.object_id.as_str())
            .collect()
    }
}

/// Serialized transaction plus the signatures authorizing it
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignedIntent {
    pub tx_bytes: Vec<u8>,
    /// Base64 serialized signatures
    pub signatures: Vec<String>,
}

/// Signing capability supplied by the caller
///
/// The core never holds key material. The signer serializes the intent for
/// the ledger and signs it.
#[async_trait]
pub trait Signer: Send + Sync {
    /// Address the signatures are made with
    fn address(&self) -> &str;

    async fn sign_intent(&self, intent: &Intent) -> Result<SignedIntent, ExError>;
}

#[async_trait]
pub trait LedgerClient: Send + Sync {
    /// Fetch one object with its type and fields; `None` when it does not exist
    async fn read_object(&self, object_id: &str) -> Result<Option<LedgerObject>, ExError>;

    async fn query_events(&self, query: &EventQuery) -> Result<Vec<EventRecord>, ExError>;

    /// Submit an intent signed by `signer` and wait for its outcome
    ///
    /// A rejected transaction is an `Ok` outcome with a failure status;
    /// `Err` is reserved for failures to reach or understand the ledger.
    async fn submit(
        &self,
        intent: &Intent,
        signer: &dyn Signer,
    ) -> Result<ExecutionOutcome, ExError>;

    /// Objects owned by `owner` whose type is exactly `type_tag`
    async fn list_owned_objects(
        &self,
        owner: &str,
        type_tag: &str,
    ) -> Result<Vec<LedgerObject>, ExError>;
}
