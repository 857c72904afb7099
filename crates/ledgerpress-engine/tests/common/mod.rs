#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use ledgerpress_core::errors::{ExError, ExErrorKind};
use ledgerpress_core::ledger::{
    EventOrder, EventQuery, EventRecord, ExecutionOutcome, ExecutionStatus, LedgerClient,
    LedgerObject, SignedIntent, Signer,
};
use ledgerpress_core::{BlobStore, CmsConfig, Intent};
use serde_json::json;

pub const PACKAGE: &str = "0x000000000000000000000000000000000000000000000000000000000000beef";
pub const REGISTRY: &str = "0x0000000000000000000000000000000000000000000000000000000000000001";
pub const ADMIN_CAP: &str = "0x00000000000000000000000000000000000000000000000000000000000000ad";
pub const SIGNER: &str = "0x00000000000000000000000000000000000000000000000000000000000000a1";
pub const AUTHOR: &str = "0x00000000000000000000000000000000000000000000000000000000000000a2";
pub const STRANGER: &str = "0x00000000000000000000000000000000000000000000000000000000000000a3";
pub const SITE: &str = "0x00000000000000000000000000000000000000000000000000000000000005e1";
pub const OTHER_SITE: &str = "0x00000000000000000000000000000000000000000000000000000000000005e2";
pub const OWNER_CAP: &str = "0x0000000000000000000000000000000000000000000000000000000000000ca9";

pub fn page_id(n: u8) -> String {
    format!("0x{:0>64}", format!("f{:02x}", n))
}

pub fn config() -> CmsConfig {
    CmsConfig::new("http://127.0.0.1:9000", PACKAGE, REGISTRY, None).unwrap()
}

pub fn admin_config() -> CmsConfig {
    CmsConfig::new(
        "http://127.0.0.1:9000",
        PACKAGE,
        REGISTRY,
        Some(ADMIN_CAP.to_string()),
    )
    .unwrap()
}

pub fn type_tag(name: &str) -> String {
    format!("{}::cms::{}", PACKAGE, name)
}

pub fn site_object(id: &str, owner: &str, authors: &[&str]) -> LedgerObject {
    LedgerObject {
        object_id: id.to_string(),
        type_tag: Some(type_tag("CMSSite")),
        fields: json!({
            "id": {"id": id},
            "name": "My Blog",
            "description": "notes",
            "owner": owner,
            "template_id": "default",
            "authors": authors,
            "created_at": "1700000000000",
            "updated_at": "1700000000500",
            "is_active": true,
            "walrus_site_id": "",
            "pages": {"fields": {"size": "2"}}
        }),
    }
}

pub fn page_object(id: &str, site_id: &str, slug: &str) -> LedgerObject {
    LedgerObject {
        object_id: id.to_string(),
        type_tag: Some(type_tag("Page")),
        fields: json!({
            "id": {"id": id},
            "site_id": site_id,
            "title": format!("Title {}", slug),
            "slug": slug,
            "content_blob_id": "blob-1",
            "author": SIGNER,
            "created_at": 1700000001000_i64,
            "updated_at": 1700000001000_i64,
            "is_published": false
        }),
    }
}

pub fn page_created(page_id: &str, site_id: &str, timestamp: i64) -> EventRecord {
    EventRecord {
        event_type: type_tag("PageCreated"),
        tx_digest: format!("tx-{}", &page_id[page_id.len() - 4..]),
        event_seq: 0,
        timestamp_ms: Some(timestamp),
        payload: json!({
            "page_id": page_id,
            "site_id": site_id,
            "title": "t",
            "author": SIGNER,
            "timestamp": timestamp.to_string()
        }),
    }
}

pub fn site_created(site_id: &str, timestamp: i64) -> EventRecord {
    EventRecord {
        event_type: type_tag("SiteCreated"),
        tx_digest: "tx-site".to_string(),
        event_seq: 0,
        timestamp_ms: Some(timestamp),
        payload: json!({
            "site_id": site_id,
            "name": "My Blog",
            "owner": SIGNER,
            "timestamp": timestamp.to_string()
        }),
    }
}

pub fn author_added(site_id: &str, author: &str, timestamp: i64) -> EventRecord {
    EventRecord {
        event_type: type_tag("AuthorAdded"),
        tx_digest: "tx-author".to_string(),
        event_seq: 0,
        timestamp_ms: Some(timestamp),
        payload: json!({
            "site_id": site_id,
            "author": author,
            "added_by": SIGNER,
            "timestamp": timestamp.to_string()
        }),
    }
}

pub fn success(digest: &str) -> ExecutionOutcome {
    ExecutionOutcome {
        digest: digest.to_string(),
        status: ExecutionStatus::Success,
        changes: vec![],
    }
}

/// In-memory ledger that records every call made to it
#[derive(Default)]
pub struct RecordingLedger {
    objects: Mutex<HashMap<String, LedgerObject>>,
    events: Mutex<HashMap<String, Vec<EventRecord>>>,
    owned: Mutex<HashMap<String, Vec<LedgerObject>>>,
    outcome: Mutex<Option<ExecutionOutcome>>,
    unreachable: Mutex<bool>,
    calls: Mutex<Vec<String>>,
    submitted: Mutex<Vec<Intent>>,
    queries: Mutex<Vec<EventQuery>>,
    reads_in_flight: AtomicUsize,
    max_reads_in_flight: AtomicUsize,
}

impl RecordingLedger {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn put_object(&self, object: LedgerObject) {
        self.objects
            .lock()
            .unwrap()
            .insert(object.object_id.clone(), object);
    }

    /// Events are stored oldest first, as the ledger emits them
    pub fn push_event(&self, record: EventRecord) {
        self.events
            .lock()
            .unwrap()
            .entry(record.event_type.clone())
            .or_default()
            .push(record);
    }

    pub fn give(&self, owner: &str, object: LedgerObject) {
        self.owned
            .lock()
            .unwrap()
            .entry(owner.to_string())
            .or_default()
            .push(object);
    }

    pub fn set_outcome(&self, outcome: ExecutionOutcome) {
        *self.outcome.lock().unwrap() = Some(outcome);
    }

    pub fn set_unreachable(&self) {
        *self.unreachable.lock().unwrap() = true;
    }

    pub fn calls(&self) -> Vec<String> {
        self.calls.lock().unwrap().clone()
    }

    pub fn submitted(&self) -> Vec<Intent> {
        self.submitted.lock().unwrap().clone()
    }

    pub fn queries(&self) -> Vec<EventQuery> {
        self.queries.lock().unwrap().clone()
    }

    /// Highest number of `read_object` calls that were pending at once
    pub fn max_reads_in_flight(&self) -> usize {
        self.max_reads_in_flight.load(Ordering::SeqCst)
    }

    fn record(&self, call: &str) -> Result<(), ExError> {
        self.calls.lock().unwrap().push(call.to_string());
        if *self.unreachable.lock().unwrap() {
            return Err(ExError::new(ExErrorKind::ExternalService).with_message("connection refused"));
        }
        Ok(())
    }
}

#[async_trait]
impl LedgerClient for RecordingLedger {
    async fn read_object(&self, object_id: &str) -> Result<Option<LedgerObject>, ExError> {
        self.record("read_object")?;
        let now = self.reads_in_flight.fetch_add(1, Ordering::SeqCst) + 1;
        self.max_reads_in_flight.fetch_max(now, Ordering::SeqCst);
        // stay pending for a few polls so concurrent reads overlap
        for _ in 0..3 {
            tokio::task::yield_now().await;
        }
        let object = self.objects.lock().unwrap().get(object_id).cloned();
        self.reads_in_flight.fetch_sub(1, Ordering::SeqCst);
        Ok(object)
    }

    async fn query_events(&self, query: &EventQuery) -> Result<Vec<EventRecord>, ExError> {
        self.record("query_events")?;
        self.queries.lock().unwrap().push(query.clone());
        let mut records = self
            .events
            .lock()
            .unwrap()
            .get(&query.event_type)
            .cloned()
            .unwrap_or_default();
        if query.order == EventOrder::Descending {
            records.reverse();
        }
        records.truncate(query.page_size);
        Ok(records)
    }

    async fn submit(
        &self,
        intent: &Intent,
        signer: &dyn Signer,
    ) -> Result<ExecutionOutcome, ExError> {
        self.record("submit")?;
        signer.sign_intent(intent).await?;
        self.submitted.lock().unwrap().push(intent.clone());
        Ok(self
            .outcome
            .lock()
            .unwrap()
            .clone()
            .unwrap_or_else(|| success("digest-ok")))
    }

    async fn list_owned_objects(
        &self,
        owner: &str,
        type_tag: &str,
    ) -> Result<Vec<LedgerObject>, ExError> {
        self.record("list_owned_objects")?;
        Ok(self
            .owned
            .lock()
            .unwrap()
            .get(owner)
            .cloned()
            .unwrap_or_default()
            .into_iter()
            .filter(|o| o.type_tag.as_deref() == Some(type_tag))
            .collect())
    }
}

#[derive(Default)]
pub struct MemoryBlobStore {
    blobs: Mutex<HashMap<String, Vec<u8>>>,
}

impl MemoryBlobStore {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }
}

#[async_trait]
impl BlobStore for MemoryBlobStore {
    async fn put(&self, bytes: Vec<u8>) -> Result<String, ExError> {
        let mut blobs = self.blobs.lock().unwrap();
        let id = format!("blob-{}", blobs.len() + 1);
        blobs.insert(id.clone(), bytes);
        Ok(id)
    }

    async fn get(&self, content_id: &str) -> Result<Option<Vec<u8>>, ExError> {
        Ok(self.blobs.lock().unwrap().get(content_id).cloned())
    }
}

pub struct FixedSigner;

#[async_trait]
impl Signer for FixedSigner {
    fn address(&self) -> &str {
        SIGNER
    }

    async fn sign_intent(&self, intent: &Intent) -> Result<SignedIntent, ExError> {
        Ok(SignedIntent {
            tx_bytes: serde_json::to_vec(intent).unwrap(),
            signatures: vec!["sig".to_string()],
        })
    }
}
