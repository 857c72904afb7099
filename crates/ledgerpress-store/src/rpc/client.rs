use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

use async_trait::async_trait;
use base64::prelude::{Engine as _, BASE64_STANDARD};
use ledgerpress_core::ledger::{
    EventOrder, EventQuery, EventRecord, ExecutionOutcome, LedgerClient, LedgerObject, Signer,
    CLOCK_OBJECT_ID,
};
use ledgerpress_core::{CmsConfig, Intent};
use reqwest::Client;
use serde_json::{json, Value};

use super::decode::{decode_events, decode_execution, decode_object, decode_owned_page};
use crate::errors::{
    decode_error, from_reqwest, http_status, rpc_error, submission_error, Result,
};

const OWNED_OBJECTS_PAGE: u32 = 50;

/// Ledger client speaking the fullnode JSON-RPC API
pub struct JsonRpcLedger {
    client: Client,
    url: String,
    next_id: AtomicU64,
}

impl JsonRpcLedger {
    /// # Errors
    /// `ExternalService` when the HTTP client cannot be built.
    pub fn new(url: impl Into<String>, timeout: Duration) -> Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| from_reqwest("rpc_client", e))?;
        Ok(Self {
            client,
            url: url.into(),
            next_id: AtomicU64::new(1),
        })
    }

    /// Client for the endpoint named in `config`
    ///
    /// # Errors
    /// Same as `new`.
    pub fn from_config(config: &CmsConfig, timeout: Duration) -> Result<Self> {
        Self::new(config.rpc_url(), timeout)
    }

    async fn call(&self, method: &str, params: Value) -> Result<Value> {
        let id = self.next_id.fetch_add(1, Ordering::Relaxed);
        let body = json!({
            "jsonrpc": "2.0",
            "id": id,
            "method": method,
            "params": params,
        });
        tracing::debug!(rpc.method = method, rpc.id = id, "rpc call");

        let response = self
            .client
            .post(&self.url)
            .json(&body)
            .send()
            .await
            .map_err(|e| from_reqwest(method, e))?;
        let status = response.status();
        if !status.is_success() {
            let text = response.text().await.unwrap_or_default();
            return Err(http_status(method, status.as_u16(), &text));
        }

        let mut envelope: Value = response
            .json()
            .await
            .map_err(|e| decode_error(method, e.to_string()))?;
        if let Some(err) = envelope.get("error").filter(|e| !e.is_null()) {
            let code = err.get("code").and_then(Value::as_i64).unwrap_or(0);
            let message = err
                .get("message")
                .and_then(Value::as_str)
                .unwrap_or("unknown error");
            return Err(rpc_error(method, code, message));
        }
        match envelope.get_mut("result") {
            Some(result) => Ok(result.take()),
            None => Err(decode_error(method, "response has neither result nor error")),
        }
    }
}

#[async_trait]
impl LedgerClient for JsonRpcLedger {
    async fn read_object(&self, object_id: &str) -> Result<Option<LedgerObject>> {
        let result = self
            .call(
                "sui_getObject",
                json!([object_id, {"showType": true, "showContent": true}]),
            )
            .await?;
        decode_object(&result)
    }

    async fn query_events(&self, query: &EventQuery) -> Result<Vec<EventRecord>> {
        let descending = query.order == EventOrder::Descending;
        let result = self
            .call(
                "suix_queryEvents",
                json!([
                    {"MoveEventType": query.event_type},
                    Value::Null,
                    query.page_size,
                    descending
                ]),
            )
            .await?;
        decode_events(&result)
    }

    /// Binds the shared clock, signs and executes
    ///
    /// A JSON-RPC refusal of the transaction is `TransactionFailed`; only
    /// transport and transient fullnode errors stay retryable.
    async fn submit(&self, intent: &Intent, signer: &dyn Signer) -> Result<ExecutionOutcome> {
        let intent = intent.with_clock(CLOCK_OBJECT_ID);
        let signed = signer.sign_intent(&intent).await?;
        let result = self
            .call(
                "sui_executeTransactionBlock",
                json!([
                    BASE64_STANDARD.encode(&signed.tx_bytes),
                    signed.signatures,
                    {"showEffects": true, "showObjectChanges": true},
                    "WaitForLocalExecution"
                ]),
            )
            .await
            .map_err(submission_error)?;
        decode_execution(&result)
    }

    async fn list_owned_objects(&self, owner: &str, type_tag: &str) -> Result<Vec<LedgerObject>> {
        let mut objects = Vec::new();
        let mut cursor = Value::Null;
        loop {
            let result = self
                .call(
                    "suix_getOwnedObjects",
                    json!([
                        owner,
                        {
                            "filter": {"StructType": type_tag},
                            "options": {"showType": true, "showContent": true}
                        },
                        cursor,
                        OWNED_OBJECTS_PAGE
                    ]),
                )
                .await?;
            let (page, next) = decode_owned_page(&result)?;
            objects.extend(page);
            match next {
                Some(next) => cursor = next,
                None => break,
            }
        }
        Ok(objects)
    }
}
