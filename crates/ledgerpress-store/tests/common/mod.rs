#![allow(dead_code)]

use std::sync::Mutex;

use async_trait::async_trait;
use ledgerpress_core::ledger::{SignedIntent, Signer};
use ledgerpress_core::{ExError, Intent};

pub const SIGNER: &str = "0x00000000000000000000000000000000000000000000000000000000000000a1";

/// Signer that "serializes" an intent as its JSON and signs with a fixed string
pub struct FixedSigner;

#[async_trait]
impl Signer for FixedSigner {
    fn address(&self) -> &str {
        SIGNER
    }

    async fn sign_intent(&self, intent: &Intent) -> Result<SignedIntent, ExError> {
        Ok(SignedIntent {
            tx_bytes: serde_json::to_vec(intent).unwrap(),
            signatures: vec!["sig-1".to_string()],
        })
    }
}

/// Signer that keeps every intent it was asked to sign
#[derive(Default)]
pub struct RecordingSigner {
    pub seen: Mutex<Vec<Intent>>,
}

#[async_trait]
impl Signer for RecordingSigner {
    fn address(&self) -> &str {
        SIGNER
    }

    async fn sign_intent(&self, intent: &Intent) -> Result<SignedIntent, ExError> {
        self.seen.lock().unwrap().push(intent.clone());
        FixedSigner.sign_intent(intent).await
    }
}

pub fn rpc_result(result: serde_json::Value) -> serde_json::Value {
    serde_json::json!({"jsonrpc": "2.0", "id": 1, "result": result})
}
