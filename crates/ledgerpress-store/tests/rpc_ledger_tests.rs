#![allow(clippy::unwrap_used, clippy::expect_used)]

mod common;

use std::time::Duration;

use common::*;
use ledgerpress_core::ledger::{EventOrder, EventQuery, ExecutionStatus, LedgerClient};
use ledgerpress_core::errors::ExErrorKind;
use ledgerpress_core::{Argument, ErrorCategory, Intent};
use ledgerpress_store::JsonRpcLedger;
use serde_json::json;
use wiremock::matchers::{body_partial_json, method};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn ledger(server: &MockServer) -> JsonRpcLedger {
    JsonRpcLedger::new(server.uri(), Duration::from_secs(5)).unwrap()
}

#[tokio::test]
async fn test_read_object_decodes_fields() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(body_partial_json(json!({"method": "sui_getObject"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(rpc_result(json!({
            "data": {
                "objectId": "0x5",
                "content": {
                    "dataType": "moveObject",
                    "type": "0xp::cms::CMSSite",
                    "fields": {"name": "Blog"}
                }
            }
        }))))
        .expect(1)
        .mount(&server)
        .await;

    let obj = ledger(&server).read_object("0x5").await.unwrap().unwrap();
    assert_eq!(obj.type_tag.as_deref(), Some("0xp::cms::CMSSite"));
}

#[tokio::test]
async fn test_query_events_sends_descending_page() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(body_partial_json(json!({
            "method": "suix_queryEvents",
            "params": [{"MoveEventType": "0xp::cms::PageCreated"}, null, 2, true]
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(rpc_result(json!({
            "data": [
                {"id": {"txDigest": "D2", "eventSeq": "0"}, "type": "0xp::cms::PageCreated",
                 "parsedJson": {"site_id": "0xs", "page_id": "0xb"}},
                {"id": {"txDigest": "D1", "eventSeq": "0"}, "type": "0xp::cms::PageCreated",
                 "parsedJson": {"site_id": "0xs", "page_id": "0xa"}}
            ],
            "hasNextPage": true
        }))))
        .expect(1)
        .mount(&server)
        .await;

    let events = ledger(&server)
        .query_events(&EventQuery {
            event_type: "0xp::cms::PageCreated".to_string(),
            page_size: 2,
            order: EventOrder::Descending,
        })
        .await
        .unwrap();
    assert_eq!(events.len(), 2);
    assert_eq!(events[0].tx_digest, "D2");
}

#[tokio::test]
async fn test_submit_signs_and_reports_failure_status() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(body_partial_json(json!({"method": "sui_executeTransactionBlock"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(rpc_result(json!({
            "digest": "9xQ",
            "effects": {"status": {"status": "failure", "error": "MoveAbort(cms, 3)"}}
        }))))
        .expect(1)
        .mount(&server)
        .await;

    let outcome = ledger(&server)
        .submit(&Intent::new("toggle_page_published"), &FixedSigner)
        .await
        .unwrap();
    assert_eq!(outcome.digest, "9xQ");
    assert!(matches!(outcome.status, ExecutionStatus::Failure { .. }));
}

#[tokio::test]
async fn test_rpc_error_object_is_service_error() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "jsonrpc": "2.0",
            "id": 1,
            "error": {"code": -32602, "message": "Invalid params"}
        })))
        .mount(&server)
        .await;

    let err = ledger(&server).read_object("0x5").await.unwrap_err();
    assert_eq!(err.category(), ErrorCategory::Service);
    assert!(err.message().contains("Invalid params"));
    assert!(!err.is_retryable());
}

fn rpc_failure(code: i64, message: &str) -> ResponseTemplate {
    ResponseTemplate::new(200).set_body_json(json!({
        "jsonrpc": "2.0",
        "id": 1,
        "error": {"code": code, "message": message}
    }))
}

#[tokio::test]
async fn test_refused_submission_is_transaction_failure() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(body_partial_json(json!({"method": "sui_executeTransactionBlock"})))
        .respond_with(rpc_failure(
            -32002,
            "Transaction validator signing failed: ObjectVersionUnavailableForConsumption",
        ))
        .expect(1)
        .mount(&server)
        .await;

    let err = ledger(&server)
        .submit(&Intent::new("add_author"), &FixedSigner)
        .await
        .unwrap_err();

    assert_eq!(err.kind(), ExErrorKind::TransactionFailed);
    assert_eq!(err.category(), ErrorCategory::Transaction);
    assert!(err.message().contains("ObjectVersionUnavailableForConsumption"));
    assert!(!err.is_retryable());
}

#[tokio::test]
async fn test_busy_fullnode_on_submit_stays_retryable() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(rpc_failure(-32050, "server overloaded"))
        .mount(&server)
        .await;

    let err = ledger(&server)
        .submit(&Intent::new("add_author"), &FixedSigner)
        .await
        .unwrap_err();

    assert_eq!(err.category(), ErrorCategory::Service);
    assert!(err.is_retryable());
}

#[tokio::test]
async fn test_submit_binds_clock_before_signing() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(body_partial_json(json!({"method": "sui_executeTransactionBlock"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(rpc_result(json!({
            "digest": "C10",
            "effects": {"status": {"status": "success"}}
        }))))
        .mount(&server)
        .await;
    let mut intent = Intent::new("toggle_page_published");
    intent.call(
        "0xp::cms::toggle_page_published".to_string(),
        vec![Argument::object("0x5"), Argument::object("0xa"), Argument::Clock],
    );
    let signer = RecordingSigner::default();

    ledger(&server).submit(&intent, &signer).await.unwrap();

    let seen = signer.seen.lock().unwrap();
    let ledgerpress_core::IntentStep::Call { arguments, .. } = &seen[0].steps[0] else {
        panic!("expected a call step");
    };
    assert_eq!(arguments[2], Argument::object("0x6"));
    assert!(!arguments.contains(&Argument::Clock));
}

#[tokio::test]
async fn test_owned_objects_follow_cursor() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(body_partial_json(json!({"method": "suix_getOwnedObjects"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(rpc_result(json!({
            "data": [{"data": {"objectId": "0x1", "content": {"dataType": "moveObject", "type": "0xp::cms::CMSSite", "fields": {}}}}],
            "hasNextPage": true,
            "nextCursor": "0x1"
        }))))
        .up_to_n_times(1)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(body_partial_json(json!({"method": "suix_getOwnedObjects"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(rpc_result(json!({
            "data": [{"data": {"objectId": "0x2", "content": {"dataType": "moveObject", "type": "0xp::cms::CMSSite", "fields": {}}}}],
            "hasNextPage": false,
            "nextCursor": null
        }))))
        .mount(&server)
        .await;

    let objects = ledger(&server)
        .list_owned_objects(SIGNER, "0xp::cms::CMSSite")
        .await
        .unwrap();
    let ids: Vec<_> = objects.iter().map(|o| o.object_id.as_str()).collect();
    assert_eq!(ids, vec!["0x1", "0x2"]);
}
