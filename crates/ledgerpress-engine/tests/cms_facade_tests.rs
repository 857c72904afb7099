#![allow(clippy::unwrap_used, clippy::expect_used)]

mod common;

use std::sync::Arc;

use common::*;
use ledgerpress_core::errors::ExErrorKind;
use ledgerpress_core::logging_facility::init_test_capture;
use ledgerpress_core::{Argument, Command, ErrorCategory, IntentStep};
use ledgerpress_core_types::schema::{EVENT_END, EVENT_END_ERROR, EVENT_START};
use ledgerpress_core_types::{RequestContext, RequestId, TraceId};
use ledgerpress_engine::Cms;

fn cms(ledger: &Arc<RecordingLedger>) -> Cms {
    Cms::new(config(), ledger.clone(), MemoryBlobStore::new())
}

#[tokio::test]
async fn test_content_round_trip() {
    let ledger = RecordingLedger::new();
    let cms = cms(&ledger);

    let id = cms.upload_content(b"# Hello".to_vec()).await.unwrap();

    assert_eq!(cms.fetch_content(&id).await.unwrap(), Some(b"# Hello".to_vec()));
    assert_eq!(cms.fetch_content("blob-404").await.unwrap(), None);
    assert!(ledger.calls().is_empty());
}

#[tokio::test]
async fn test_intent_preview_does_not_touch_ledger() {
    let ledger = RecordingLedger::new();
    let cms = cms(&ledger);

    let intent = cms
        .intent(&Command::CreateTemplate {
            signer: SIGNER.to_string(),
            name: "Plain".to_string(),
            description: "".to_string(),
            layout_id: "layout".to_string(),
            style_id: "style".to_string(),
            script_id: None,
            is_public: None,
        })
        .unwrap();

    let IntentStep::Call { arguments, .. } = &intent.steps[0] else {
        panic!("expected a call step");
    };
    assert_eq!(arguments[5], Argument::string(""));
    assert_eq!(arguments[6], Argument::Bool { value: true });
    assert!(ledger.calls().is_empty());
}

#[tokio::test]
async fn test_create_page_uses_signer_address() {
    let ledger = RecordingLedger::new();
    let cms = cms(&ledger);

    let outcome = cms
        .create_page(&FixedSigner, SITE, "Hello", "hello", "blob-1")
        .await
        .unwrap();

    assert_eq!(outcome.digest, "digest-ok");
    let submitted = ledger.submitted();
    let (objects, recipient) = submitted[0].final_transfer().unwrap();
    assert_eq!(objects.len(), 1);
    assert_eq!(recipient, SIGNER);
}

#[tokio::test]
async fn test_admin_update_without_cap_is_authorization_error() {
    let ledger = RecordingLedger::new();
    let cms = cms(&ledger);

    let err = cms
        .admin_emergency_update(&FixedSigner, SITE, "n", "d", "abuse report")
        .await
        .unwrap_err();

    assert_eq!(err.kind(), ExErrorKind::Unauthorised);
    assert_eq!(err.category(), ErrorCategory::Authorization);
    assert!(ledger.calls().is_empty());
}

#[tokio::test]
async fn test_typed_reads_through_facade() {
    let ledger = RecordingLedger::new();
    ledger.put_object(site_object(SITE, SIGNER, &[AUTHOR]));
    let id = page_id(1);
    ledger.put_object(page_object(&id, SITE, "about"));
    ledger.push_event(page_created(&id, SITE, 10));
    let cms = cms(&ledger);

    let site = cms.get_site(SITE).await.unwrap().unwrap();
    assert!(site.has_author(AUTHOR));
    assert!(cms.is_authorized(SITE, AUTHOR).await.unwrap());

    let pages = cms.list_site_pages(SITE).await.unwrap();
    assert_eq!(pages.items.len(), 1);
    assert_eq!(pages.items[0].slug, "about");
    assert!(pages.is_complete());

    assert_eq!(cms.get_page(&id).await.unwrap().unwrap().slug, "about");
    assert_eq!(cms.get_template(&id).await.unwrap(), None);
}

#[tokio::test]
async fn test_operations_log_bracketed_with_request_id() {
    let capture = init_test_capture();
    let ledger = RecordingLedger::new();
    let cms = cms(&ledger);

    cms.upload_content(b"x".to_vec()).await.unwrap();
    cms.toggle_page_published(&FixedSigner, SITE, "bad-id")
        .await
        .unwrap_err();

    let publish = capture.events_for_op("content_publish");
    assert!(publish
        .iter()
        .any(|e| e.event.as_deref() == Some(EVENT_START) && e.fields.contains_key("request_id")));
    assert!(publish
        .iter()
        .any(|e| e.event.as_deref() == Some(EVENT_END) && e.fields.contains_key("duration_ms")));

    let failed: Vec<_> = capture
        .events_for_op("toggle_page_published")
        .into_iter()
        .filter(|e| e.event.as_deref() == Some(EVENT_END_ERROR))
        .collect();
    assert!(!failed.is_empty());
    assert_eq!(
        failed[0].fields.get("err.code"),
        Some(&"ERR_INVALID_ADDRESS".to_string())
    );
}

#[tokio::test]
async fn test_trace_id_reaches_every_call() {
    let capture = init_test_capture();
    let ledger = RecordingLedger::new();
    ledger.put_object(site_object(SITE, SIGNER, &[]));
    let cms = cms(&ledger).with_trace_id(TraceId::from_string("trace-facade-7".to_string()));

    cms.upload_content(b"traced".to_vec()).await.unwrap();
    cms.get_site(SITE).await.unwrap();
    cms.toggle_page_published(&FixedSigner, SITE, "bad-id")
        .await
        .unwrap_err();

    let traced: Vec<_> = capture
        .events()
        .into_iter()
        .filter(|e| e.fields.get("trace_id").map(String::as_str) == Some("trace-facade-7"))
        .collect();
    for op in ["content_publish", "site_get", "toggle_page_published"] {
        assert!(
            traced.iter().any(|e| e.is(op, EVENT_START)),
            "no traced start for {op}"
        );
    }
    assert!(traced
        .iter()
        .any(|e| e.is("toggle_page_published", EVENT_END_ERROR)));

    // each call still gets its own request id
    let mut request_ids: Vec<_> = traced
        .iter()
        .filter(|e| e.event.as_deref() == Some(EVENT_START))
        .filter_map(|e| e.request_id.clone())
        .collect();
    request_ids.sort();
    request_ids.dedup();
    assert!(request_ids.len() >= 3);
}

#[tokio::test]
async fn test_execute_in_uses_caller_context() {
    let capture = init_test_capture();
    let ledger = RecordingLedger::new();
    let cms = cms(&ledger);
    let rc = RequestContext {
        request_id: RequestId::from_string("req-facade-caller".to_string()),
        trace_id: Some(TraceId::from_string("trace-facade-caller".to_string())),
    };

    let err = cms
        .execute_in(
            Command::TogglePagePublished {
                site_id: SITE.to_string(),
                page_id: "bad-id".to_string(),
            },
            &FixedSigner,
            &rc,
        )
        .await
        .unwrap_err();

    assert_eq!(err.request_id().map(RequestId::as_str), Some("req-facade-caller"));
    let events = capture.events_for_request("req-facade-caller");
    assert!(!events.is_empty());
    assert!(events
        .iter()
        .all(|e| e.fields.get("trace_id").map(String::as_str) == Some("trace-facade-caller")));
    assert!(ledger.calls().is_empty());
}
