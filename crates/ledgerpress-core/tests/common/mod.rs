#![allow(dead_code)]

use ledgerpress_core::{CmsConfig, LedgerObject};
use serde_json::{json, Value};

pub const PACKAGE: &str = "0x000000000000000000000000000000000000000000000000000000000000beef";
pub const REGISTRY: &str = "0x0000000000000000000000000000000000000000000000000000000000000001";
pub const ADMIN_CAP: &str = "0x00000000000000000000000000000000000000000000000000000000000000ad";
pub const SIGNER: &str = "0x00000000000000000000000000000000000000000000000000000000000000a1";
pub const AUTHOR: &str = "0x00000000000000000000000000000000000000000000000000000000000000a2";
pub const SITE: &str = "0x00000000000000000000000000000000000000000000000000000000000005e1";
pub const PAGE: &str = "0x0000000000000000000000000000000000000000000000000000000000000f01";
pub const OWNER_CAP: &str = "0x0000000000000000000000000000000000000000000000000000000000000ca9";

/// Config without an administrator capability
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

pub fn object(id: &str, struct_name: &str, fields: Value) -> LedgerObject {
    LedgerObject {
        object_id: id.to_string(),
        type_tag: Some(type_tag(struct_name)),
        fields,
    }
}

/// Site field bag as the ledger reports it, timestamps as strings
pub fn site_fields() -> Value {
    json!({
        "id": {"id": SITE},
        "name": "My Blog",
        "description": "notes",
        "owner": SIGNER,
        "template_id": "default",
        "authors": [AUTHOR],
        "created_at": "1700000000000",
        "updated_at": "1700000000500",
        "is_active": true,
        "walrus_site_id": "",
        "pages": {"type": "0x2::table::Table", "fields": {"id": {"id": "0x77"}, "size": "2"}}
    })
}

pub fn page_fields(site_id: &str, slug: &str) -> Value {
    json!({
        "id": {"id": PAGE},
        "site_id": site_id,
        "title": "Hello",
        "slug": slug,
        "content_blob_id": "blob-1",
        "author": SIGNER,
        "created_at": 1700000001000_i64,
        "updated_at": 1700000001000_i64,
        "is_published": false
    })
}
