//! Canonical schema constants for structured logging
//!
//! Every log line emitted through the `log_op_*` macros uses these keys so
//! that ledger reads, intent submissions and event scans can be correlated.

// Canonical field keys
pub const FIELD_COMPONENT: &str = "component";
pub const FIELD_OP: &str = "op";
pub const FIELD_EVENT: &str = "event";
pub const FIELD_DURATION_MS: &str = "duration_ms";
pub const FIELD_REQUEST_ID: &str = "request_id";
pub const FIELD_TRACE_ID: &str = "trace_id";

// Ledger object identifiers
pub const FIELD_SITE_ID: &str = "site_id";
pub const FIELD_PAGE_ID: &str = "page_id";
pub const FIELD_TEMPLATE_ID: &str = "template_id";
pub const FIELD_OBJECT_ID: &str = "object_id";
pub const FIELD_TX_DIGEST: &str = "tx_digest";
pub const FIELD_CONTENT_ID: &str = "content_id";

// Scan sizes
pub const FIELD_EVENTS_SCANNED: &str = "events_scanned";
pub const FIELD_RESULT_LEN: &str = "result_len";

// Error fields
pub const FIELD_ERR_KIND: &str = "err.kind";
pub const FIELD_ERR_CODE: &str = "err.code";

// Canonical event names
pub const EVENT_START: &str = "start";
pub const EVENT_END: &str = "end";
pub const EVENT_END_ERROR: &str = "end_error";
