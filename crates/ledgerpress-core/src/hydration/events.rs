//! Decoding of cms event records into typed payloads

use serde_json::Value;

use super::field_bag::parse_i64;
use crate::errors::{CmsError, Result};
use crate::ledger::EventRecord;
use crate::model::{AuthorAdded, CmsEvent, PageCreated, SiteCreated};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventKind {
    SiteCreated,
    PageCreated,
    AuthorAdded,
}

impl EventKind {
    pub fn struct_name(&self) -> &'static str {
        match self {
            EventKind::SiteCreated => "SiteCreated",
            EventKind::PageCreated => "PageCreated",
            EventKind::AuthorAdded => "AuthorAdded",
        }
    }

    fn from_struct_name(name: &str) -> Option<Self> {
        match name {
            "SiteCreated" => Some(EventKind::SiteCreated),
            "PageCreated" => Some(EventKind::PageCreated),
            "AuthorAdded" => Some(EventKind::AuthorAdded),
            _ => None,
        }
    }
}

/// Last `::` segment of a fully qualified event type
pub fn event_type_name(event_type: &str) -> &str {
    event_type.rsplit("::").next().unwrap_or(event_type)
}

struct Payload<'a> {
    event_type: &'a str,
    value: &'a Value,
}

impl Payload<'_> {
    fn malformed(&self, reason: String) -> CmsError {
        CmsError::MalformedEvent {
            event_type: self.event_type.to_string(),
            reason,
        }
    }

    fn str(&self, name: &str) -> Result<String> {
        self.value
            .get(name)
            .and_then(Value::as_str)
            .map(str::to_string)
            .ok_or_else(|| self.malformed(format!("missing string field '{}'", name)))
    }

    /// Payload timestamp, falling back to the record's own when absent
    fn timestamp(&self, fallback: Option<i64>) -> Result<i64> {
        match self.value.get("timestamp") {
            Some(v) if !v.is_null() => parse_i64(v)
                .ok_or_else(|| self.malformed("field 'timestamp' is not an integer".to_string())),
            _ => fallback.ok_or_else(|| self.malformed("missing timestamp".to_string())),
        }
    }
}

/// Decode `record` if it is one of the known cms events
///
/// Returns `Ok(None)` for event types ledgerpress does not model.
///
/// # Errors
/// `MalformedEvent` when a known event lacks a field its kind carries.
pub fn decode_event(record: &EventRecord) -> Result<Option<CmsEvent>> {
    let Some(kind) = EventKind::from_struct_name(event_type_name(&record.event_type)) else {
        return Ok(None);
    };
    let p = Payload {
        event_type: &record.event_type,
        value: &record.payload,
    };
    let event = match kind {
        EventKind::SiteCreated => CmsEvent::SiteCreated(SiteCreated {
            site_id: p.str("site_id")?,
            name: p.str("name")?,
            owner: p.str("owner")?,
            timestamp: p.timestamp(record.timestamp_ms)?,
        }),
        EventKind::PageCreated => CmsEvent::PageCreated(PageCreated {
            page_id: p.str("page_id")?,
            site_id: p.str("site_id")?,
            title: p.str("title")?,
            author: p.str("author")?,
            timestamp: p.timestamp(record.timestamp_ms)?,
        }),
        EventKind::AuthorAdded => CmsEvent::AuthorAdded(AuthorAdded {
            site_id: p.str("site_id")?,
            author: p.str("author")?,
            added_by: p.str("added_by")?,
            timestamp: p.timestamp(record.timestamp_ms)?,
        }),
    };
    Ok(Some(event))
}
