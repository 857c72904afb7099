//! Fullnode response decoding

use ledgerpress_core::ledger::{
    EventRecord, ExecutionOutcome, ExecutionStatus, LedgerObject, ObjectChange, ObjectChangeKind,
};
use serde_json::Value;

use crate::errors::{decode_error, Result};

/// Decode a `sui_getObject` result
///
/// `None` when the node reports the object as absent or deleted.
pub fn decode_object(result: &Value) -> Result<Option<LedgerObject>> {
    if result.get("error").is_some_and(|e| !e.is_null()) {
        return Ok(None);
    }
    match result.get("data") {
        None | Some(Value::Null) => Ok(None),
        Some(data) => object_from_data(data).map(Some),
    }
}

/// One `data` entry of an object read or owned-object page
fn object_from_data(data: &Value) -> Result<LedgerObject> {
    let object_id = data
        .get("objectId")
        .and_then(Value::as_str)
        .ok_or_else(|| decode_error("decode_object", "object without objectId"))?
        .to_string();

    let content = data.get("content");
    let is_move_object = content
        .and_then(|c| c.get("dataType"))
        .and_then(Value::as_str)
        == Some("moveObject");

    let (type_tag, fields) = if is_move_object {
        let type_tag = content
            .and_then(|c| c.get("type"))
            .or_else(|| data.get("type"))
            .and_then(Value::as_str)
            .map(str::to_string);
        let fields = content
            .and_then(|c| c.get("fields"))
            .cloned()
            .unwrap_or(Value::Null);
        (type_tag, fields)
    } else {
        (None, Value::Null)
    };

    Ok(LedgerObject {
        object_id,
        type_tag,
        fields,
    })
}

/// Decode one `suix_getOwnedObjects` page into objects and the next cursor
pub fn decode_owned_page(result: &Value) -> Result<(Vec<LedgerObject>, Option<Value>)> {
    let entries = result
        .get("data")
        .and_then(Value::as_array)
        .ok_or_else(|| decode_error("decode_owned_objects", "missing data array"))?;

    let mut objects = Vec::with_capacity(entries.len());
    for entry in entries {
        if let Some(data) = entry.get("data").filter(|d| !d.is_null()) {
            objects.push(object_from_data(data)?);
        }
    }

    let has_next = result
        .get("hasNextPage")
        .and_then(Value::as_bool)
        .unwrap_or(false);
    let cursor = result
        .get("nextCursor")
        .filter(|c| has_next && !c.is_null())
        .cloned();
    Ok((objects, cursor))
}

/// Decode a `suix_queryEvents` page
pub fn decode_events(result: &Value) -> Result<Vec<EventRecord>> {
    let entries = result
        .get("data")
        .and_then(Value::as_array)
        .ok_or_else(|| decode_error("decode_events", "missing data array"))?;

    entries
        .iter()
        .map(|entry| {
            let event_type = entry
                .get("type")
                .and_then(Value::as_str)
                .ok_or_else(|| decode_error("decode_events", "event without type"))?
                .to_string();
            let id = entry.get("id");
            let tx_digest = id
                .and_then(|i| i.get("txDigest"))
                .and_then(Value::as_str)
                .unwrap_or_default()
                .to_string();
            let event_seq = id
                .and_then(|i| i.get("eventSeq"))
                .and_then(number_like_u64)
                .unwrap_or(0);
            let timestamp_ms = entry
                .get("timestampMs")
                .and_then(number_like_u64)
                .and_then(|t| i64::try_from(t).ok());

            Ok(EventRecord {
                event_type,
                tx_digest,
                event_seq,
                timestamp_ms,
                payload: entry.get("parsedJson").cloned().unwrap_or(Value::Null),
            })
        })
        .collect()
}

/// Decode a `sui_executeTransactionBlock` result
pub fn decode_execution(result: &Value) -> Result<ExecutionOutcome> {
    let digest = result
        .get("digest")
        .and_then(Value::as_str)
        .ok_or_else(|| decode_error("decode_execution", "missing digest"))?
        .to_string();

    let status_obj = result
        .pointer("/effects/status")
        .ok_or_else(|| decode_error("decode_execution", "missing effects.status"))?;
    let status = match status_obj.get("status").and_then(Value::as_str) {
        Some("success") => ExecutionStatus::Success,
        Some(_) => ExecutionStatus::Failure {
            error: status_obj
                .get("error")
                .and_then(Value::as_str)
                .unwrap_or("transaction failed without detail")
                .to_string(),
        },
        None => return Err(decode_error("decode_execution", "status is not a string")),
    };

    let changes = result
        .get("objectChanges")
        .and_then(Value::as_array)
        .map(|changes| changes.iter().filter_map(object_change).collect())
        .unwrap_or_default();

    Ok(ExecutionOutcome {
        digest,
        status,
        changes,
    })
}

fn object_change(change: &Value) -> Option<ObjectChange> {
    let kind = match change.get("type").and_then(Value::as_str)? {
        "created" => ObjectChangeKind::Created,
        "mutated" => ObjectChangeKind::Mutated,
        "transferred" => ObjectChangeKind::Transferred,
        "deleted" => ObjectChangeKind::Deleted,
        "wrapped" => ObjectChangeKind::Wrapped,
        "published" => ObjectChangeKind::Published,
        _ => return None,
    };
    let object_id = change
        .get("objectId")
        .or_else(|| change.get("packageId"))
        .and_then(Value::as_str)?
        .to_string();
    Some(ObjectChange {
        kind,
        object_id,
        object_type: change
            .get("objectType")
            .and_then(Value::as_str)
            .map(str::to_string),
    })
}

/// The node sends 64-bit integers as decimal strings
fn number_like_u64(value: &Value) -> Option<u64> {
    match value {
        Value::String(s) => s.parse().ok(),
        Value::Number(n) => n.as_u64(),
        _ => None,
    }
}
