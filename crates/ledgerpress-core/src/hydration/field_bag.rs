//! Typed access to a ledger object's field bag
//!
//! Every getter reports the object id and field name on failure so a
//! malformed record can be traced back to the ledger.

use serde_json::{Map, Value};

use crate::errors::{CmsError, Result};

pub struct FieldBag<'a> {
    object_id: &'a str,
    fields: &'a Map<String, Value>,
}

impl<'a> FieldBag<'a> {
    /// `None` when `fields` is not a JSON object
    pub fn new(object_id: &'a str, fields: &'a Value) -> Option<Self> {
        fields.as_object().map(|fields| Self { object_id, fields })
    }

    fn get(&self, name: &str) -> Option<&'a Value> {
        self.fields.get(name).filter(|v| !v.is_null())
    }

    fn malformed(&self, field: &str, reason: &str) -> CmsError {
        CmsError::MalformedObject {
            object_id: self.object_id.to_string(),
            field: field.to_string(),
            reason: reason.to_string(),
        }
    }

    pub fn required_str(&self, name: &str) -> Result<String> {
        match self.get(name) {
            Some(value) => value_as_id_string(value)
                .ok_or_else(|| self.malformed(name, "is not a string")),
            None => Err(self.malformed(name, "is missing")),
        }
    }

    /// Missing or null reads as `""`
    pub fn optional_str(&self, name: &str) -> Result<String> {
        match self.get(name) {
            Some(_) => self.required_str(name),
            None => Ok(String::new()),
        }
    }

    /// Integer sent as a JSON number or a decimal string
    pub fn required_i64(&self, name: &str) -> Result<i64> {
        let value = self.get(name).ok_or_else(|| self.malformed(name, "is missing"))?;
        parse_i64(value).ok_or_else(|| self.malformed(name, "is not an integer"))
    }

    pub fn required_u64(&self, name: &str) -> Result<u64> {
        let value = self.get(name).ok_or_else(|| self.malformed(name, "is missing"))?;
        parse_u64(value).ok_or_else(|| self.malformed(name, "is not an unsigned integer"))
    }

    pub fn required_bool(&self, name: &str) -> Result<bool> {
        match self.get(name) {
            Some(Value::Bool(b)) => Ok(*b),
            Some(Value::String(s)) if s == "true" => Ok(true),
            Some(Value::String(s)) if s == "false" => Ok(false),
            Some(_) => Err(self.malformed(name, "is not a boolean")),
            None => Err(self.malformed(name, "is missing")),
        }
    }

    /// Address vector; missing or null reads as empty
    ///
    /// Accepts a plain array or a set wrapper of the form
    /// `{"fields": {"contents": [...]}}`.
    pub fn address_list(&self, name: &str) -> Result<Vec<String>> {
        let items = match self.get(name) {
            None => return Ok(Vec::new()),
            Some(Value::Array(items)) => items,
            Some(wrapper) => match wrapper.pointer("/fields/contents") {
                Some(Value::Array(items)) => items,
                _ => return Err(self.malformed(name, "is not a list of addresses")),
            },
        };
        items
            .iter()
            .map(|v| {
                v.as_str()
                    .map(str::to_string)
                    .ok_or_else(|| self.malformed(name, "contains a non-string entry"))
            })
            .collect()
    }

    /// Counter nested under `name`, e.g. a table's `{"fields": {"size": "3"}}`;
    /// missing reads as 0
    pub fn nested_u64(&self, name: &str, pointer: &str) -> Result<u64> {
        match self.get(name).and_then(|v| v.pointer(pointer)) {
            None | Some(Value::Null) => Ok(0),
            Some(value) => {
                parse_u64(value).ok_or_else(|| self.malformed(name, "has a non-integer counter"))
            }
        }
    }
}

/// Strings pass through; `{"id": "0x.."}` wrappers unwrap to the id
fn value_as_id_string(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Object(map) => map.get("id").and_then(Value::as_str).map(str::to_string),
        _ => None,
    }
}

pub(crate) fn parse_i64(value: &Value) -> Option<i64> {
    match value {
        Value::Number(n) => n.as_i64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

pub(crate) fn parse_u64(value: &Value) -> Option<u64> {
    match value {
        Value::Number(n) => n.as_u64(),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_numbers_accept_string_or_number() {
        let fields = json!({"a": "1700000000000", "b": 42, "c": "x"});
        let bag = FieldBag::new("0x1", &fields).unwrap();
        assert_eq!(bag.required_i64("a").unwrap(), 1_700_000_000_000);
        assert_eq!(bag.required_u64("b").unwrap(), 42);
        assert!(matches!(
            bag.required_i64("c"),
            Err(CmsError::MalformedObject { .. })
        ));
    }

    #[test]
    fn test_address_list_variants() {
        let fields = json!({
            "plain": ["0xa", "0xb"],
            "set": {"type": "VecSet", "fields": {"contents": ["0xc"]}},
            "null": null
        });
        let bag = FieldBag::new("0x1", &fields).unwrap();
        assert_eq!(bag.address_list("plain").unwrap(), vec!["0xa", "0xb"]);
        assert_eq!(bag.address_list("set").unwrap(), vec!["0xc"]);
        assert!(bag.address_list("null").unwrap().is_empty());
        assert!(bag.address_list("missing").unwrap().is_empty());
    }

    #[test]
    fn test_non_object_is_not_a_bag() {
        assert!(FieldBag::new("0x1", &json!("scalar")).is_none());
    }

    #[test]
    fn test_id_wrapper_unwraps() {
        let fields = json!({"site_id": {"id": "0xs"}});
        let bag = FieldBag::new("0x1", &fields).unwrap();
        assert_eq!(bag.required_str("site_id").unwrap(), "0xs");
    }
}
