//! serde_json interop — JSON documents as merge inputs and outputs.
//!
//! JSON is the common carrier for the option trees this engine merges, so
//! conversion in both directions is part of the core surface. Import is
//! total and lossless: arrays arrive dense, objects arrive as base-prototype
//! records with name keys in preserved order (`serde_json` is built with
//! `preserve_order`). Export is total but lossy at the edges JSON cannot
//! express: holes and opaque terminals become `null`, and symbol-keyed
//! entries are dropped.

use serde_json::Number;

use crate::value::{Array, Key, Record, Value};

impl Value {
    /// Build a merge value from a JSON tree.
    ///
    /// Numbers keep their integer identity when `i64`-representable;
    /// everything else becomes a float. Objects preserve key order.
    ///
    /// ```
    /// use optmerge_core::{Value, ValueKind};
    /// use serde_json::json;
    ///
    /// let value = Value::from_json(&json!({"a": 1, "b": [true, null]}));
    /// assert_eq!(value.kind(), ValueKind::Record);
    /// ```
    pub fn from_json(json: &serde_json::Value) -> Value {
        match json {
            serde_json::Value::Null => Value::Null,
            serde_json::Value::Bool(b) => Value::Bool(*b),
            serde_json::Value::Number(n) => number_to_value(n),
            serde_json::Value::String(s) => Value::String(s.clone()),
            serde_json::Value::Array(items) => {
                Value::Array(Array::from_values(items.iter().map(Value::from_json)))
            }
            serde_json::Value::Object(map) => {
                let mut record = Record::new();
                for (key, value) in map {
                    record.insert(key.as_str(), Value::from_json(value));
                }
                Value::Record(record)
            }
        }
    }

    /// Render this value as a JSON tree.
    ///
    /// Array holes and opaque terminals become `null`; named array entries
    /// and symbol-keyed record entries are dropped (JSON has nowhere to put
    /// them). Non-finite floats become `null` as well.
    pub fn to_json(&self) -> serde_json::Value {
        match self {
            Value::Null => serde_json::Value::Null,
            Value::Bool(b) => serde_json::Value::Bool(*b),
            Value::Integer(i) => serde_json::Value::Number(Number::from(*i)),
            Value::Float(x) => Number::from_f64(*x)
                .map(serde_json::Value::Number)
                .unwrap_or(serde_json::Value::Null),
            Value::String(s) => serde_json::Value::String(s.clone()),
            Value::Opaque(_) => serde_json::Value::Null,
            Value::Array(array) => serde_json::Value::Array(
                array
                    .slots()
                    .iter()
                    .map(|slot| match slot {
                        Some(value) => value.to_json(),
                        None => serde_json::Value::Null,
                    })
                    .collect(),
            ),
            Value::Record(record) => record.to_json(),
        }
    }
}

impl Record {
    /// Render this record as a JSON object, name-keyed entries only.
    pub fn to_json(&self) -> serde_json::Value {
        let mut map = serde_json::Map::new();
        for (key, value) in self.entries() {
            if let Key::Name(name) = key {
                map.insert(name.clone(), value.to_json());
            }
        }
        serde_json::Value::Object(map)
    }
}

// Try i64 first, then u64, then fall through to f64.
fn number_to_value(n: &Number) -> Value {
    if let Some(i) = n.as_i64() {
        return Value::Integer(i);
    }
    if let Some(u) = n.as_u64() {
        // Beyond i64 range; approximate as float rather than reject.
        return Value::Float(u as f64);
    }
    n.as_f64().map(Value::Float).unwrap_or(Value::Null)
}

impl From<serde_json::Value> for Value {
    fn from(json: serde_json::Value) -> Self {
        Value::from_json(&json)
    }
}

impl From<&Value> for serde_json::Value {
    fn from(value: &Value) -> Self {
        value.to_json()
    }
}

impl From<&Record> for serde_json::Value {
    fn from(record: &Record) -> Self {
        record.to_json()
    }
}
