use crate::{date_from_wire, date_to_wire, WireConfig, WireError};
use chrono::{DateTime, Utc};
use serde_json::{Map, Value};
use std::collections::BTreeMap;

/// Converts a node into its tagged wire payload.
///
/// Encoding never fails: every invariant a payload depends on is enforced
/// when the node is built.
pub trait ToWire {
    fn to_wire(&self, config: &WireConfig) -> Value;
}

/// Reconstructs a node from its tagged wire payload.
pub trait FromWire: Sized {
    fn from_wire(value: &Value, config: &WireConfig) -> Result<Self, WireError>;
}

pub fn as_object(value: &Value) -> Result<&Map<String, Value>, WireError> {
    value
        .as_object()
        .ok_or_else(|| WireError::NotAnObject(value.to_string()))
}

/// A field that must be present and not null.
pub fn required_field<'a>(
    map: &'a Map<String, Value>,
    kind: &str,
    field: &str,
) -> Result<&'a Value, WireError> {
    match map.get(field) {
        Some(Value::Null) | None => Err(WireError::MissingField {
            kind: kind.to_string(),
            field: field.to_string(),
        }),
        Some(value) => Ok(value),
    }
}

/// Decode a field that may be absent; absent and null both give `None`.
pub fn optional_field<T: FromWire>(
    map: &Map<String, Value>,
    field: &str,
    config: &WireConfig,
) -> Result<Option<T>, WireError> {
    match map.get(field) {
        Some(Value::Null) | None => Ok(None),
        Some(value) => T::from_wire(value, config).map(Some),
    }
}

impl ToWire for String {
    fn to_wire(&self, _config: &WireConfig) -> Value {
        Value::String(self.clone())
    }
}

impl ToWire for str {
    fn to_wire(&self, _config: &WireConfig) -> Value {
        Value::String(self.to_string())
    }
}

impl ToWire for bool {
    fn to_wire(&self, _config: &WireConfig) -> Value {
        Value::Bool(*self)
    }
}

impl ToWire for i64 {
    fn to_wire(&self, _config: &WireConfig) -> Value {
        Value::from(*self)
    }
}

impl ToWire for f64 {
    fn to_wire(&self, _config: &WireConfig) -> Value {
        Value::from(*self)
    }
}

impl ToWire for DateTime<Utc> {
    fn to_wire(&self, config: &WireConfig) -> Value {
        date_to_wire(self, config)
    }
}

impl<T: ToWire + ?Sized> ToWire for &T {
    fn to_wire(&self, config: &WireConfig) -> Value {
        (**self).to_wire(config)
    }
}

impl<T: ToWire> ToWire for Option<T> {
    fn to_wire(&self, config: &WireConfig) -> Value {
        match self {
            Some(value) => value.to_wire(config),
            None => Value::Null,
        }
    }
}

impl<T: ToWire> ToWire for Vec<T> {
    fn to_wire(&self, config: &WireConfig) -> Value {
        Value::Array(self.iter().map(|item| item.to_wire(config)).collect())
    }
}

impl<T: ToWire> ToWire for BTreeMap<String, T> {
    fn to_wire(&self, config: &WireConfig) -> Value {
        Value::Object(
            self.iter()
                .map(|(key, value)| (key.clone(), value.to_wire(config)))
                .collect(),
        )
    }
}

impl FromWire for String {
    fn from_wire(value: &Value, _config: &WireConfig) -> Result<Self, WireError> {
        match value {
            Value::String(text) => Ok(text.clone()),
            other => Err(WireError::invalid("string", other.to_string())),
        }
    }
}

impl FromWire for bool {
    fn from_wire(value: &Value, _config: &WireConfig) -> Result<Self, WireError> {
        value
            .as_bool()
            .ok_or_else(|| WireError::invalid("bool", value.to_string()))
    }
}

impl FromWire for i64 {
    fn from_wire(value: &Value, _config: &WireConfig) -> Result<Self, WireError> {
        value
            .as_i64()
            .ok_or_else(|| WireError::invalid("integer", value.to_string()))
    }
}

impl FromWire for f64 {
    fn from_wire(value: &Value, _config: &WireConfig) -> Result<Self, WireError> {
        value
            .as_f64()
            .ok_or_else(|| WireError::invalid("number", value.to_string()))
    }
}

impl FromWire for DateTime<Utc> {
    fn from_wire(value: &Value, config: &WireConfig) -> Result<Self, WireError> {
        date_from_wire(value, config)
    }
}

impl<T: FromWire> FromWire for Vec<T> {
    fn from_wire(value: &Value, config: &WireConfig) -> Result<Self, WireError> {
        match value {
            Value::Array(items) => items.iter().map(|item| T::from_wire(item, config)).collect(),
            other => Err(WireError::invalid("array", other.to_string())),
        }
    }
}

/// Property maps. The server sends numbers and booleans for typed
/// properties; they are kept in their textual form.
impl FromWire for BTreeMap<String, String> {
    fn from_wire(value: &Value, _config: &WireConfig) -> Result<Self, WireError> {
        let map = as_object(value)?;
        let mut properties = BTreeMap::new();
        for (key, value) in map {
            let text = match value {
                Value::Null => continue,
                Value::String(text) => text.clone(),
                Value::Number(_) | Value::Bool(_) => value.to_string(),
                other => return Err(WireError::invalid(key.clone(), other.to_string())),
            };
            properties.insert(key.clone(), text);
        }
        Ok(properties)
    }
}
