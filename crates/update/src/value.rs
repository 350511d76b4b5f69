use openbis_schema::{ToWire, WireConfig};
use serde_json::{json, Map, Value};

const FIELD_UPDATE_VALUE: &str = "FieldUpdateValue";

/// A single field of an update document.
///
/// `Untouched` fields are left out of the payload so the server keeps the
/// stored value. Once set, a field stays set; `Set(None)` clears the value
/// on the server.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UpdateValue<T> {
    Untouched,
    Set(Option<T>),
}

impl<T> Default for UpdateValue<T> {
    fn default() -> Self {
        UpdateValue::Untouched
    }
}

impl<T> UpdateValue<T> {
    pub fn set_value(&mut self, value: Option<T>) -> &mut Self {
        *self = UpdateValue::Set(value);
        self
    }

    pub fn set(&mut self, value: T) -> &mut Self {
        self.set_value(Some(value))
    }

    pub fn clear(&mut self) -> &mut Self {
        self.set_value(None)
    }

    pub fn is_modified(&self) -> bool {
        matches!(self, UpdateValue::Set(_))
    }

    /// The value to send; `None` both when untouched and when cleared.
    pub fn value(&self) -> Option<&T> {
        match self {
            UpdateValue::Set(value) => value.as_ref(),
            UpdateValue::Untouched => None,
        }
    }
}

impl<T: ToWire> UpdateValue<T> {
    /// Insert this value under `key`, unless it is untouched.
    pub fn write(&self, map: &mut Map<String, Value>, key: &str, config: &WireConfig) {
        if self.is_modified() {
            tracing::trace!(key, "writing modified field");
            map.insert(key.to_string(), self.to_wire(config));
        }
    }
}

impl<T: ToWire> ToWire for UpdateValue<T> {
    fn to_wire(&self, config: &WireConfig) -> Value {
        let mut map = config.tagged(FIELD_UPDATE_VALUE);
        map.insert("isModified".to_string(), json!(self.is_modified()));
        map.insert(
            "value".to_string(),
            self.value().map_or(Value::Null, |value| value.to_wire(config)),
        );
        Value::Object(map)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn written(value: &UpdateValue<String>) -> Map<String, Value> {
        let mut map = Map::new();
        value.write(&mut map, "description", &WireConfig::default());
        map
    }

    #[test]
    fn test_untouched_is_omitted() {
        let value = UpdateValue::<String>::default();
        assert!(!value.is_modified());
        assert!(written(&value).is_empty());
    }

    #[test]
    fn test_cleared_is_explicit_null() {
        let mut value = UpdateValue::<String>::default();
        value.clear();
        assert_eq!(
            Value::Object(written(&value)),
            json!({"description": {"type": "FieldUpdateValue", "isModified": true, "value": null}})
        );
    }

    #[test]
    fn test_set_value_is_sent() {
        let mut value = UpdateValue::default();
        value.set("new text".to_string());
        assert_eq!(value.value().map(String::as_str), Some("new text"));
        assert_eq!(
            Value::Object(written(&value)),
            json!({"description": {"type": "FieldUpdateValue", "isModified": true, "value": "new text"}})
        );
    }

    #[test]
    fn test_set_is_permanent() {
        let mut value = UpdateValue::default();
        value.set(3_i64).clear();
        assert!(value.is_modified());
        assert_eq!(value, UpdateValue::Set(None));
    }
}
