use crate::{WireConfig, WireError};
use serde_json::{json, Value};

/// A closed set of named constants with a declared wire type.
pub trait WireEnum: Sized + Copy {
    /// The type tag, e.g. `SortOrder`.
    const TYPE: &'static str;

    fn wire_name(&self) -> &'static str;

    fn from_wire_name(name: &str) -> Option<Self>;
}

/// `{"type": "<EnumType>", "value": "<NAME>"}`
pub fn enum_to_wire<E: WireEnum>(value: E, config: &WireConfig) -> Value {
    let mut map = config.tagged(E::TYPE);
    map.insert("value".to_string(), json!(value.wire_name()));
    Value::Object(map)
}

/// Reads the tagged form, or the bare constant name servers send in
/// entity responses.
pub fn enum_from_wire<E: WireEnum>(value: &Value, config: &WireConfig) -> Result<E, WireError> {
    let name = match value {
        Value::String(name) => name.as_str(),
        Value::Object(_) => {
            let map = config.expect_type(value, E::TYPE)?;
            map.get("value")
                .and_then(Value::as_str)
                .ok_or_else(|| WireError::MissingField {
                    kind: E::TYPE.to_string(),
                    field: "value".to_string(),
                })?
        }
        other => return Err(WireError::invalid(E::TYPE, other.to_string())),
    };

    E::from_wire_name(name).ok_or_else(|| WireError::invalid(E::TYPE, name))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[derive(Debug, Clone, Copy, PartialEq)]
    enum Kind {
        Physical,
        Link,
    }

    impl WireEnum for Kind {
        const TYPE: &'static str = "DataSetKind";

        fn wire_name(&self) -> &'static str {
            match self {
                Kind::Physical => "PHYSICAL",
                Kind::Link => "LINK",
            }
        }

        fn from_wire_name(name: &str) -> Option<Self> {
            match name {
                "PHYSICAL" => Some(Kind::Physical),
                "LINK" => Some(Kind::Link),
                _ => None,
            }
        }
    }

    #[test]
    fn test_enum_tagging() {
        let config = WireConfig::default();
        let wire = enum_to_wire(Kind::Link, &config);
        assert_eq!(wire, json!({"type": "DataSetKind", "value": "LINK"}));
        assert_eq!(enum_from_wire::<Kind>(&wire, &config).unwrap(), Kind::Link);
    }

    #[test]
    fn test_enum_accepts_bare_name() {
        let config = WireConfig::openbis_v3();
        assert_eq!(
            enum_from_wire::<Kind>(&json!("PHYSICAL"), &config).unwrap(),
            Kind::Physical
        );
        assert!(enum_from_wire::<Kind>(&json!("CONTAINER"), &config).is_err());
    }
}
