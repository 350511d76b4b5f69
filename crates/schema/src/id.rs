use crate::{required_field, FromWire, ToWire, WireConfig, WireError};
use openbis_types::{EntityKind, Identifier, ObjectId};
use serde_json::{json, Value};

const ENTITY_TYPE_PERM_ID: &str = "EntityTypePermId";
const ENTITY_KIND: &str = "EntityKind";

/// Suffixes of the per-kind id tags with the field holding the value.
const ID_FIELDS: [(&str, &str); 4] = [
    ("PermId", "permId"),
    ("Identifier", "identifier"),
    ("Code", "code"),
    ("TechId", "techId"),
];

impl ToWire for ObjectId {
    fn to_wire(&self, config: &WireConfig) -> Value {
        let (tag, field, value) = match self {
            ObjectId::EntityTypePermId(kind, code) => {
                let mut map = config.tagged(ENTITY_TYPE_PERM_ID);
                map.insert("permId".to_string(), json!(code));
                if let Some(entity_kind) = kind.type_wire_kind() {
                    let mut kind_map = config.tagged(ENTITY_KIND);
                    kind_map.insert("value".to_string(), json!(entity_kind));
                    map.insert("entityKind".to_string(), Value::Object(kind_map));
                }
                return Value::Object(map);
            }
            ObjectId::PermId(kind, perm_id) => (kind, "permId", json!(perm_id)),
            ObjectId::Identifier(kind, identifier) => {
                (kind, "identifier", json!(identifier.to_string()))
            }
            ObjectId::Code(kind, code) => (kind, "code", json!(code)),
            ObjectId::TechId(kind, id) => (kind, "techId", json!(id)),
        };

        let mut map = config.tagged(&format!("{}{}", tag.name(), self.id_type()));
        map.insert(field.to_string(), value);
        Value::Object(map)
    }
}

impl FromWire for ObjectId {
    fn from_wire(value: &Value, config: &WireConfig) -> Result<Self, WireError> {
        let tag = config.type_of(value)?;
        let map = crate::as_object(value)?;

        if tag == ENTITY_TYPE_PERM_ID {
            let code = String::from_wire(required_field(map, tag, "permId")?, config)?;
            let kind_value = required_field(map, tag, "entityKind")?;
            let wire_kind = match kind_value {
                Value::String(name) => name.as_str(),
                _ => config
                    .expect_type(kind_value, ENTITY_KIND)?
                    .get("value")
                    .and_then(Value::as_str)
                    .ok_or_else(|| WireError::invalid("entityKind", kind_value.to_string()))?,
            };
            let kind = EntityKind::from_type_wire_kind(wire_kind)
                .ok_or_else(|| WireError::invalid("entityKind", wire_kind))?;
            return Ok(ObjectId::EntityTypePermId(kind, code));
        }

        for (suffix, field) in ID_FIELDS {
            let Some(kind_name) = tag.strip_suffix(suffix) else {
                continue;
            };
            let Ok(kind) = kind_name.parse::<EntityKind>() else {
                continue;
            };
            let raw = required_field(map, tag, field)?;
            return Ok(match suffix {
                "PermId" => ObjectId::PermId(kind, String::from_wire(raw, config)?),
                "Identifier" => {
                    let text = String::from_wire(raw, config)?;
                    ObjectId::Identifier(kind, Identifier::parse(&text)?)
                }
                "Code" => ObjectId::Code(kind, String::from_wire(raw, config)?),
                _ => ObjectId::TechId(kind, i64::from_wire(raw, config)?),
            });
        }

        Err(WireError::UnknownType(tag.to_string()))
    }
}
