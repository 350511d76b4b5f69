use crate::ValueKind;
use std::fmt;

/// The attribute of an entity a leaf criterion tests.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Field {
    Code,
    PermId,
    Identifier,
    /// The code of the entity type.
    Type,
    /// A string property, by property type code.
    Property(String),
    NumberProperty(String),
    DateProperty(String),
    /// Any property of the entity.
    AnyProperty,
    /// Any attribute or property of the entity.
    AnyField,
    RegistrationDate,
    ModificationDate,
}

impl Field {
    pub fn value_kind(&self) -> ValueKind {
        match self {
            Field::NumberProperty(_) => ValueKind::Number,
            Field::DateProperty(_) | Field::RegistrationDate | Field::ModificationDate => {
                ValueKind::Date
            }
            _ => ValueKind::String,
        }
    }

    /// Prefix of the leaf type tag.
    pub fn tag(&self) -> &'static str {
        match self {
            Field::Code => "Code",
            Field::PermId => "PermId",
            Field::Identifier => "Identifier",
            Field::Type => "Type",
            Field::Property(_) => "Property",
            Field::NumberProperty(_) => "NumberProperty",
            Field::DateProperty(_) => "DateProperty",
            Field::AnyProperty => "AnyProperty",
            Field::AnyField => "AnyField",
            Field::RegistrationDate => "RegistrationDate",
            Field::ModificationDate => "ModificationDate",
        }
    }

    /// The property name for property fields.
    pub fn name(&self) -> Option<&str> {
        match self {
            Field::Property(name) | Field::NumberProperty(name) | Field::DateProperty(name) => {
                Some(name)
            }
            _ => None,
        }
    }

    /// Rebuild a field from its tag and optional property name.
    pub(crate) fn from_tag(tag: &str, name: Option<String>) -> Option<Field> {
        let field = match (tag, name) {
            ("Code", None) => Field::Code,
            ("PermId", None) => Field::PermId,
            ("Identifier", None) => Field::Identifier,
            ("Type", None) => Field::Type,
            ("Property", Some(name)) => Field::Property(name),
            ("NumberProperty", Some(name)) => Field::NumberProperty(name),
            ("DateProperty", Some(name)) => Field::DateProperty(name),
            ("AnyProperty", None) => Field::AnyProperty,
            ("AnyField", None) => Field::AnyField,
            ("RegistrationDate", None) => Field::RegistrationDate,
            ("ModificationDate", None) => Field::ModificationDate,
            _ => return None,
        };
        Some(field)
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Field::Property(name) => write!(f, "property(\"{}\")", name),
            Field::NumberProperty(name) => write!(f, "number_property(\"{}\")", name),
            Field::DateProperty(name) => write!(f, "date_property(\"{}\")", name),
            Field::Code => f.write_str("code"),
            Field::PermId => f.write_str("perm_id"),
            Field::Identifier => f.write_str("identifier"),
            Field::Type => f.write_str("type"),
            Field::AnyProperty => f.write_str("any_property"),
            Field::AnyField => f.write_str("any_field"),
            Field::RegistrationDate => f.write_str("registration_date"),
            Field::ModificationDate => f.write_str("modification_date"),
        }
    }
}
