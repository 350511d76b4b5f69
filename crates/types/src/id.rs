use crate::{is_perm_id, EntityKind, IdError, Identifier};
use std::fmt;

/// A reference to one entity, in any of the forms the server accepts.
///
/// Each variant serializes to a differently tagged object (`SamplePermId`,
/// `SampleIdentifier`, `TagCode`, ...), so a perm id string can never be
/// mistaken for an identifier string on the wire.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ObjectId {
    PermId(EntityKind, String),
    Identifier(EntityKind, Identifier),
    Code(EntityKind, String),
    EntityTypePermId(EntityKind, String),
    TechId(EntityKind, i64),
}

impl ObjectId {
    pub fn perm_id(kind: EntityKind, perm_id: impl Into<String>) -> Self {
        ObjectId::PermId(kind, perm_id.into())
    }

    pub fn identifier(kind: EntityKind, identifier: &str) -> Result<Self, IdError> {
        if !kind.has_identifier() {
            return Err(IdError::UnsupportedIdType {
                kind,
                id_type: "identifier".to_string(),
            });
        }
        Ok(ObjectId::Identifier(kind, Identifier::parse(identifier)?))
    }

    pub fn code(kind: EntityKind, code: impl Into<String>) -> Self {
        ObjectId::Code(kind, code.into())
    }

    /// Id of an entity type by its code. `kind` may name the entities
    /// (`Sample`) or their types (`SampleType`); the id always carries the
    /// type kind.
    pub fn type_perm_id(kind: EntityKind, code: impl Into<String>) -> Result<Self, IdError> {
        let type_kind = kind.type_kind().ok_or_else(|| IdError::UnsupportedIdType {
            kind,
            id_type: "entity type perm id".to_string(),
        })?;
        Ok(ObjectId::EntityTypePermId(type_kind, code.into()))
    }

    /// Pick the id form for free text the way users type it.
    ///
    /// Tags are addressed by code unless the text contains a '/', entity
    /// types always by their code, and everything else by identifier if it
    /// contains a '/', otherwise by perm id.
    pub fn guess(kind: EntityKind, text: &str) -> Result<Self, IdError> {
        let text = text.trim();
        if text.is_empty() {
            return Err(IdError::EmptyComponent);
        }

        if kind == EntityKind::Tag {
            return Ok(if text.contains('/') {
                let perm_id = if text.starts_with('/') {
                    text.to_string()
                } else {
                    format!("/{}", text)
                };
                ObjectId::PermId(kind, perm_id)
            } else {
                ObjectId::Code(kind, text.to_string())
            });
        }

        if kind.is_type_kind() {
            return Self::type_perm_id(kind, text.to_uppercase());
        }

        if text.contains('/') && kind.has_identifier() {
            return Ok(ObjectId::Identifier(kind, Identifier::normalize(kind, text)?));
        }

        if matches!(kind, EntityKind::DataSet) && !is_perm_id(text) {
            return Err(IdError::InvalidPermId(text.to_string()));
        }

        Ok(ObjectId::PermId(kind, text.to_string()))
    }

    pub fn kind(&self) -> EntityKind {
        match self {
            ObjectId::PermId(kind, _)
            | ObjectId::Identifier(kind, _)
            | ObjectId::Code(kind, _)
            | ObjectId::EntityTypePermId(kind, _)
            | ObjectId::TechId(kind, _) => *kind,
        }
    }

    /// The suffix of the wire tag, e.g. `PermId` in `SamplePermId`.
    pub fn id_type(&self) -> &'static str {
        match self {
            ObjectId::PermId(..) => "PermId",
            ObjectId::Identifier(..) => "Identifier",
            ObjectId::Code(..) => "Code",
            ObjectId::EntityTypePermId(..) => "EntityTypePermId",
            ObjectId::TechId(..) => "TechId",
        }
    }
}

impl fmt::Display for ObjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ObjectId::PermId(_, value)
            | ObjectId::Code(_, value)
            | ObjectId::EntityTypePermId(_, value) => f.write_str(value),
            ObjectId::Identifier(_, identifier) => write!(f, "{}", identifier),
            ObjectId::TechId(_, id) => write!(f, "{}", id),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_guess_identifier_and_perm_id() {
        let id = ObjectId::guess(EntityKind::Sample, "default/s1").unwrap();
        assert_eq!(
            id,
            ObjectId::Identifier(EntityKind::Sample, Identifier::parse("/DEFAULT/S1").unwrap())
        );

        let id = ObjectId::guess(EntityKind::Sample, "20160817175233002-331").unwrap();
        assert_eq!(id, ObjectId::perm_id(EntityKind::Sample, "20160817175233002-331"));
    }

    #[test]
    fn test_guess_tags() {
        assert_eq!(
            ObjectId::guess(EntityKind::Tag, "FAVOURITE").unwrap(),
            ObjectId::code(EntityKind::Tag, "FAVOURITE")
        );
        assert_eq!(
            ObjectId::guess(EntityKind::Tag, "ADMIN/FAVOURITE").unwrap(),
            ObjectId::perm_id(EntityKind::Tag, "/ADMIN/FAVOURITE")
        );
    }

    #[test]
    fn test_guess_entity_type_uses_code() {
        assert_eq!(
            ObjectId::guess(EntityKind::SampleType, "yeast").unwrap(),
            ObjectId::EntityTypePermId(EntityKind::SampleType, "YEAST".to_string())
        );
    }

    #[test]
    fn test_type_perm_id_uses_type_kind() {
        assert_eq!(
            ObjectId::type_perm_id(EntityKind::Sample, "YEAST").unwrap(),
            ObjectId::type_perm_id(EntityKind::SampleType, "YEAST").unwrap()
        );
        assert_eq!(
            ObjectId::type_perm_id(EntityKind::DataSet, "RAW").unwrap().kind(),
            EntityKind::DataSetType
        );
        assert!(matches!(
            ObjectId::type_perm_id(EntityKind::Space, "X"),
            Err(IdError::UnsupportedIdType { kind: EntityKind::Space, .. })
        ));
    }

    #[test]
    fn test_data_sets_need_perm_ids() {
        assert!(matches!(
            ObjectId::guess(EntityKind::DataSet, "not-a-perm-id"),
            Err(IdError::InvalidPermId(_))
        ));
    }

    #[test]
    fn test_identifier_rejected_for_kinds_without_one() {
        assert!(matches!(
            ObjectId::identifier(EntityKind::Tag, "/A/B"),
            Err(IdError::UnsupportedIdType { .. })
        ));
    }
}
