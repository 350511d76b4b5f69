mod id;
mod identifier;
mod kind;

pub use id::ObjectId;
pub use identifier::{is_perm_id, Identifier};
pub use kind::EntityKind;

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum IdError {
    #[error("Invalid identifier: {0}")]
    InvalidIdentifier(String),

    #[error("Invalid perm id: {0}")]
    InvalidPermId(String),

    #[error("Unknown entity kind: {0}")]
    UnknownKind(String),

    #[error("{kind} cannot be addressed by {id_type}")]
    UnsupportedIdType { kind: EntityKind, id_type: String },

    #[error("Empty identifier component")]
    EmptyComponent,
}
