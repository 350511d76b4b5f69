use openbis_types::EntityKind;
use thiserror::Error;

pub type UpdateResult<T> = Result<T, UpdateError>;

/// An update document was put into a state that cannot be sent.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum UpdateError {
    #[error("cannot {action} items after the collection was replaced with set")]
    ConflictingActions { action: &'static str },

    #[error("{document} needs a {expected} id, got a {found} id")]
    WrongIdKind {
        document: &'static str,
        expected: EntityKind,
        found: EntityKind,
    },
}
