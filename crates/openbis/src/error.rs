use openbis_fetch::NotFetchedError;
use openbis_schema::WireError;
use openbis_search::CriteriaError;
use openbis_types::IdError;
use openbis_update::UpdateError;
use thiserror::Error;

pub type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    NotFetched(#[from] NotFetchedError),

    #[error(transparent)]
    Criteria(#[from] CriteriaError),

    #[error(transparent)]
    Update(#[from] UpdateError),

    #[error(transparent)]
    Id(#[from] IdError),

    #[error(transparent)]
    Wire(#[from] WireError),

    #[error("call to {method} failed: {source}")]
    Transport {
        method: String,
        #[source]
        source: anyhow::Error,
    },
}

/// Coarse classification of [`Error`].
///
/// Everything except `Transport` is a defect in the calling code or the
/// payload and is not worth retrying.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    UnfetchedRelation,
    InvalidLiteral,
    InvalidCriteria,
    InvalidUpdateState,
    Identifier,
    Wire,
    Transport,
}

impl Error {
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::NotFetched(_) => ErrorKind::UnfetchedRelation,
            Error::Criteria(CriteriaError::InvalidLiteral { .. }) => ErrorKind::InvalidLiteral,
            Error::Criteria(_) => ErrorKind::InvalidCriteria,
            Error::Update(_) => ErrorKind::InvalidUpdateState,
            Error::Id(_) | Error::Wire(WireError::Id(_)) => ErrorKind::Identifier,
            Error::Wire(_) => ErrorKind::Wire,
            Error::Transport { .. } => ErrorKind::Transport,
        }
    }

    pub fn is_retryable(&self) -> bool {
        self.kind() == ErrorKind::Transport
    }

    pub(crate) fn transport(method: &str, source: anyhow::Error) -> Self {
        Error::Transport {
            method: method.to_string(),
            source,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use openbis_search::DateValue;
    use openbis_update::CollectionUpdateValue;

    #[test]
    fn test_kinds() {
        let literal: Error = DateValue::literal("not-a-date").unwrap_err().into();
        assert_eq!(literal.kind(), ErrorKind::InvalidLiteral);

        let mut collection = CollectionUpdateValue::<String>::default();
        collection.set([]);
        let update: Error = collection.add(["A".to_string()]).unwrap_err().into();
        assert_eq!(update.kind(), ErrorKind::InvalidUpdateState);

        let guard: Error = openbis_fetch::ensure_fetched(false, "Sample", "parents")
            .unwrap_err()
            .into();
        assert_eq!(guard.kind(), ErrorKind::UnfetchedRelation);
        assert!(!guard.is_retryable());

        let transport = Error::transport("searchSamples", anyhow::anyhow!("connection reset"));
        assert_eq!(transport.kind(), ErrorKind::Transport);
        assert_eq!(
            transport.to_string(),
            "call to searchSamples failed: connection reset"
        );
    }
}
