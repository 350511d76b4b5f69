use thiserror::Error;

/// A relation or fetched field was read on an entity whose fetch options
/// never requested it.
///
/// This is a defect in the calling code, never a transient condition: the
/// value is not "empty", it is unknown.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("'{relation}' of {entity} was not fetched; request it in the fetch options before reading it")]
pub struct NotFetchedError {
    pub entity: &'static str,
    pub relation: &'static str,
}

pub fn ensure_fetched(
    fetched: bool,
    entity: &'static str,
    relation: &'static str,
) -> Result<(), NotFetchedError> {
    if fetched {
        return Ok(());
    }
    tracing::debug!(entity, relation, "read of unfetched relation");
    Err(NotFetchedError { entity, relation })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_names_relation() {
        let err = ensure_fetched(false, "Sample", "parents").unwrap_err();
        assert_eq!(err.relation, "parents");
        assert_eq!(
            err.to_string(),
            "'parents' of Sample was not fetched; request it in the fetch options before reading it"
        );
        assert!(ensure_fetched(true, "Sample", "parents").is_ok());
    }
}
