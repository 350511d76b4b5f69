use crate::{Comparison, ValueKind};
use thiserror::Error;

pub type CriteriaResult<T> = Result<T, CriteriaError>;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum CriteriaError {
    #[error("Invalid literal '{value}': expected {expected}")]
    InvalidLiteral { value: String, expected: String },

    #[error("A {matcher} matcher cannot be used on the {field} field, which holds {expected} values")]
    MatcherMismatch {
        field: String,
        expected: ValueKind,
        matcher: ValueKind,
    },

    #[error("{kind} matchers do not support the {comparison} comparison")]
    UnsupportedComparison {
        kind: ValueKind,
        comparison: Comparison,
    },
}
