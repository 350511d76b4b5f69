//! Search criteria for the openBIS V3 API.
//!
//! A search is a tree of [`Criterion`] nodes: [`LeafCriterion`] pairs a
//! [`Field`] with a typed [`Matcher`], [`CompositeCriterion`] joins children
//! with AND or OR and may be scoped to an entity kind or a relation such as
//! the parents of a sample.
//!
//! ```
//! use openbis_search::CompositeCriterion;
//! use openbis_types::EntityKind;
//!
//! let mut criteria = CompositeCriterion::entity(EntityKind::Sample);
//! criteria.with_type().that_equals("YEAST");
//! criteria.with_property("COLOR").that_contains("red");
//! criteria.with_parents().with_code().with_wildcards().that_starts_with("P*");
//!
//! assert_eq!(
//!     criteria.to_string(),
//!     r#"Sample(and(type.equals("YEAST"), property("COLOR").contains("red"), SampleParents(and(code.starts_with("P*").wildcards()))))"#
//! );
//! ```

mod criteria;
mod date;
mod display;
mod error;
mod field;
mod matcher;
mod wire;

pub use criteria::{
    CompositeCriterion, Criterion, DateFieldBuilder, LeafCriterion, NumberFieldBuilder,
    Operator, Role, Scope, StringFieldBuilder,
};
pub use date::{DateFormat, DateTimeZone, DateValue, IntoDateValue};
pub use error::{CriteriaError, CriteriaResult};
pub use field::Field;
pub use matcher::{Comparison, DateMatcher, Matcher, NumberMatcher, Numeric, StringMatcher, ValueKind};
