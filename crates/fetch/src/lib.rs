//! Fetch options graphs and the entities decoded with them.
//!
//! A fetch options value says which relations of an entity the server
//! should include. Requesting a relation is idempotent: `with_parents()`
//! creates the nested options the first time and returns the same ones on
//! every later call, so chains such as
//! `options.with_parents().with_properties()` build a graph incrementally.
//!
//! ```
//! use openbis_fetch::SampleFetchOptions;
//!
//! let mut options = SampleFetchOptions::new();
//! options.with_parents().with_properties();
//! options.with_parents().with_type();
//!
//! assert!(options.has_parents());
//! assert!(options.parents().unwrap().has_properties());
//! assert!(options.parents().unwrap().has_type());
//! assert!(!options.has_children());
//! ```
//!
//! Entities remember the options they were decoded with. Reading a relation
//! that was never requested returns a [`NotFetchedError`] instead of an
//! empty value.

#[macro_use]
mod macros;

mod decode;
mod entity;
mod guard;
mod node;
mod options;
mod sort;

pub use decode::{decode_entities, decode_entity, decode_entity_list, DecodeContext, Entity};
pub use entity::{
    Attachment, DataSet, DataSetKind, DataSetType, Experiment, ExperimentType, HistoryEntry,
    Person, Project, Sample, SampleType, Space, Tag,
};
pub use guard::{ensure_fetched, NotFetchedError};
pub use node::{FetchOptionsNode, Paging};
pub use options::{
    AttachmentFetchOptions, DataSetFetchOptions, DataSetTypeFetchOptions, EmptyFetchOptions,
    ExperimentFetchOptions, ExperimentTypeFetchOptions, HistoryEntryFetchOptions,
    PersonFetchOptions, ProjectFetchOptions, SampleFetchOptions, SampleTypeFetchOptions,
    SpaceFetchOptions, TagFetchOptions,
};
pub use sort::{SortOrder, SortSpec, Sorting};
