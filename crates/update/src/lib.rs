//! Sparse update documents.
//!
//! Every field of an update starts untouched and is left out of the payload,
//! so the server only changes what the caller explicitly set. Setting a field
//! to `None` sends an explicit null, which clears the stored value.

#[macro_use]
mod macros;

mod collection;
mod document;
mod error;
mod value;

pub use collection::{CollectionUpdateValue, ListUpdateAction};
pub use document::{DataSetUpdate, ExperimentUpdate, ProjectUpdate, SampleUpdate, SpaceUpdate};
pub use error::{UpdateError, UpdateResult};
pub use value::UpdateValue;
