//! Typed search criteria, fetch options and update documents for the
//! openBIS V3 application server API.
//!
//! This crate ties the building blocks together:
//!
//! * [`openbis_search`] builds criteria trees with typed value matchers.
//! * [`openbis_fetch`] builds fetch options graphs and decodes entities that
//!   refuse to hand out relations which were never fetched.
//! * [`openbis_update`] builds sparse update documents.
//! * [`openbis_schema`] turns all of them into the tagged wire format.
//!
//! Moving the payloads is left to a [`Transport`].
//!
//! ```
//! use openbis::prelude::*;
//!
//! let mut criteria = Sample::criteria();
//! criteria.with_type().that_equals("YEAST");
//! criteria.with_registration_date().that_is_later_than("2020-01-01")?;
//!
//! let mut fetch_options = SampleFetchOptions::new();
//! fetch_options.with_parents().with_properties();
//! assert!(!fetch_options.has_children());
//! # Ok::<(), openbis::Error>(())
//! ```

mod api;
mod error;
mod request;

pub use api::{ApplicationServerApi, Transport};
pub use error::{Error, ErrorKind, Result};
pub use request::{SearchRequest, SearchResult, Searchable, Updatable};

pub use openbis_fetch as fetch;
pub use openbis_schema as schema;
pub use openbis_search as search;
pub use openbis_types as types;
pub use openbis_update as update;

pub mod prelude {
    pub use crate::{
        ApplicationServerApi, Error, ErrorKind, SearchResult, Searchable, Transport, Updatable,
    };
    pub use openbis_fetch::{
        DataSet, DataSetFetchOptions, Experiment, ExperimentFetchOptions, FetchOptionsNode,
        NotFetchedError, Project, ProjectFetchOptions, Sample, SampleFetchOptions, Space,
        SpaceFetchOptions,
    };
    pub use openbis_schema::{FromWire, ToWire, WireConfig};
    pub use openbis_search::{CompositeCriterion, Criterion, Operator};
    pub use openbis_types::{EntityKind, Identifier, ObjectId};
    pub use openbis_update::{
        DataSetUpdate, ExperimentUpdate, ProjectUpdate, SampleUpdate, SpaceUpdate,
    };
}
