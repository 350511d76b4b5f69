//! The tagged wire format of the openBIS V3 API.
//!
//! Every node that crosses the wire (criteria, matchers, fetch options,
//! update values, identifiers, enum constants and dates) is a JSON object
//! carrying its own type tag, so the receiving side can reconstruct the
//! right variant without a schema. The tag key and namespace are taken from
//! an explicit [`WireConfig`] rather than from global state.

mod config;
mod date;
mod enums;
mod error;
mod id;
mod wire;

pub use config::{WireConfig, WireConfigBuilder, WireConfigBuilderError};
pub use date::{date_from_wire, date_to_wire};
pub use enums::{enum_from_wire, enum_to_wire, WireEnum};
pub use error::WireError;
pub use wire::{as_object, optional_field, required_field, FromWire, ToWire};

pub type WireResult<T> = Result<T, WireError>;
