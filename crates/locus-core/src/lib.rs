//! # locus-core
//!
//! Domain model for the Locus location service.
//!
//! This crate defines the `Location` entity with its optional `Direction`
//! sub-record, the flattened [`LocationView`] read model served to clients,
//! the input DTOs ([`NewLocation`], [`LocationUpdate`]), and the uniform
//! [`DataResponse`] result envelope returned by every repository operation.
//!
//! Mapping between DTOs, entities and views is explicit field-by-field
//! construction (see [`location`]) so that a dropped or retyped field is a
//! compile error, not a silently defaulted value.

pub mod envelope;
pub mod error;
pub mod id;
pub mod location;

pub use envelope::DataResponse;
pub use error::InputError;
pub use id::generate_id;
pub use location::{Direction, Location, LocationUpdate, LocationView, NewLocation};
