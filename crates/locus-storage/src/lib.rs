//! # locus-storage
//!
//! Storage abstraction layer for the Locus location service.
//!
//! This crate defines the [`LocationStore`] trait and its error types. It
//! does not contain any implementations; those live in separate crates
//! (e.g. `locus-db-memory`).
//!
//! ## Overview
//!
//! [`LocationStore`] is the contract for:
//! - point CRUD by identifier (insert, update, remove, find, exists)
//! - the ordered full scan the read-through cache is populated from

mod error;
mod traits;

pub use error::{ErrorCategory, StoreError};
pub use traits::LocationStore;

/// Type alias for a store result.
pub type StoreResult<T> = Result<T, StoreError>;

/// Type alias for a shared store trait object.
pub type DynStore = std::sync::Arc<dyn LocationStore>;
