//! Storage traits for the location store abstraction.
//!
//! This module defines the contract every storage backend must implement.

use async_trait::async_trait;

use locus_core::Location;

use crate::error::StoreError;

/// The storage trait all location backends must implement.
///
/// This trait covers point CRUD by identifier plus the ordered full scan
/// the read-through cache is populated from. Implementations must be
/// thread-safe (`Send + Sync`).
///
/// # Example
///
/// ```ignore
/// use locus_storage::{LocationStore, StoreError};
///
/// async fn fetch(store: &dyn LocationStore, id: &str) -> Result<Location, StoreError> {
///     store
///         .find_by_id(id)
///         .await?
///         .ok_or_else(|| StoreError::not_found(id))
/// }
/// ```
#[async_trait]
pub trait LocationStore: Send + Sync {
    /// Inserts a new location, direction sub-record included.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::AlreadyExists` if the identifier is taken.
    async fn insert(&self, location: Location) -> Result<(), StoreError>;

    /// Replaces an existing location in place. The identifier selects the
    /// target; every other field is overwritten, the direction sub-record
    /// included.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::NotFound` if no location has this identifier.
    async fn update(&self, location: Location) -> Result<(), StoreError>;

    /// Removes a location and, with it, its direction sub-record.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::NotFound` if no location has this identifier.
    async fn remove(&self, id: &str) -> Result<(), StoreError>;

    /// Looks up a single location by identifier.
    ///
    /// Returns `None` for a missing record; errors are reserved for
    /// infrastructure failures.
    async fn find_by_id(&self, id: &str) -> Result<Option<Location>, StoreError>;

    /// Reports whether a location with this identifier exists.
    async fn exists(&self, id: &str) -> Result<bool, StoreError>;

    /// Scans every location with its direction sub-record joined in,
    /// ordered by name ascending. This feeds cache refreshes.
    async fn scan_ordered(&self) -> Result<Vec<Location>, StoreError>;

    /// Returns the name of this storage backend for logging/debugging.
    fn backend_name(&self) -> &'static str;
}

#[cfg(test)]
mod tests {
    use super::*;

    // Compile-time test that LocationStore is object-safe
    fn _assert_store_object_safe(_: &dyn LocationStore) {}
}
