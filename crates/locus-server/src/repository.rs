//! The location repository: read-through-cache / write-invalidate-cache
//! semantics over an injected [`LocationStore`].
//!
//! Every operation returns a [`DataResponse`] envelope; transport adapters
//! forward its status code verbatim. Reads ask the cache first and fall
//! back to one ordered store scan that repopulates it. Writes go straight
//! to the store and, on success, discard the snapshot wholesale by
//! reloading it, so the very next read observes the new state regardless
//! of the TTL.
//!
//! [`LocationStore`]: locus_storage::LocationStore

use std::sync::Arc;

use locus_core::{DataResponse, Location, LocationUpdate, LocationView, NewLocation};
use locus_storage::{DynStore, StoreError};

use crate::cache::LocationCache;

/// Mediates between the store and the cache; from the caller's
/// perspective, the single source of truth for their consistency.
pub struct LocationRepository {
    store: DynStore,
    cache: LocationCache,
}

impl LocationRepository {
    /// Creates a repository over the given store and cache. Both are
    /// injected so tests can substitute fakes.
    pub fn new(store: DynStore, cache: LocationCache) -> Self {
        Self { store, cache }
    }

    /// Returns every location, ordered by name ascending.
    ///
    /// Served from the cache when the snapshot is live; a miss triggers
    /// one ordered store scan that repopulates it.
    pub async fn get_all(&self) -> DataResponse<Vec<LocationView>> {
        if let Some(cached) = self.cache.get_all() {
            return DataResponse::ok(cached.as_ref().clone());
        }
        match self.refresh_cache().await {
            Ok(views) => DataResponse::ok(views.as_ref().clone()),
            Err(err) => {
                tracing::warn!(error = %err, "store scan failed during get_all");
                DataResponse::server_error(err.to_string())
            }
        }
    }

    /// Returns a single location by identifier.
    ///
    /// A cache miss triggers exactly one full refresh before the lookup
    /// is retried; a full-collection reload is traded for the simpler
    /// single-snapshot coherency model over a point store fetch.
    pub async fn get_by_id(&self, id: &str) -> DataResponse<LocationView> {
        if let Some(view) = self.cache.get_by_id(id) {
            return DataResponse::ok(view);
        }
        if let Err(err) = self.refresh_cache().await {
            tracing::warn!(error = %err, "store scan failed during get_by_id");
            return DataResponse::server_error(err.to_string());
        }
        match self.cache.get_by_id(id) {
            Some(view) => DataResponse::ok(view),
            None => DataResponse::not_found(),
        }
    }

    /// Reports whether a location exists, straight from the store.
    ///
    /// Bypasses the cache on purpose: existence answers must track the
    /// store even while a stale snapshot still lists the record.
    pub async fn exists(&self, id: &str) -> DataResponse<()> {
        match self.store.exists(id).await {
            Ok(true) => DataResponse::success(200),
            Ok(false) => DataResponse::not_found(),
            Err(err) => {
                tracing::warn!(error = %err, "store existence check failed");
                DataResponse::server_error(err.to_string())
            }
        }
    }

    /// Creates a location with a freshly generated identifier.
    ///
    /// Returns 201 with the created view so the caller observes the
    /// generated identifier; invalid input is the 400 path and any
    /// persistence failure is reported once as a 500, never retried.
    pub async fn add(&self, input: NewLocation) -> DataResponse<LocationView> {
        if let Err(err) = input.validate() {
            return DataResponse::bad_request().with_message(err.to_string());
        }
        let location = Location::from_new(input);
        let view = LocationView::from_location(&location);
        if let Err(err) = self.store.insert(location).await {
            tracing::warn!(error = %err, "insert failed");
            return DataResponse::server_error(err.to_string());
        }
        match self.refresh_cache().await {
            Ok(_) => DataResponse::created(view),
            Err(err) => {
                tracing::warn!(error = %err, "cache reload failed after insert");
                DataResponse::server_error(err.to_string())
            }
        }
    }

    /// Replaces an existing location in place.
    ///
    /// No existence check precedes the write; a store-level miss surfaces
    /// as a persistence failure (500), the store-defined behavior.
    pub async fn update(&self, input: LocationUpdate) -> DataResponse<()> {
        if let Err(err) = input.validate() {
            return DataResponse::bad_request().with_message(err.to_string());
        }
        let location = Location::from_update(input);
        if let Err(err) = self.store.update(location).await {
            tracing::warn!(error = %err, "update failed");
            return DataResponse::server_error(err.to_string());
        }
        match self.refresh_cache().await {
            Ok(_) => DataResponse::success(200),
            Err(err) => {
                tracing::warn!(error = %err, "cache reload failed after update");
                DataResponse::server_error(err.to_string())
            }
        }
    }

    /// Removes a location and its direction sub-record.
    ///
    /// A missing target is reported as 400, not 404. Inherited contract,
    /// kept deliberately; see DESIGN.md before changing it.
    pub async fn delete(&self, id: &str) -> DataResponse<()> {
        match self.store.find_by_id(id).await {
            Ok(Some(_)) => {}
            Ok(None) => return DataResponse::bad_request(),
            Err(err) => {
                tracing::warn!(error = %err, "store lookup failed during delete");
                return DataResponse::server_error(err.to_string());
            }
        }
        if let Err(err) = self.store.remove(id).await {
            tracing::warn!(error = %err, "remove failed");
            return DataResponse::server_error(err.to_string());
        }
        match self.refresh_cache().await {
            Ok(_) => DataResponse::success(200),
            Err(err) => {
                tracing::warn!(error = %err, "cache reload failed after remove");
                DataResponse::server_error(err.to_string())
            }
        }
    }

    /// Scans the store (directions joined, ordered by name) and replaces
    /// the cache snapshot with the result.
    async fn refresh_cache(&self) -> Result<Arc<Vec<LocationView>>, StoreError> {
        let locations = self.store.scan_ordered().await?;
        let views = locations.iter().map(LocationView::from_location).collect();
        Ok(self.cache.set(views))
    }
}
