//! Single-snapshot location cache with a fixed time-to-live.
//!
//! Holds exactly one "all locations" snapshot at a time, ordered by name.
//! The snapshot is replaced wholesale on every [`LocationCache::set`];
//! there is no per-item invalidation path. Expiry is checked lazily on
//! read, never swept.

use std::sync::Arc;
use std::time::{Duration, Instant};

use arc_swap::ArcSwapOption;

use locus_core::LocationView;

/// Default snapshot time-to-live: 30 minutes.
pub const DEFAULT_TTL: Duration = Duration::from_secs(30 * 60);

/// One full-collection snapshot stamped with its expiry window.
#[derive(Debug)]
struct Snapshot {
    locations: Arc<Vec<LocationView>>,
    cached_at: Instant,
    ttl: Duration,
}

impl Snapshot {
    fn is_expired(&self) -> bool {
        self.cached_at.elapsed() > self.ttl
    }
}

/// Read cache for the full location collection.
///
/// The snapshot pointer is swapped atomically, so concurrent readers
/// always observe either the old or the new snapshot in full, never a
/// partially written one. Writers racing to refresh interleave with the
/// last `set` winning; the store stays authoritative.
#[derive(Debug)]
pub struct LocationCache {
    snapshot: ArcSwapOption<Snapshot>,
    ttl: Duration,
}

impl LocationCache {
    /// Creates a cache with the default 30-minute TTL.
    pub fn new() -> Self {
        Self::with_ttl(DEFAULT_TTL)
    }

    /// Creates a cache with the given TTL.
    pub fn with_ttl(ttl: Duration) -> Self {
        Self {
            snapshot: ArcSwapOption::const_empty(),
            ttl,
        }
    }

    /// Returns the live snapshot, or `None` on a miss (no snapshot yet,
    /// or the current one has outlived its TTL).
    pub fn get_all(&self) -> Option<Arc<Vec<LocationView>>> {
        let guard = self.snapshot.load();
        let snapshot = guard.as_ref()?;
        if snapshot.is_expired() {
            return None;
        }
        Some(Arc::clone(&snapshot.locations))
    }

    /// Searches the current snapshot for one location.
    ///
    /// `None` is a cache-level miss, not a store-level "not found":
    /// callers must refresh before concluding the location does not exist.
    pub fn get_by_id(&self, id: &str) -> Option<LocationView> {
        self.get_all()?.iter().find(|view| view.id == id).cloned()
    }

    /// Replaces any existing snapshot wholesale, stamped with a fresh
    /// expiry, and returns the stored sequence.
    pub fn set(&self, locations: Vec<LocationView>) -> Arc<Vec<LocationView>> {
        let locations = Arc::new(locations);
        self.snapshot.store(Some(Arc::new(Snapshot {
            locations: Arc::clone(&locations),
            cached_at: Instant::now(),
            ttl: self.ttl,
        })));
        locations
    }
}

impl Default for LocationCache {
    fn default() -> Self {
        Self::new()
    }
}
