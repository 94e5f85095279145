use async_trait::async_trait;
use dashmap::DashMap;
use std::sync::Arc;

use locus_core::Location;
use locus_storage::{LocationStore, StoreError};

/// In-memory location store backed by a concurrent map.
///
/// The direction sub-record is stored inline on the location, so the
/// "join" of the ordered scan is free here; relational backends load it
/// explicitly.
#[derive(Debug, Default, Clone)]
pub struct InMemoryStore {
    data: Arc<DashMap<String, Location>>,
}

impl InMemoryStore {
    /// Creates a new, empty in-memory store.
    pub fn new() -> Self {
        Self {
            data: Arc::new(DashMap::new()),
        }
    }

    /// Number of stored locations.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Returns `true` when the store holds no locations.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }
}

#[async_trait]
impl LocationStore for InMemoryStore {
    async fn insert(&self, location: Location) -> Result<(), StoreError> {
        if self.data.contains_key(&location.id) {
            return Err(StoreError::already_exists(&location.id));
        }
        self.data.insert(location.id.clone(), location);
        Ok(())
    }

    async fn update(&self, location: Location) -> Result<(), StoreError> {
        // No upsert: an update targeting a missing identifier is a store
        // failure, which the repository reports through its 500 path.
        let mut entry = self
            .data
            .get_mut(&location.id)
            .ok_or_else(|| StoreError::not_found(&location.id))?;
        *entry = location;
        Ok(())
    }

    async fn remove(&self, id: &str) -> Result<(), StoreError> {
        self.data
            .remove(id)
            .map(|_| ())
            .ok_or_else(|| StoreError::not_found(id))
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<Location>, StoreError> {
        Ok(self.data.get(id).map(|entry| entry.value().clone()))
    }

    async fn exists(&self, id: &str) -> Result<bool, StoreError> {
        Ok(self.data.contains_key(id))
    }

    async fn scan_ordered(&self) -> Result<Vec<Location>, StoreError> {
        let mut locations: Vec<Location> = self
            .data
            .iter()
            .map(|entry| entry.value().clone())
            .collect();
        locations.sort_by(|a, b| a.name.cmp(&b.name).then_with(|| a.id.cmp(&b.id)));
        Ok(locations)
    }

    fn backend_name(&self) -> &'static str {
        "memory"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use locus_core::{Direction, NewLocation};

    /// Helper to get the store as a trait object so the tests exercise the
    /// LocationStore contract, not inherent methods.
    fn as_store(store: &InMemoryStore) -> &dyn LocationStore {
        store
    }

    fn sample(name: &str) -> Location {
        Location::from_new(NewLocation {
            name: name.into(),
            street_address: "1 Test St".into(),
            postal_code: "00000".into(),
            city_name: "Testville".into(),
            map_id: "map-1".into(),
            car_direction: None,
            metro_direction: None,
            bus_direction: None,
        })
    }

    #[tokio::test]
    async fn insert_and_find_round_trip() {
        let store = InMemoryStore::new();
        let db = as_store(&store);

        let location = sample("Harbor Office");
        let id = location.id.clone();
        db.insert(location.clone()).await.unwrap();

        let found = db.find_by_id(&id).await.unwrap();
        assert_eq!(found, Some(location));
        assert!(db.exists(&id).await.unwrap());
        assert!(!db.exists("missing").await.unwrap());
    }

    #[tokio::test]
    async fn insert_rejects_duplicate_identifier() {
        let store = InMemoryStore::new();
        let db = as_store(&store);

        let location = sample("Harbor Office");
        db.insert(location.clone()).await.unwrap();
        let err = db.insert(location).await.unwrap_err();
        assert!(err.is_already_exists());
    }

    #[tokio::test]
    async fn update_replaces_the_record_in_place() {
        let store = InMemoryStore::new();
        let db = as_store(&store);

        let mut location = sample("Harbor Office");
        let id = location.id.clone();
        db.insert(location.clone()).await.unwrap();

        location.name = "Harbor Office East".into();
        location.direction = Some(Direction {
            car: Some("Exit 4 off the ring road".into()),
            ..Direction::default()
        });
        db.update(location.clone()).await.unwrap();

        let found = db.find_by_id(&id).await.unwrap().unwrap();
        assert_eq!(found.name, "Harbor Office East");
        assert!(found.direction.is_some());
    }

    #[tokio::test]
    async fn update_of_missing_identifier_is_not_found() {
        let store = InMemoryStore::new();
        let err = as_store(&store).update(sample("Ghost")).await.unwrap_err();
        assert!(err.is_not_found());
    }

    #[tokio::test]
    async fn remove_cascades_the_direction_with_the_location() {
        let store = InMemoryStore::new();
        let db = as_store(&store);

        let mut location = sample("Harbor Office");
        location.direction = Some(Direction {
            bus: Some("Line 55".into()),
            ..Direction::default()
        });
        let id = location.id.clone();
        db.insert(location).await.unwrap();

        db.remove(&id).await.unwrap();
        assert_eq!(db.find_by_id(&id).await.unwrap(), None);

        let err = db.remove(&id).await.unwrap_err();
        assert!(err.is_not_found());
    }

    #[tokio::test]
    async fn scan_is_ordered_by_name_ascending() {
        let store = InMemoryStore::new();
        let db = as_store(&store);

        for name in ["Zoo Gate", "Airport Desk", "Main Square"] {
            db.insert(sample(name)).await.unwrap();
        }

        let scanned = db.scan_ordered().await.unwrap();
        let names: Vec<&str> = scanned.iter().map(|l| l.name.as_str()).collect();
        assert_eq!(names, vec!["Airport Desk", "Main Square", "Zoo Gate"]);
    }
}
