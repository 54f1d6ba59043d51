//! In-memory measure store implementation

use super::measure::DryMeasure;
use std::sync::Arc;
use tokio::sync::Mutex;

/// Store shared between request handlers
///
/// A single lock serialises list, get, create and delete.
pub type SharedStore = Arc<Mutex<MeasureStore>>;

/// In-memory ordered collection of dry measures
///
/// Records keep their insertion order. Lookups are linear scans.
pub struct MeasureStore {
    /// The records, oldest first
    measures: Vec<DryMeasure>,
}

impl MeasureStore {
    /// Create a new empty store
    pub fn new() -> Self {
        Self::with_capacity(16)
    }

    /// Create a new empty store with specified initial capacity
    pub fn with_capacity(capacity: usize) -> Self {
        MeasureStore {
            measures: Vec::with_capacity(capacity),
        }
    }

    /// Create a store holding the two startup records (ids "0" and "1")
    pub fn seeded() -> Self {
        let mut store = Self::new();
        store.create(DryMeasure::new("0", 1, 1, 1, 5));
        store.create(DryMeasure::new("1", 1, 2, 2, 10));
        store
    }

    /// Wrap the store for use across handlers
    pub fn into_shared(self) -> SharedStore {
        Arc::new(Mutex::new(self))
    }

    /// All records in insertion order
    pub fn list(&self) -> &[DryMeasure] {
        &self.measures
    }

    /// First record whose id matches, None if there is none
    pub fn get(&self, id: &str) -> Option<&DryMeasure> {
        self.measures.iter().find(|measure| measure.id == id)
    }

    /// Append a record and return the stored copy
    ///
    /// The id is not checked for uniqueness.
    pub fn create(&mut self, measure: DryMeasure) -> &DryMeasure {
        self.measures.push(measure);
        &self.measures[self.measures.len() - 1]
    }

    /// Remove every record with the given id, returns how many were removed
    pub fn delete(&mut self, id: &str) -> usize {
        let before = self.measures.len();
        self.measures.retain(|measure| measure.id != id);
        before - self.measures.len()
    }

    /// Remove all records
    pub fn clear(&mut self) {
        self.measures.clear();
    }

    /// Get the number of records
    pub fn len(&self) -> usize {
        self.measures.len()
    }

    /// Check if the store is empty
    pub fn is_empty(&self) -> bool {
        self.measures.is_empty()
    }

    /// Calculate approximate memory usage of stored records in bytes
    pub fn memory_usage(&self) -> usize {
        self.measures.iter().map(DryMeasure::memory_usage).sum()
    }

    /// Get statistics about the store
    pub fn stats(&self) -> StoreStats {
        StoreStats {
            total_records: self.measures.len(),
            used_memory_bytes: self.memory_usage(),
        }
    }
}

impl Default for MeasureStore {
    fn default() -> Self {
        Self::new()
    }
}

/// Statistics about the measure store
#[derive(Debug, Clone)]
pub struct StoreStats {
    pub total_records: usize,
    pub used_memory_bytes: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(store: &MeasureStore) -> Vec<&str> {
        store.list().iter().map(|m| m.id.as_str()).collect()
    }

    #[test]
    fn test_seeded_list() {
        let store = MeasureStore::seeded();

        assert_eq!(
            store.list(),
            &[
                DryMeasure::new("0", 1, 1, 1, 5),
                DryMeasure::new("1", 1, 2, 2, 10),
            ]
        );
    }

    #[test]
    fn test_create_appends() {
        let mut store = MeasureStore::seeded();
        let created = store.create(DryMeasure::new("2", 2, 0, 0, 250)).clone();

        assert_eq!(created, DryMeasure::new("2", 2, 0, 0, 250));
        assert_eq!(store.list()[2], created);
        assert_eq!(ids(&store), vec!["0", "1", "2"]);
    }

    #[test]
    fn test_get() {
        let store = MeasureStore::seeded();

        assert_eq!(store.get("1").unwrap().grams, 10);
        assert!(store.get("42").is_none());
    }

    #[test]
    fn test_get_returns_first_duplicate() {
        let mut store = MeasureStore::new();
        store.create(DryMeasure::new("dup", 1, 0, 0, 0));
        store.create(DryMeasure::new("dup", 2, 0, 0, 0));

        assert_eq!(store.get("dup").unwrap().cups, 1);
    }

    #[test]
    fn test_delete() {
        let mut store = MeasureStore::seeded();

        assert_eq!(store.delete("0"), 1);
        assert_eq!(ids(&store), vec!["1"]);
    }

    #[test]
    fn test_delete_missing() {
        let mut store = MeasureStore::seeded();

        assert_eq!(store.delete("nope"), 0);
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn test_delete_removes_all_duplicates() {
        let mut store = MeasureStore::new();
        store.create(DryMeasure::new("a", 0, 0, 0, 1));
        store.create(DryMeasure::new("b", 0, 0, 0, 2));
        store.create(DryMeasure::new("a", 0, 0, 0, 3));
        store.create(DryMeasure::new("a", 0, 0, 0, 4));

        assert_eq!(store.delete("a"), 3);
        assert_eq!(ids(&store), vec!["b"]);
    }

    #[test]
    fn test_clear_and_stats() {
        let mut store = MeasureStore::seeded();
        let stats = store.stats();
        assert_eq!(stats.total_records, 2);
        assert!(stats.used_memory_bytes > 0);

        store.clear();
        assert!(store.is_empty());
        assert_eq!(store.stats().used_memory_bytes, 0);
    }

    #[test]
    fn test_concurrent_creates_keep_both() {
        tokio_test::block_on(async {
            let store = MeasureStore::seeded().into_shared();

            let first = {
                let store = store.clone();
                tokio::spawn(async move {
                    store.lock().await.create(DryMeasure::new("2", 1, 0, 0, 0));
                })
            };
            let second = {
                let store = store.clone();
                tokio::spawn(async move {
                    store.lock().await.create(DryMeasure::new("3", 0, 1, 0, 0));
                })
            };

            first.await.unwrap();
            second.await.unwrap();

            let store = store.lock().await;
            assert_eq!(store.len(), 4);
            assert!(store.get("2").is_some());
            assert!(store.get("3").is_some());
        });
    }
}
