//! In-memory property store

use std::collections::HashMap;

use parking_lot::RwLock;

use super::traits::PropertyStore;

/// In-memory property store
///
/// Backs the process-wide store and gives tests an isolated store to
/// seed into.
///
/// # Example
///
/// ```
/// use credseed_core::properties::{PropertyStore, MemoryPropertyStore};
///
/// let store = MemoryPropertyStore::new();
/// store.set("javax.net.ssl.keyStorePassword", "secret");
/// assert!(store.has("javax.net.ssl.keyStorePassword"));
/// ```
#[derive(Debug, Default)]
pub struct MemoryPropertyStore {
    properties: RwLock<HashMap<String, String>>,
}

impl MemoryPropertyStore {
    /// Create a new empty store
    pub fn new() -> Self {
        Self {
            properties: RwLock::new(HashMap::new()),
        }
    }

    /// Create a store with initial properties
    pub fn with_properties(initial: HashMap<String, String>) -> Self {
        Self {
            properties: RwLock::new(initial),
        }
    }

    /// Remove every property
    pub fn clear(&self) {
        self.properties.write().clear();
    }

    pub fn len(&self) -> usize {
        self.properties.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Copy of the current contents
    pub fn snapshot(&self) -> HashMap<String, String> {
        self.properties.read().clone()
    }
}

impl PropertyStore for MemoryPropertyStore {
    fn name(&self) -> &str {
        "memory"
    }

    fn get(&self, key: &str) -> Option<String> {
        self.properties.read().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) {
        self.properties
            .write()
            .insert(key.to_string(), value.to_string());
    }

    fn remove(&self, key: &str) {
        self.properties.write().remove(key);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_store_crud() {
        let store = MemoryPropertyStore::new();
        assert!(store.is_empty());
        assert_eq!(store.get("a"), None);

        store.set("a", "1");
        assert_eq!(store.get("a"), Some("1".to_string()));
        assert!(store.has("a"));

        store.set("a", "2");
        assert_eq!(store.get("a"), Some("2".to_string()));
        assert_eq!(store.len(), 1);

        store.remove("a");
        assert!(!store.has("a"));
        assert!(store.is_empty());
    }

    #[test]
    fn test_empty_value_is_absent() {
        let store = MemoryPropertyStore::new();
        store.set("a", "");
        assert_eq!(store.get("a"), Some(String::new()));
        assert!(!store.has("a"));
        assert_eq!(store.get_non_empty("a"), None);
    }

    #[test]
    fn test_with_properties_and_clear() {
        let mut initial = HashMap::new();
        initial.insert("k1".to_string(), "v1".to_string());
        initial.insert("k2".to_string(), "v2".to_string());

        let store = MemoryPropertyStore::with_properties(initial);
        assert_eq!(store.len(), 2);
        assert_eq!(store.snapshot().get("k2"), Some(&"v2".to_string()));

        store.clear();
        assert!(store.is_empty());
    }

    #[test]
    fn test_memory_store_thread_safety() {
        use std::sync::Arc;
        use std::thread;

        let store = Arc::new(MemoryPropertyStore::new());
        let handles: Vec<_> = (0..8)
            .map(|i| {
                let store = Arc::clone(&store);
                thread::spawn(move || {
                    let key = format!("key_{}", i);
                    store.set(&key, "v");
                    assert!(store.has(&key));
                })
            })
            .collect();

        for handle in handles {
            handle.join().unwrap();
        }
        assert_eq!(store.len(), 8);
    }
}
