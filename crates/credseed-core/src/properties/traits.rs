//! Property store trait

/// Process-wide configuration store abstraction
///
/// A mutable `name -> value` map shared with the rest of the process. The
/// seeder only reads and conditionally writes its four target keys; the
/// store's lifecycle belongs to the caller.
///
/// Implementations:
/// - `MemoryPropertyStore`: in-memory map, also backs `process_properties()`
/// - Custom implementations (host runtime settings, JVM bridge, etc.)
pub trait PropertyStore: Send + Sync {
    /// Human-readable name of this store
    fn name(&self) -> &str;

    /// Current raw value of a property
    fn get(&self, key: &str) -> Option<String>;

    /// Set a property, replacing any existing value
    fn set(&self, key: &str, value: &str);

    /// Remove a property
    fn remove(&self, key: &str);

    /// Check if a property is present
    ///
    /// An empty value counts as absent.
    fn has(&self, key: &str) -> bool {
        self.get(key).is_some_and(|v| !v.is_empty())
    }

    /// Get a property, treating an empty value as absent
    fn get_non_empty(&self, key: &str) -> Option<String> {
        self.get(key).filter(|v| !v.is_empty())
    }
}
