//! Process-wide property store

use std::sync::Arc;

use once_cell::sync::Lazy;

use super::memory::MemoryPropertyStore;
use super::traits::PropertyStore;

static PROCESS_PROPERTIES: Lazy<Arc<MemoryPropertyStore>> =
    Lazy::new(|| Arc::new(MemoryPropertyStore::new()));

/// The process-wide property store
///
/// Every call returns a handle on the same store. The TLS layer reads the
/// seeded passwords from here.
pub fn process_properties() -> Arc<dyn PropertyStore> {
    PROCESS_PROPERTIES.clone()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_process_properties_is_shared() {
        let a = process_properties();
        let b = process_properties();

        a.set("credseed.test.shared", "yes");
        assert_eq!(b.get("credseed.test.shared"), Some("yes".to_string()));

        b.remove("credseed.test.shared");
        assert!(!a.has("credseed.test.shared"));
    }
}
