//! Persistence of raw values between sessions.

use std::collections::HashMap;

/// Backing store for persisted raw values, keyed by
/// [`InputId::storage_key`](crate::InputId::storage_key).
///
/// Sessions only touch storage at attach (load), blur (save) and detach
/// (clear); implementations need not be fast.
pub trait ValueStorage {
    fn load(&self, key: &str) -> Option<String>;
    fn save(&mut self, key: &str, value: &str);
    fn clear(&mut self, key: &str);
}

/// In-memory storage, for tests and hosts without a persistent store.
#[derive(Clone, Debug, Default)]
pub struct MemoryStorage {
    values: HashMap<String, String>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

impl ValueStorage for MemoryStorage {
    fn load(&self, key: &str) -> Option<String> {
        self.values.get(key).cloned()
    }

    fn save(&mut self, key: &str, value: &str) {
        self.values.insert(key.to_string(), value.to_string());
    }

    fn clear(&mut self, key: &str) {
        self.values.remove(key);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn save_load_clear() {
        let mut storage = MemoryStorage::new();
        assert_eq!(storage.load("numfield:1"), None);
        storage.save("numfield:1", "12.5");
        storage.save("numfield:1", "13");
        assert_eq!(storage.load("numfield:1").as_deref(), Some("13"));
        assert_eq!(storage.len(), 1);
        storage.clear("numfield:1");
        assert!(storage.is_empty());
    }
}
