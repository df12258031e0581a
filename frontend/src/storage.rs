use web_sys::{window, Storage};

pub trait KeyValueStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str);
}

/// `window.localStorage`. Missing or blocked storage reads as empty.
#[derive(Clone, Default)]
pub struct BrowserStorage;

impl BrowserStorage {
    fn storage() -> Option<Storage> {
        window().and_then(|w| w.local_storage().ok()).flatten()
    }
}

impl KeyValueStore for BrowserStorage {
    fn get(&self, key: &str) -> Option<String> {
        Self::storage().and_then(|storage| storage.get_item(key).ok()).flatten()
    }

    fn set(&self, key: &str, value: &str) {
        match Self::storage() {
            Some(storage) => {
                if let Err(e) = storage.set_item(key, value) {
                    log::warn!("Failed to persist {}: {:?}", key, e);
                }
            }
            None => log::warn!("localStorage unavailable, {} not persisted", key),
        }
    }
}

/// A boolean that survives reloads, e.g. "the hero video was played".
pub struct PlayedFlag<S: KeyValueStore> {
    store: S,
    key: &'static str,
}

impl<S: KeyValueStore> PlayedFlag<S> {
    pub fn new(store: S, key: &'static str) -> Self {
        Self { store, key }
    }

    pub fn is_set(&self) -> bool {
        self.store.get(self.key).is_some()
    }

    /// Writes the flag the first time only. Returns whether it wrote.
    pub fn record(&self) -> bool {
        if self.is_set() {
            return false;
        }
        self.store.set(self.key, "true");
        true
    }
}

pub fn hero_video_flag() -> PlayedFlag<BrowserStorage> {
    PlayedFlag::new(BrowserStorage, crate::config::HERO_VIDEO_PLAYED_KEY)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::collections::HashMap;

    #[derive(Default)]
    struct MemoryStore {
        values: RefCell<HashMap<String, String>>,
        writes: RefCell<u32>,
    }

    impl KeyValueStore for &MemoryStore {
        fn get(&self, key: &str) -> Option<String> {
            self.values.borrow().get(key).cloned()
        }

        fn set(&self, key: &str, value: &str) {
            *self.writes.borrow_mut() += 1;
            self.values.borrow_mut().insert(key.to_string(), value.to_string());
        }
    }

    #[test]
    fn records_only_the_first_play() {
        let store = MemoryStore::default();
        let flag = PlayedFlag::new(&store, "hero-video-played");
        assert!(!flag.is_set());

        assert!(flag.record());
        assert!(!flag.record());
        assert!(flag.is_set());
        assert_eq!(*store.writes.borrow(), 1);
        assert_eq!(
            store.values.borrow().get("hero-video-played").map(String::as_str),
            Some("true")
        );
    }

    #[test]
    fn existing_value_from_previous_session_counts() {
        let store = MemoryStore::default();
        store.values.borrow_mut().insert("hero-video-played".to_string(), "true".to_string());
        let flag = PlayedFlag::new(&store, "hero-video-played");
        assert!(flag.is_set());
        assert!(!flag.record());
        assert_eq!(*store.writes.borrow(), 0);
    }
}
