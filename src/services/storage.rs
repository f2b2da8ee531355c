use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;
use serde::{de::DeserializeOwned, Serialize};
use crate::error::{AppError, AppResult};

/// String key/value store; values are JSON documents
pub trait KeyValueStore {
    fn get_item(&self, key: &str) -> AppResult<Option<String>>;
    fn set_item(&self, key: &str, value: &str) -> AppResult<()>;
    fn remove_item(&self, key: &str) -> AppResult<()>;
}

/// `window.localStorage`, looked up once when the app starts
#[derive(Clone)]
pub struct BrowserStorage {
    storage: web_sys::Storage,
}

impl BrowserStorage {
    /// Fails when there is no window or the browser blocks localStorage
    pub fn open() -> AppResult<Self> {
        web_sys::window()
            .and_then(|w| w.local_storage().ok().flatten())
            .map(|storage| Self { storage })
            .ok_or_else(|| AppError::Storage("localStorage is not available".to_string()))
    }
}

impl KeyValueStore for BrowserStorage {
    fn get_item(&self, key: &str) -> AppResult<Option<String>> {
        self.storage
            .get_item(key)
            .map_err(|_| AppError::Storage(format!("Could not read '{}' from localStorage", key)))
    }

    fn set_item(&self, key: &str, value: &str) -> AppResult<()> {
        self.storage
            .set_item(key, value)
            .map_err(|_| AppError::Storage(format!("Could not write '{}' to localStorage", key)))
    }

    fn remove_item(&self, key: &str) -> AppResult<()> {
        self.storage
            .remove_item(key)
            .map_err(|_| AppError::Storage(format!("Could not remove '{}' from localStorage", key)))
    }
}

/// The opened store, or an in-memory one when opening failed.
/// With the in-memory store the session lasts until the page is closed.
pub fn or_memory<S>(opened: AppResult<S>) -> Rc<dyn KeyValueStore>
where
    S: KeyValueStore + 'static,
{
    match opened {
        Ok(store) => Rc::new(store),
        Err(e) => {
            log::warn!("⚠️ [STORAGE] {}, keeping the session in memory", e);
            Rc::new(MemoryStorage::new())
        }
    }
}

/// In-memory store: the fallback when localStorage is unavailable, and the test store
#[derive(Default)]
pub struct MemoryStorage {
    items: RefCell<HashMap<String, String>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.items.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.borrow().is_empty()
    }
}

impl KeyValueStore for MemoryStorage {
    fn get_item(&self, key: &str) -> AppResult<Option<String>> {
        Ok(self.items.borrow().get(key).cloned())
    }

    fn set_item(&self, key: &str, value: &str) -> AppResult<()> {
        self.items.borrow_mut().insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove_item(&self, key: &str) -> AppResult<()> {
        self.items.borrow_mut().remove(key);
        Ok(())
    }
}

pub fn save_json<T: Serialize>(store: &dyn KeyValueStore, key: &str, value: &T) -> AppResult<()> {
    let json = serde_json::to_string(value)?;
    store.set_item(key, &json)
}

/// `Ok(None)` when the key is absent; a corrupt value is an error
pub fn load_json<T: DeserializeOwned>(store: &dyn KeyValueStore, key: &str) -> AppResult<Option<T>> {
    match store.get_item(key)? {
        Some(json) => Ok(Some(serde_json::from_str(&json)?)),
        None => Ok(None),
    }
}
