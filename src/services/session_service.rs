// ============================================================================
// SESSION SERVICE - token/profile pair in durable client storage
// ============================================================================

use std::rc::Rc;
use crate::error::AppResult;
use crate::models::{Profile, Session};
use crate::services::storage::{load_json, or_memory, save_json, BrowserStorage, KeyValueStore};

pub const TOKEN_STORAGE_KEY: &str = "token";
pub const PROFILE_STORAGE_KEY: &str = "profile";

#[derive(Clone)]
pub struct SessionService {
    store: Rc<dyn KeyValueStore>,
}

impl SessionService {
    /// localStorage when the browser allows it, memory otherwise
    pub fn new() -> Self {
        Self::with_store(or_memory(BrowserStorage::open()))
    }

    pub fn with_store(store: Rc<dyn KeyValueStore>) -> Self {
        Self { store }
    }

    pub fn save_session(&self, session: &Session) -> AppResult<()> {
        save_json(self.store.as_ref(), TOKEN_STORAGE_KEY, session)?;
        log::info!("💾 [STORAGE] Session saved");
        Ok(())
    }

    pub fn save_profile(&self, profile: &Profile) -> AppResult<()> {
        save_json(self.store.as_ref(), PROFILE_STORAGE_KEY, profile)?;
        log::info!("💾 [STORAGE] Profile saved");
        Ok(())
    }

    /// Both halves of the pair, or nothing.
    ///
    /// A half-written pair (profile fetch failed after login) reads as logged out.
    pub fn load(&self) -> AppResult<Option<(Session, Profile)>> {
        let session = load_json::<Session>(self.store.as_ref(), TOKEN_STORAGE_KEY)?;
        let profile = load_json::<Profile>(self.store.as_ref(), PROFILE_STORAGE_KEY)?;
        Ok(session.zip(profile))
    }

    pub fn clear(&self) -> AppResult<()> {
        self.store.remove_item(TOKEN_STORAGE_KEY)?;
        self.store.remove_item(PROFILE_STORAGE_KEY)?;
        log::info!("🗑️ [STORAGE] Session cleared");
        Ok(())
    }
}

impl Default for SessionService {
    fn default() -> Self {
        Self::new()
    }
}
