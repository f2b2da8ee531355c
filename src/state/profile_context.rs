// ============================================================================
// PROFILE CONTEXT - "Current user" shared across pages
// ============================================================================

use crate::models::Profile;
use crate::state::reactivity::ReactiveState;

/// Write side handed to the login workflow: it may only publish a profile
pub trait ProfileSink {
    fn set_profile(&self, profile: Profile);
}

#[derive(Clone, Default)]
pub struct ProfileContext {
    profile: ReactiveState<Option<Profile>>,
}

impl ProfileContext {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn profile(&self) -> Option<Profile> {
        self.profile.get()
    }

    pub fn is_authenticated(&self) -> bool {
        self.profile.borrow().is_some()
    }

    pub fn clear(&self) {
        self.profile.set(None);
    }

    pub fn subscribe<F>(&self, callback: F)
    where
        F: Fn() + 'static,
    {
        self.profile.subscribe(callback);
    }
}

impl ProfileSink for ProfileContext {
    fn set_profile(&self, profile: Profile) {
        log::info!("👤 [PROFILE] Current user: {}", profile.display_name());
        self.profile.set(Some(profile));
    }
}
