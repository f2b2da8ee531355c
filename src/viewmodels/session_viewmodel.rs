// ============================================================================
// SESSION VIEWMODEL - restore at start-up, logout
// ============================================================================

use std::rc::Rc;
use crate::error::AppResult;
use crate::models::Session;
use crate::services::{Navigator, SessionService};
use crate::state::{ProfileContext, ProfileSink};

#[derive(Clone)]
pub struct SessionViewModel {
    sessions: SessionService,
    profile: ProfileContext,
    navigator: Rc<dyn Navigator>,
}

impl SessionViewModel {
    pub fn new(sessions: SessionService, profile: ProfileContext, navigator: Rc<dyn Navigator>) -> Self {
        Self {
            sessions,
            profile,
            navigator,
        }
    }

    /// Seed the profile context from storage. A missing or unreadable pair means logged out.
    pub fn restore(&self) -> Option<Session> {
        match self.sessions.load() {
            Ok(Some((session, profile))) => {
                log::info!("💾 [SESSION] Session found in storage, restoring...");
                self.profile.set_profile(profile);
                Some(session)
            }
            Ok(None) => {
                log::info!("ℹ️ [SESSION] No stored session");
                None
            }
            Err(e) => {
                log::warn!("⚠️ [SESSION] Stored session unreadable, ignoring it: {}", e);
                None
            }
        }
    }

    /// Forget the pair together, clear the current user, go to the login page
    pub fn logout(&self, login_path: &str) -> AppResult<()> {
        log::info!("👋 [SESSION] Logout");
        self.sessions.clear()?;
        self.profile.clear();
        self.navigator.replace(login_path)
    }
}
