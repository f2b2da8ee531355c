// ============================================================================
// APP STATE - Global application state
// ============================================================================

use crate::state::{LoginState, ProfileContext, ReactiveState, RoomPageState};

#[derive(Clone, Default)]
pub struct AppState {
    pub profile: ProfileContext,
    pub login: ReactiveState<LoginState>,
    pub rooms: ReactiveState<RoomPageState>,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register one callback on every piece of state
    pub fn subscribe_to_changes<F>(&self, callback: F)
    where
        F: Fn() + Clone + 'static,
    {
        self.profile.subscribe(callback.clone());
        self.login.subscribe(callback.clone());
        self.rooms.subscribe(callback);
    }
}
