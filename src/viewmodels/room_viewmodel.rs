// ============================================================================
// ROOM VIEWMODEL - list load (cancellable), create, update
// ============================================================================
// Mutations touch the in-memory list only after the server confirmed them.
// Updates are applied by room id, never by a row index captured earlier.
// ============================================================================

use std::cell::RefCell;
use std::rc::Rc;
use futures::future::{AbortHandle, Abortable};
use crate::error::{AppError, AppResult};
use crate::models::{Room, RoomDraft, RoomId};
use crate::services::ApiClient;
use crate::state::{ReactiveState, RoomFilter, RoomListState, RoomPageState, RowMode};

#[derive(Clone)]
pub struct RoomViewModel {
    api: ApiClient,
    state: ReactiveState<RoomPageState>,
    /// The single outstanding list load of this page visit
    in_flight: Rc<RefCell<Option<AbortHandle>>>,
}

impl RoomViewModel {
    pub fn new(api: ApiClient, state: ReactiveState<RoomPageState>) -> Self {
        Self {
            api,
            state,
            in_flight: Rc::new(RefCell::new(None)),
        }
    }

    pub fn state(&self) -> &ReactiveState<RoomPageState> {
        &self.state
    }

    /// Fetch all rooms: `Loading -> Ready | Error`.
    ///
    /// Resolves to `AppError::Cancelled` without touching state when
    /// [`unmount`](Self::unmount) ran first.
    pub async fn load_rooms(&self) -> AppResult<Vec<Room>> {
        let (handle, registration) = AbortHandle::new_pair();
        if let Some(previous) = self.in_flight.borrow_mut().replace(handle) {
            previous.abort();
        }

        let filter = self.state.borrow().filter.clone();
        self.state.set(RoomPageState {
            filter,
            ..RoomPageState::default()
        });
        log::info!("🏢 [ROOMS] Loading rooms...");

        let api = self.api.clone();
        let outcome = Abortable::new(async move { api.list_rooms().await }, registration).await;

        let result = match outcome {
            Err(_aborted) => {
                log::info!("🚫 [ROOMS] Room load cancelled, result discarded");
                return Err(AppError::Cancelled);
            }
            Ok(result) => result,
        };
        self.in_flight.borrow_mut().take();

        match result {
            Ok(rooms) => {
                log::info!("✅ [ROOMS] {} rooms loaded", rooms.len());
                self.state.update(|s| s.list = RoomListState::Ready(rooms.clone()));
                Ok(rooms)
            }
            Err(e) => {
                match &e {
                    AppError::Server { status, message } => {
                        log::error!("❌ [ROOMS] Server answered {}: {}", status, message)
                    }
                    AppError::Network(inner) => {
                        log::error!("❌ [ROOMS] Load failed ({}): {}", e.cause(), inner)
                    }
                    other => log::error!("❌ [ROOMS] Load failed: {}", other),
                }
                self.state.update(|s| s.list = RoomListState::Error(e.user_message()));
                Err(e)
            }
        }
    }

    /// Page teardown: cancel the outstanding load, if any
    pub fn unmount(&self) {
        if let Some(handle) = self.in_flight.borrow_mut().take() {
            log::info!("👋 [ROOMS] Page closed with a load in flight, cancelling");
            handle.abort();
        }
    }

    /// Create a room and append it at the end of the list.
    ///
    /// The server's echo is appended when it carries an id, the draft otherwise.
    /// The adding mode is always left, success or failure.
    pub async fn create_room(&self, draft: RoomDraft) -> AppResult<()> {
        self.state.update(|s| {
            s.row_mode = RowMode::Adding;
            s.saving = true;
        });

        match self.api.create_room(&draft).await {
            Ok(stored) => {
                let room = stored.unwrap_or_else(|| Room::from_draft(&draft));
                self.state.update(|s| {
                    s.list.append(room);
                    s.row_mode = RowMode::Idle;
                    s.saving = false;
                    s.mutation_error = None;
                });
                log::info!("✅ [ROOMS] Room created: {}", draft.name);
                Ok(())
            }
            Err(e) => {
                log::error!("❌ [ROOMS] Create failed ({}): {}", e.cause(), e);
                self.record_failure(&e);
                Err(e)
            }
        }
    }

    /// Send `new_data` for the room `old_data` and, once confirmed, replace
    /// that room wherever it sits in the list now.
    pub async fn update_room(&self, new_data: Room, old_data: &Room) -> AppResult<()> {
        let id = old_data.id.clone().ok_or(AppError::UnsavedRoom)?;
        // Identifiers are immutable
        let room = Room {
            id: Some(id.clone()),
            ..new_data
        };

        self.state.update(|s| {
            s.row_mode = RowMode::Editing(id.clone());
            s.saving = true;
        });

        match self.api.update_room(&id, &room).await {
            Ok(()) => {
                self.state.update(|s| {
                    if !s.list.replace(&id, room) {
                        log::warn!("⚠️ [ROOMS] Room {} no longer in the list, nothing replaced", id);
                    }
                    s.row_mode = RowMode::Idle;
                    s.saving = false;
                    s.mutation_error = None;
                });
                log::info!("✅ [ROOMS] Room updated: {}", id);
                Ok(())
            }
            Err(e) => {
                log::error!("❌ [ROOMS] Update of {} failed ({}): {}", id, e.cause(), e);
                self.record_failure(&e);
                Err(e)
            }
        }
    }

    /// Open the add row
    pub fn begin_add(&self) {
        self.state.update(|s| s.row_mode = RowMode::Adding);
    }

    /// Open `id` for editing; ignored while a save is in flight
    pub fn begin_edit(&self, id: RoomId) {
        self.state.update(|s| {
            if !s.saving {
                s.row_mode = RowMode::Editing(id);
            }
        });
    }

    pub fn cancel_edit(&self) {
        self.state.update(|s| {
            if !s.saving {
                s.row_mode = RowMode::Idle;
            }
        });
    }

    pub fn set_filter(&self, filter: RoomFilter) {
        self.state.update(|s| s.filter = filter);
    }

    pub fn dismiss_error(&self) {
        self.state.update(|s| s.mutation_error = None);
    }

    fn record_failure(&self, error: &AppError) {
        self.state.update(|s| {
            s.mutation_error = Some(error.user_message());
            s.row_mode = RowMode::Idle;
            s.saving = false;
        });
    }
}
