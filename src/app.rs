// ============================================================================
// APP - Wires state, services and viewmodels; owns the #app root
// ============================================================================

use std::rc::Rc;
use gloo_timers::callback::Timeout;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use gloo_events::EventListener;
use web_sys::Element;
use crate::config::CONFIG;
use crate::dom::{append_child, get_element_by_id, set_inner_html, take_listeners};
use crate::services::navigation::current_path;
use crate::services::{ApiClient, BrowserNavigator, Navigator, SessionService};
use crate::state::{AppState, ProfileSink};
use crate::viewmodels::{LoginViewModel, RoomViewModel, SessionViewModel};
use crate::views::{render_app, Page};

/// The viewmodels views dispatch to
#[derive(Clone)]
pub struct Controllers {
    pub login: LoginViewModel,
    pub rooms: RoomViewModel,
    pub session: SessionViewModel,
}

pub struct App {
    state: AppState,
    controllers: Controllers,
    root: Element,
    /// Page currently in the DOM
    mounted: Option<Page>,
    /// Listeners of the elements currently in the DOM
    listeners: Vec<EventListener>,
}

impl App {
    pub fn new() -> Result<Self, JsValue> {
        let root = get_element_by_id("app")
            .ok_or_else(|| JsValue::from_str("No #app element found"))?;

        let state = AppState::new();
        let api = ApiClient::new();
        let sessions = SessionService::new();
        let navigator: Rc<dyn Navigator> = Rc::new(BrowserNavigator);
        let profile_sink: Rc<dyn ProfileSink> = Rc::new(state.profile.clone());

        let controllers = Controllers {
            login: LoginViewModel::new(
                api.clone(),
                sessions.clone(),
                profile_sink,
                navigator.clone(),
                state.login.clone(),
            ),
            rooms: RoomViewModel::new(api, state.rooms.clone()),
            session: SessionViewModel::new(sessions, state.profile.clone(), navigator),
        };

        if controllers.session.restore().is_some() {
            log::info!("✅ [APP] Session restored from storage");
        }

        state.subscribe_to_changes(|| {
            Timeout::new(0, crate::rerender_app).forget();
        });

        Ok(Self {
            state,
            controllers,
            root,
            mounted: None,
            listeners: Vec::new(),
        })
    }

    pub fn render(&mut self) -> Result<(), JsValue> {
        let page = Page::resolve(
            &current_path(),
            &CONFIG.login_path,
            self.state.profile.is_authenticated(),
        );

        if self.mounted != Some(page) {
            self.switch_page(page);
        }

        self.listeners.clear();
        set_inner_html(&self.root, "");
        let view = render_app(page, &self.state, &self.controllers);
        // Also collects what a half-built view registered before failing
        self.listeners = take_listeners();
        append_child(&self.root, &view?)?;
        Ok(())
    }

    fn switch_page(&mut self, page: Page) {
        log::info!("🧭 [APP] Mounting {:?} page", page);
        if self.mounted == Some(Page::Rooms) {
            self.controllers.rooms.unmount();
        }
        if page == Page::Rooms {
            let rooms = self.controllers.rooms.clone();
            spawn_local(async move {
                // Outcome is already in state; a cancelled load just goes away
                let _ = rooms.load_rooms().await;
            });
        }
        self.mounted = Some(page);
    }
}
