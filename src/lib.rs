// ============================================================================
// MEETING ROOM BOOKING - FRONTEND MVVM (PURE RUST)
// ============================================================================
// - Views: functions that build DOM, no logic
// - ViewModels: workflows over state
// - Services: HTTP, storage and navigation behind traits
// - State: reactive Rc<RefCell> state
// - Models: wire types shared with the backend
// ============================================================================

pub mod config;
pub mod error;
pub mod models;
pub mod services;
pub mod state;
pub mod viewmodels;
mod dom;
mod views;
mod app;

#[cfg(test)]
mod testing;

use std::cell::RefCell;
use wasm_bindgen::prelude::*;
use wasm_logger::Config;
use crate::app::App;
use crate::config::CONFIG;

thread_local! {
    static APP: RefCell<Option<App>> = RefCell::new(None);
}

#[wasm_bindgen(start)]
pub fn main() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();

    if CONFIG.is_logging_enabled() {
        let level = if CONFIG.is_production() { log::Level::Warn } else { log::Level::Info };
        wasm_logger::init(Config::new(level));
    }
    log::info!("🚀 Meeting Room Booking ({})", CONFIG.environment);

    let mut app = App::new()?;
    app.render()?;

    APP.with(|app_cell| {
        *app_cell.borrow_mut() = Some(app);
    });

    Ok(())
}

/// Full re-render of the mounted app
pub fn rerender_app() {
    APP.with(|app_cell| match app_cell.try_borrow_mut() {
        Ok(mut slot) => match slot.as_mut() {
            Some(app) => {
                if let Err(e) = app.render() {
                    log::error!("❌ [RERENDER] Render failed: {:?}", e);
                }
            }
            None => log::warn!("⚠️ [RERENDER] App is not initialized"),
        },
        // Already rendering; the pending state change is picked up by the next tick
        Err(_) => {
            gloo_timers::callback::Timeout::new(0, rerender_app).forget();
        }
    });
}
