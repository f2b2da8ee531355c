use gloo_timers::callback::Timeout;
use wasm_bindgen::JsValue;
use crate::error::{AppError, AppResult};

/// History-level navigation the workflows are allowed to perform
pub trait Navigator {
    /// Replace the current history entry, so Back does not return here
    fn replace(&self, path: &str) -> AppResult<()>;
}

/// `history.replaceState`, then a full re-render on the next tick so the
/// listener that triggered it is not dropped while it runs
#[derive(Clone, Copy, Default)]
pub struct BrowserNavigator;

impl Navigator for BrowserNavigator {
    fn replace(&self, path: &str) -> AppResult<()> {
        let history = web_sys::window()
            .ok_or_else(|| AppError::Browser("No window available".to_string()))?
            .history()
            .map_err(|_| AppError::Browser("No history available".to_string()))?;
        history
            .replace_state_with_url(&JsValue::NULL, "", Some(path))
            .map_err(|e| AppError::Browser(format!("history.replaceState failed: {:?}", e)))?;
        log::info!("🧭 [NAV] Replaced location with {}", path);
        Timeout::new(0, crate::rerender_app).forget();
        Ok(())
    }
}

/// Current location path, `/` when unknown
pub fn current_path() -> String {
    web_sys::window()
        .and_then(|w| w.location().pathname().ok())
        .unwrap_or_else(|| "/".to_string())
}
