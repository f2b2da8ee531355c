// ============================================================================
// APP VIEW - Page routing, header and the global toast
// ============================================================================

use wasm_bindgen::prelude::*;
use web_sys::Element;
use crate::app::Controllers;
use crate::config::CONFIG;
use crate::dom::{append_child, on_click, ElementBuilder};
use crate::state::AppState;
use crate::views::{render_login, render_rooms, render_toast};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Page {
    Login,
    Rooms,
}

impl Page {
    /// The login path always shows the form; anything else needs a current user
    pub fn resolve(path: &str, login_path: &str, authenticated: bool) -> Self {
        if path == login_path || !authenticated {
            Page::Login
        } else {
            Page::Rooms
        }
    }
}

pub fn render_app(page: Page, state: &AppState, controllers: &Controllers) -> Result<Element, JsValue> {
    let shell = ElementBuilder::new("div")?.class("app-shell").build();

    if let Some(profile) = state.profile.profile() {
        let logout = ElementBuilder::new("button")?
            .class("btn btn-sm btn-outline-light")
            .attr("type", "button")?
            .text("Logout")
            .build();
        let session = controllers.session.clone();
        on_click(&logout, move |_| {
            if let Err(e) = session.logout(&CONFIG.login_path) {
                log::error!("❌ [SESSION] Logout failed: {}", e);
            }
        });

        let header = ElementBuilder::new("nav")?
            .class("navbar navbar-dark bg-dark")
            .child(ElementBuilder::new("span")?.class("navbar-brand").text("Meeting Rooms").build())?
            .child(ElementBuilder::new("span")?.class("navbar-text").text(&profile.display_name()).build())?
            .child(logout)?
            .build();
        append_child(&shell, &header)?;
    }

    let content = match page {
        Page::Login => render_login(&state.login.borrow(), &controllers.login)?,
        Page::Rooms => render_rooms(&state.rooms.borrow(), &controllers.rooms)?,
    };
    append_child(&shell, &content)?;

    // Survives the hop from the login page to the rooms page
    if let Some(notification) = state.login.borrow().notification.clone() {
        let login = controllers.login.clone();
        let toast = render_toast(&notification, move || login.dismiss_notification())?;
        append_child(&shell, &toast)?;
    }

    Ok(shell)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn login_path_always_shows_the_form() {
        assert_eq!(Page::resolve("/login", "/login", true), Page::Login);
        assert_eq!(Page::resolve("/login", "/login", false), Page::Login);
    }

    #[test]
    fn other_paths_need_a_current_user() {
        assert_eq!(Page::resolve("/", "/login", true), Page::Rooms);
        assert_eq!(Page::resolve("/", "/login", false), Page::Login);
        assert_eq!(Page::resolve("/anything", "/login", false), Page::Login);
    }
}
