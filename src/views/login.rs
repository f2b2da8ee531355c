// ============================================================================
// LOGIN VIEW
// ============================================================================

use gloo_timers::callback::Timeout;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys::Element;
use crate::config::CONFIG;
use crate::dom::{append_child, on_input, on_submit, ElementBuilder};
use crate::error::AppError;
use crate::state::LoginState;
use crate::viewmodels::LoginViewModel;

pub fn render_login(state: &LoginState, vm: &LoginViewModel) -> Result<Element, JsValue> {
    let screen = ElementBuilder::new("div")?.class("container mt-4 login-screen").build();
    let title = ElementBuilder::new("h1")?.text("Login").build();
    let form = ElementBuilder::new("form")?
        .class("login-form")
        .attr("novalidate", "")?
        .build();

    let username_group = create_field(
        "username",
        "User Name",
        "text",
        &state.username,
        state.field_errors.username.as_deref(),
        state.submitting,
        {
            let vm = vm.clone();
            move |text| vm.input_username(text)
        },
    )?;
    let password_group = create_field(
        "password",
        "Password",
        "password",
        &state.password,
        state.field_errors.password.as_deref(),
        state.submitting,
        {
            let vm = vm.clone();
            move |text| vm.input_password(text)
        },
    )?;

    let submit_btn = ElementBuilder::new("button")?
        .attr("type", "submit")?
        .class("btn btn-primary")
        .text(if state.submitting { "Signing in..." } else { "Login" })
        .flag("disabled", state.submitting)?
        .build();

    {
        let vm = vm.clone();
        on_submit(&form, move || {
            let vm = vm.clone();
            spawn_local(async move {
                let outcome = vm.submit().await;
                // Validation errors stay on the form; toasts go away on their own
                if !matches!(outcome, Err(AppError::Validation(_))) {
                    let vm = vm.clone();
                    Timeout::new(CONFIG.toast_timeout_ms, move || vm.dismiss_notification()).forget();
                }
            });
        });
    }

    append_child(&form, &username_group)?;
    append_child(&form, &password_group)?;
    append_child(&form, &submit_btn)?;
    append_child(&screen, &title)?;
    append_child(&screen, &form)?;

    Ok(screen)
}

fn create_field<F>(
    id: &str,
    label_text: &str,
    input_type: &str,
    value: &str,
    error: Option<&str>,
    disabled: bool,
    on_text: F,
) -> Result<Element, JsValue>
where
    F: FnMut(String) + 'static,
{
    let group = ElementBuilder::new("div")?.class("form-group").build();
    let label = ElementBuilder::new("label")?
        .attr("for", id)?
        .text(label_text)
        .build();

    let input_class = if error.is_some() { "form-control is-invalid" } else { "form-control" };
    let input = ElementBuilder::new("input")?
        .class(input_class)
        .id(id)?
        .attr("name", id)?
        .attr("type", input_type)?
        .attr("value", value)?
        .flag("disabled", disabled)?
        .build();
    on_input(&input, on_text);

    append_child(&group, &label)?;
    append_child(&group, &input)?;
    if let Some(message) = error {
        let feedback = ElementBuilder::new("div")?
            .class("invalid-feedback")
            .text(message)
            .build();
        append_child(&group, &feedback)?;
    }
    Ok(group)
}
