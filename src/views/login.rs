// ============================================================================
// LOGIN VIEW - Formulario de login / botón de logout
// ============================================================================

use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys::Element;

use crate::dom::{on_click, on_input_value, on_submit, ElementBuilder};
use crate::services::HttpClient;
use crate::viewmodels::ConsoleViewModel;
use crate::views::screen::{LOG_IN_LABEL, LOG_OUT_LABEL, PASSWORD_PLACEHOLDER, USERNAME_PLACEHOLDER};

/// Renderizar formulario con los valores actuales del estado
pub fn render_login_form<C: HttpClient + 'static>(
    vm: &ConsoleViewModel<C>,
    username: &str,
    password: &str,
) -> Result<Element, JsValue> {
    let username_input = ElementBuilder::new("input")?
        .class("form-input")
        .attr("type", "text")?
        .attr("name", "username")?
        .attr("placeholder", USERNAME_PLACEHOLDER)?
        .attr("value", username)?
        .build();
    {
        let vm = vm.clone();
        on_input_value(&username_input, move |value| vm.set_username(value))?;
    }

    let password_input = ElementBuilder::new("input")?
        .class("form-input")
        .attr("type", "password")?
        .attr("name", "password")?
        .attr("placeholder", PASSWORD_PLACEHOLDER)?
        .attr("value", password)?
        .build();
    {
        let vm = vm.clone();
        on_input_value(&password_input, move |value| vm.set_password(value))?;
    }

    let submit_btn = ElementBuilder::new("button")?
        .class("btn-login")
        .attr("type", "submit")?
        .text(LOG_IN_LABEL)
        .build();

    let form = ElementBuilder::new("form")?
        .class("login-form")
        .child(&username_input)?
        .child(&password_input)?
        .child(&submit_btn)?
        .build();

    {
        let vm = vm.clone();
        on_submit(&form, move || {
            let vm = vm.clone();
            spawn_local(async move {
                vm.login().await;
            });
        })?;
    }

    Ok(form)
}

pub fn render_logout<C: HttpClient + 'static>(vm: &ConsoleViewModel<C>) -> Result<Element, JsValue> {
    let button = ElementBuilder::new("button")?
        .class("btn-logout")
        .attr("type", "button")?
        .text(LOG_OUT_LABEL)
        .build();

    let vm = vm.clone();
    on_click(&button, move |_| vm.logout())?;

    Ok(button)
}
