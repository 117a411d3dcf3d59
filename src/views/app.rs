// ============================================================================
// APP VIEW - Traduce el Screen actual a DOM
// ============================================================================

use wasm_bindgen::prelude::*;
use web_sys::Element;

use crate::dom::ElementBuilder;
use crate::services::HttpClient;
use crate::viewmodels::ConsoleViewModel;
use crate::views::data_panel::render_data_panel;
use crate::views::login::{render_login_form, render_logout};
use crate::views::screen::{describe, AuthControls, Screen, LOADING_TEXT};

pub fn render_app<C: HttpClient + 'static>(vm: &ConsoleViewModel<C>) -> Result<Element, JsValue> {
    let screen = vm.state().with(describe);

    let console = match screen {
        Screen::Loading => {
            return Ok(ElementBuilder::new("div")?
                .class("loading")
                .text(LOADING_TEXT)
                .build());
        }
        Screen::Console(console) => console,
    };

    let controls = match &console.controls {
        AuthControls::LogOut => render_logout(vm)?,
        AuthControls::LoginForm { username, password } => {
            render_login_form(vm, username, password)?
        }
    };
    let data_panel = render_data_panel(vm, &console.data)?;

    let mut root = ElementBuilder::new("div")?.class("console").child(&controls)?;
    if let Some(notice) = &console.notice {
        let notice = ElementBuilder::new("div")?
            .class("notice")
            .attr("role", "alert")?
            .text(notice)
            .build();
        root = root.child(&notice)?;
    }

    Ok(root.child(&data_panel)?.build())
}
