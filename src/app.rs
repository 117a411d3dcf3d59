// ============================================================================
// APP - Monta la consola en #app y re-renderiza con cada cambio de estado
// ============================================================================

use std::cell::Cell;
use std::rc::Rc;

use gloo_timers::callback::Timeout;
use wasm_bindgen::prelude::*;
use web_sys::Element;

use crate::dom::{append_child, clear_children, get_element_by_id};
use crate::services::{ApiClient, BrowserHttpClient, BrowserNotifier};
use crate::state::AppState;
use crate::viewmodels::ConsoleViewModel;
use crate::views::render_app;

pub struct App {
    vm: ConsoleViewModel<BrowserHttpClient>,
    root: Element,
}

impl App {
    pub fn new() -> Result<Self, JsValue> {
        let root = get_element_by_id("app")
            .ok_or_else(|| JsValue::from_str("No #app element found"))?;

        let state = AppState::new();

        // Varios dispatch seguidos producen un solo render
        let render_scheduled = Rc::new(Cell::new(false));
        state.subscribe_to_changes(move || {
            if render_scheduled.replace(true) {
                return;
            }
            let render_scheduled = render_scheduled.clone();
            Timeout::new(0, move || {
                render_scheduled.set(false);
                crate::rerender_app();
            })
            .forget();
        });

        let vm = ConsoleViewModel::new(
            state,
            ApiClient::new(BrowserHttpClient),
            Rc::new(BrowserNotifier),
        );

        Ok(Self { vm, root })
    }

    /// Re-render completo del contenedor
    pub fn render(&self) -> Result<(), JsValue> {
        clear_children(&self.root);
        let view = render_app(&self.vm)?;
        append_child(&self.root, &view)?;
        log::debug!("✅ [APP] Render completado");
        Ok(())
    }
}
