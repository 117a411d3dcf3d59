use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys::Element;

use crate::dom::{on_click, ElementBuilder};
use crate::services::HttpClient;
use crate::viewmodels::ConsoleViewModel;
use crate::views::screen::{DataDisplay, FETCH_DATA_LABEL, SEND_PING_LABEL};

/// Botones de datos + último ping (visibles con o sin login)
pub fn render_data_panel<C: HttpClient + 'static>(
    vm: &ConsoleViewModel<C>,
    data: &DataDisplay,
) -> Result<Element, JsValue> {
    let fetch_btn = ElementBuilder::new("button")?
        .class("btn-fetch")
        .attr("type", "button")?
        .text(FETCH_DATA_LABEL)
        .build();
    {
        let vm = vm.clone();
        on_click(&fetch_btn, move |_| {
            let vm = vm.clone();
            spawn_local(async move {
                // El error ya queda en el log
                let _ = vm.fetch_data().await;
            });
        })?;
    }

    let ping_btn = ElementBuilder::new("button")?
        .class("btn-ping")
        .attr("type", "button")?
        .text(SEND_PING_LABEL)
        .build();
    {
        let vm = vm.clone();
        on_click(&ping_btn, move |_| {
            let vm = vm.clone();
            spawn_local(async move {
                let _ = vm.send_ping().await;
            });
        })?;
    }

    let last_ping = ElementBuilder::new("div")?
        .class(match data {
            DataDisplay::LastPing(_) => "last-ping",
            _ => "last-ping last-ping--empty",
        })
        .text(&data.text())
        .build();

    Ok(ElementBuilder::new("div")?
        .class("data-panel")
        .child(&fetch_btn)?
        .child(&ping_btn)?
        .child(&last_ping)?
        .build())
}
