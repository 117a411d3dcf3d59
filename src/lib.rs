// ============================================================================
// TRADING CONSOLE - FRONTEND MVVM (RUST PURO + WASM)
// ============================================================================
// - Views: traducen el estado a DOM (sin lógica)
// - ViewModels: orquestan llamadas de red y acciones de estado
// - Services: SOLO comunicación HTTP y avisos al usuario
// - State: registro inmutable + reducer, compartido con Rc<RefCell>
// - Models: estructuras compartidas con el backend
// ============================================================================

pub mod config;
pub mod error;
pub mod models;
pub mod services;
pub mod state;
pub mod viewmodels;
pub mod views;

#[cfg(target_arch = "wasm32")]
mod app;
#[cfg(target_arch = "wasm32")]
mod dom;

#[cfg(test)]
mod test_support;

#[cfg(target_arch = "wasm32")]
pub use browser::*;

#[cfg(target_arch = "wasm32")]
mod browser {
    use std::cell::RefCell;

    use wasm_bindgen::prelude::*;

    use crate::app::App;
    use crate::config::CONFIG;

    thread_local! {
        static APP: RefCell<Option<App>> = RefCell::new(None);
    }

    #[wasm_bindgen(start)]
    pub fn main() -> Result<(), JsValue> {
        console_error_panic_hook::set_once();
        wasm_logger::init(wasm_logger::Config::new(CONFIG.log_level()));
        log::info!("🚀 Trading Console - Rust Puro + MVVM");
        log::debug!("⚙️ [APP] Configuración: {:?}", *CONFIG);

        let app = App::new()?;
        app.render()?;

        APP.with(|cell| {
            *cell.borrow_mut() = Some(app);
        });
        Ok(())
    }

    /// Re-render completo de la app montada
    pub fn rerender_app() {
        APP.with(|cell| match cell.borrow().as_ref() {
            Some(app) => {
                if let Err(e) = app.render() {
                    log::error!("❌ [APP] Error re-renderizando: {:?}", e);
                }
            }
            None => log::warn!("⚠️ [APP] App no está inicializada"),
        });
    }
}
