pub mod screen;

#[cfg(target_arch = "wasm32")]
pub mod app;
#[cfg(target_arch = "wasm32")]
pub mod data_panel;
#[cfg(target_arch = "wasm32")]
pub mod login;

pub use screen::{describe, AuthControls, ConsoleScreen, DataDisplay, Screen};

#[cfg(target_arch = "wasm32")]
pub use app::render_app;
