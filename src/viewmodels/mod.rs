pub mod console_viewmodel;

pub use console_viewmodel::{ConsoleViewModel, LoginOutcome};
