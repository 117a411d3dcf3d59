// ============================================================================
// SCREEN - Descripción pura de lo que se ve para un ViewState
// ============================================================================
// Los renderers DOM solo traducen esto a elementos; así el contrato de
// render se prueba sin navegador.
// ============================================================================

use crate::models::PingPayload;
use crate::state::{Layout, ViewState};

pub const LOADING_TEXT: &str = "Loading ...";
pub const LOG_IN_LABEL: &str = "Log In";
pub const LOG_OUT_LABEL: &str = "Log Out";
pub const FETCH_DATA_LABEL: &str = "Fetch Data";
pub const SEND_PING_LABEL: &str = "Send Ping";
pub const USERNAME_PLACEHOLDER: &str = "Username";
pub const PASSWORD_PLACEHOLDER: &str = "Password";

const NO_DATA_TEXT: &str = "N/A";

#[derive(Debug, Clone, PartialEq)]
pub enum Screen {
    /// Solo el indicador de carga
    Loading,
    Console(ConsoleScreen),
}

#[derive(Debug, Clone, PartialEq)]
pub struct ConsoleScreen {
    pub controls: AuthControls,
    pub data: DataDisplay,
    /// Aviso del último login fallido, visible tras cerrar la alerta
    pub notice: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum AuthControls {
    LogOut,
    LoginForm { username: String, password: String },
}

#[derive(Debug, Clone, PartialEq)]
pub enum DataDisplay {
    /// Todavía no hubo fetch con éxito
    NoData,
    LastPing(String),
    /// Hay payload pero sin `last_ping`
    Unavailable(Option<String>),
}

impl DataDisplay {
    pub fn from_payload(payload: Option<&PingPayload>) -> Self {
        match payload {
            None => DataDisplay::NoData,
            Some(p) => match p.last_ping_text() {
                Some(ts) => DataDisplay::LastPing(ts),
                None => DataDisplay::Unavailable(p.message.clone()),
            },
        }
    }

    pub fn text(&self) -> String {
        match self {
            DataDisplay::NoData | DataDisplay::Unavailable(None) => {
                format!("Last Ping: {}", NO_DATA_TEXT)
            }
            DataDisplay::LastPing(ts) => format!("Last Ping: {}", ts),
            DataDisplay::Unavailable(Some(message)) => {
                format!("Last Ping: {} ({})", NO_DATA_TEXT, message)
            }
        }
    }
}

pub fn describe(state: &ViewState) -> Screen {
    let controls = match state.layout() {
        Layout::Loading => return Screen::Loading,
        Layout::Authenticated => AuthControls::LogOut,
        Layout::Unauthenticated => AuthControls::LoginForm {
            username: state.username.clone(),
            password: state.password.clone(),
        },
    };

    Screen::Console(ConsoleScreen {
        controls,
        data: DataDisplay::from_payload(state.data.as_ref()),
        notice: state.notice.clone(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::Action;
    use serde_json::json;

    fn payload(value: serde_json::Value) -> PingPayload {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn initial_screen_renders_without_data() {
        let screen = describe(&ViewState::new());
        assert_eq!(
            screen,
            Screen::Console(ConsoleScreen {
                controls: AuthControls::LoginForm {
                    username: String::new(),
                    password: String::new(),
                },
                data: DataDisplay::NoData,
                notice: None,
            })
        );
        if let Screen::Console(console) = screen {
            assert_eq!(console.data.text(), "Last Ping: N/A");
        }
    }

    #[test]
    fn loading_hides_everything_else() {
        let state = ViewState::new()
            .apply(Action::LoginStarted)
            .apply(Action::LoginSucceeded)
            .apply(Action::FetchStarted);
        assert_eq!(describe(&state), Screen::Loading);
    }

    #[test]
    fn authenticated_screen_has_log_out_and_data() {
        let state = ViewState::new()
            .apply(Action::LoginStarted)
            .apply(Action::LoginSucceeded)
            .apply(Action::FetchStarted)
            .apply(Action::FetchSucceeded(payload(json!({"last_ping": "2024-01-01T00:00:00Z"}))));

        match describe(&state) {
            Screen::Console(console) => {
                assert_eq!(console.controls, AuthControls::LogOut);
                assert_eq!(console.data.text(), "Last Ping: 2024-01-01T00:00:00Z");
            }
            Screen::Loading => panic!("should not be loading"),
        }
    }

    #[test]
    fn payload_without_ping_is_explicitly_unavailable() {
        let display =
            DataDisplay::from_payload(Some(&payload(json!({"message": "Last ping not available"}))));
        assert_eq!(display, DataDisplay::Unavailable(Some("Last ping not available".into())));
        assert_eq!(display.text(), "Last Ping: N/A (Last ping not available)");

        let display = DataDisplay::from_payload(Some(&payload(json!({"other": 1}))));
        assert_eq!(display.text(), "Last Ping: N/A");
    }

    #[test]
    fn failed_login_notice_is_shown_until_next_attempt() {
        let state = ViewState::new()
            .apply(Action::LoginStarted)
            .apply(Action::LoginRejected);
        match describe(&state) {
            Screen::Console(console) => {
                assert_eq!(console.notice.as_deref(), Some("Invalid credentials"))
            }
            Screen::Loading => panic!("should not be loading"),
        }

        let state = state.apply(Action::LoginStarted).apply(Action::LoginSucceeded);
        match describe(&state) {
            Screen::Console(console) => assert_eq!(console.notice, None),
            Screen::Loading => panic!("should not be loading"),
        }
    }
}
