// ============================================================================
// VIEW STATE - Registro inmutable + reducer de acciones
// ============================================================================
// Todos los cambios de estado pasan por `ViewState::apply(Action)`.
// `pending` cuenta peticiones en vuelo: el loading no se libera hasta que
// termina la última, aunque login y fetch se solapen.
// ============================================================================

use crate::error::ApiError;
use crate::models::PingPayload;

pub const INVALID_CREDENTIALS: &str = "Invalid credentials";

#[derive(Debug, Clone, PartialEq, Default)]
pub struct ViewState {
    pub is_authenticated: bool,
    pub username: String,
    pub password: String,
    pub pending: u32,
    pub data: Option<PingPayload>,
    /// Último aviso mostrado al usuario
    pub notice: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    UsernameChanged(String),
    PasswordChanged(String),
    LoginStarted,
    LoginSucceeded,
    LoginRejected,
    LoginFailed(ApiError),
    FetchStarted,
    FetchSucceeded(PingPayload),
    FetchFailed(ApiError),
    PingStarted,
    PingSucceeded(PingPayload),
    PingFailed(ApiError),
    LoggedOut,
}

impl Action {
    /// Las teclas en los inputs no re-renderizan (se perdería el foco)
    pub fn triggers_render(&self) -> bool {
        !matches!(self, Action::UsernameChanged(_) | Action::PasswordChanged(_))
    }
}

/// Qué layout corresponde a un estado
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Layout {
    Loading,
    Authenticated,
    Unauthenticated,
}

impl ViewState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_loading(&self) -> bool {
        self.pending > 0
    }

    pub fn layout(&self) -> Layout {
        if self.is_loading() {
            Layout::Loading
        } else if self.is_authenticated {
            Layout::Authenticated
        } else {
            Layout::Unauthenticated
        }
    }

    pub fn apply(self, action: Action) -> Self {
        match action {
            Action::UsernameChanged(username) => Self { username, ..self },
            Action::PasswordChanged(password) => Self { password, ..self },

            Action::LoginStarted => Self {
                pending: self.pending + 1,
                notice: None,
                ..self
            },
            Action::FetchStarted | Action::PingStarted => Self {
                pending: self.pending + 1,
                ..self
            },

            Action::LoginSucceeded => Self {
                is_authenticated: true,
                password: String::new(),
                notice: None,
                ..self.finished()
            },
            Action::LoginRejected => Self {
                is_authenticated: false,
                notice: Some(INVALID_CREDENTIALS.to_string()),
                ..self.finished()
            },
            Action::LoginFailed(err) => Self {
                is_authenticated: false,
                notice: Some(network_error_message(&err)),
                ..self.finished()
            },

            Action::FetchSucceeded(payload) | Action::PingSucceeded(payload) => Self {
                data: Some(payload),
                ..self.finished()
            },
            // El payload anterior se conserva
            Action::FetchFailed(_) | Action::PingFailed(_) => self.finished(),

            Action::LoggedOut => Self {
                is_authenticated: false,
                notice: None,
                ..self
            },
        }
    }

    fn finished(self) -> Self {
        Self {
            pending: self.pending.saturating_sub(1),
            ..self
        }
    }
}

pub fn network_error_message(err: &ApiError) -> String {
    format!("Network error: {}", err)
}
