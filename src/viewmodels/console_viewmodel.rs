// ============================================================================
// CONSOLE VIEWMODEL - Login, fetch de datos, ping y logout
// ============================================================================
// Orquesta ApiClient + AppState. Toda llamada de red despacha una acción de
// inicio y exactamente una de fin, haya éxito o error.
// ============================================================================

use std::rc::Rc;

use crate::error::{ApiError, ApiResult};
use crate::services::{ApiClient, HttpClient, Notifier};
use crate::state::{network_error_message, Action, AppState, INVALID_CREDENTIALS};

#[derive(Debug, Clone, PartialEq)]
pub enum LoginOutcome {
    Authenticated,
    InvalidCredentials,
    NetworkError(ApiError),
}

pub struct ConsoleViewModel<C> {
    state: AppState,
    api: Rc<ApiClient<C>>,
    notifier: Rc<dyn Notifier>,
}

impl<C> Clone for ConsoleViewModel<C> {
    fn clone(&self) -> Self {
        Self {
            state: self.state.clone(),
            api: self.api.clone(),
            notifier: self.notifier.clone(),
        }
    }
}

impl<C: HttpClient> ConsoleViewModel<C> {
    pub fn new(state: AppState, api: ApiClient<C>, notifier: Rc<dyn Notifier>) -> Self {
        Self {
            state,
            api: Rc::new(api),
            notifier,
        }
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub fn set_username(&self, username: String) {
        self.state.dispatch(Action::UsernameChanged(username));
    }

    pub fn set_password(&self, password: String) {
        self.state.dispatch(Action::PasswordChanged(password));
    }

    /// Login con las credenciales actuales del formulario
    pub async fn login(&self) -> LoginOutcome {
        let (username, password) = self
            .state
            .with(|s| (s.username.clone(), s.password.clone()));

        log::info!("🔐 [LOGIN] Iniciando login para '{}'", username);
        self.state.dispatch(Action::LoginStarted);

        match self.api.login(&username, &password).await {
            Ok(response) if response.success => {
                log::info!("✅ [LOGIN] Login exitoso");
                self.state.dispatch(Action::LoginSucceeded);
                LoginOutcome::Authenticated
            }
            Ok(response) => {
                log::warn!(
                    "⚠️ [LOGIN] Credenciales rechazadas ({})",
                    response.message.as_deref().unwrap_or("sin mensaje")
                );
                self.state.dispatch(Action::LoginRejected);
                self.notifier.alert(INVALID_CREDENTIALS);
                LoginOutcome::InvalidCredentials
            }
            Err(e) => {
                log::error!("❌ [LOGIN] Error de red: {}", e);
                let message = network_error_message(&e);
                self.state.dispatch(Action::LoginFailed(e.clone()));
                self.notifier.alert(&message);
                LoginOutcome::NetworkError(e)
            }
        }
    }

    /// Fetch del último ping. Los errores solo van al log; el payload anterior se mantiene.
    pub async fn fetch_data(&self) -> ApiResult<()> {
        self.state.dispatch(Action::FetchStarted);

        match self.api.fetch_data().await {
            Ok(payload) => {
                log::info!("✅ [FETCH] Datos recibidos: last_ping={:?}", payload.last_ping_text());
                self.state.dispatch(Action::FetchSucceeded(payload));
                Ok(())
            }
            Err(e) => {
                log::error!("❌ [FETCH] Error fetching data: {}", e);
                self.state.dispatch(Action::FetchFailed(e.clone()));
                Err(e)
            }
        }
    }

    /// Registra un ping en el backend; su respuesta pasa a ser el payload mostrado
    pub async fn send_ping(&self) -> ApiResult<()> {
        self.state.dispatch(Action::PingStarted);

        match self.api.send_ping().await {
            Ok(payload) => {
                log::info!("✅ [PING] {}", payload.message.as_deref().unwrap_or("Ping enviado"));
                self.state.dispatch(Action::PingSucceeded(payload));
                Ok(())
            }
            Err(e) => {
                log::error!("❌ [PING] Error enviando ping: {}", e);
                self.state.dispatch(Action::PingFailed(e.clone()));
                Err(e)
            }
        }
    }

    /// Logout local, sin llamada al servidor
    pub fn logout(&self) {
        log::info!("🚪 [LOGOUT] Cerrando sesión");
        self.state.dispatch(Action::LoggedOut);
    }
}
