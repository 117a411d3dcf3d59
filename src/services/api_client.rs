// ============================================================================
// API CLIENT - SOLO COMUNICACIÓN HTTP (Stateless)
// ============================================================================
// NO tiene lógica de negocio: construye las peticiones y decodifica respuestas
// ============================================================================

use crate::config::{AppConfig, CONFIG};
use crate::error::ApiResult;
use crate::models::{LoginForm, LoginResponse, PingPayload, FORM_CONTENT_TYPE};
use crate::services::http::{HttpClient, HttpRequest};

pub struct ApiClient<C> {
    http: C,
    login_url: String,
    data_url: String,
    ping_url: String,
}

impl<C: HttpClient> ApiClient<C> {
    /// Cliente con los endpoints de `CONFIG`
    pub fn new(http: C) -> Self {
        Self::with_config(http, &CONFIG)
    }

    pub fn with_config(http: C, config: &AppConfig) -> Self {
        Self {
            http,
            login_url: config.login_url.clone(),
            data_url: config.data_url.clone(),
            ping_url: config.ping_url.clone(),
        }
    }

    /// POST form-encoded al servicio de login.
    /// Cualquier cuerpo JSON es el resultado del login, sea cual sea el status
    /// (un 401 con `{"success": false}` es un rechazo, no un fallo de red).
    pub async fn login(&self, username: &str, password: &str) -> ApiResult<LoginResponse> {
        let form = LoginForm::new(username, password);
        let request = HttpRequest::post(&self.login_url)
            .with_header("Content-Type", FORM_CONTENT_TYPE)
            .with_body(form.to_form_body());

        log::info!("🔐 [API] POST {} (usuario: {})", self.login_url, username);

        let response = self.http.send(request).await?;
        let body = match response.json::<serde_json::Value>() {
            Ok(body) => body,
            // Sin JSON: el status manda si no es 2xx
            Err(e) => return Err(response.error_for_status().err().unwrap_or(e)),
        };
        Ok(LoginResponse::from_json(body)?)
    }

    /// GET del endpoint de datos (último ping)
    pub async fn fetch_data(&self) -> ApiResult<PingPayload> {
        log::info!("📡 [API] GET {}", self.data_url);
        let response = self
            .http
            .send(HttpRequest::get(&self.data_url))
            .await?
            .error_for_status()?;
        response.json()
    }

    /// POST al endpoint de health-ping; el backend responde con el nuevo `last_ping`
    pub async fn send_ping(&self) -> ApiResult<PingPayload> {
        log::info!("📡 [API] POST {}", self.ping_url);
        let response = self
            .http
            .send(HttpRequest::post(&self.ping_url))
            .await?
            .error_for_status()?;
        response.json()
    }
}
