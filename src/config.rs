// ============================================================================
// CONFIG - Endpoints y logging (tiempo de compilación)
// ============================================================================

use serde::{Deserialize, Serialize};

pub const DEFAULT_LOGIN_URL: &str = "https://localhost:5001/login";
pub const DEFAULT_DATA_URL: &str = "/test-endpoint";
pub const DEFAULT_PING_URL: &str = "/health-ping";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    /// Servicio de autenticación (puede estar en otro host/puerto)
    pub login_url: String,
    /// Endpoint de datos, relativo al origen de la página
    pub data_url: String,
    pub ping_url: String,
    pub enable_logging: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            login_url: DEFAULT_LOGIN_URL.to_string(),
            data_url: DEFAULT_DATA_URL.to_string(),
            ping_url: DEFAULT_PING_URL.to_string(),
            enable_logging: true,
        }
    }
}

impl AppConfig {
    /// Carga la configuración desde variables de entorno en tiempo de compilación
    pub fn from_env() -> Self {
        Self::from_values(
            option_env!("LOGIN_URL"),
            option_env!("DATA_URL"),
            option_env!("PING_URL"),
            option_env!("ENABLE_LOGGING"),
        )
    }

    fn from_values(
        login_url: Option<&str>,
        data_url: Option<&str>,
        ping_url: Option<&str>,
        enable_logging: Option<&str>,
    ) -> Self {
        let defaults = Self::default();
        Self {
            login_url: non_empty(login_url).unwrap_or(defaults.login_url),
            data_url: non_empty(data_url).unwrap_or(defaults.data_url),
            ping_url: non_empty(ping_url).unwrap_or(defaults.ping_url),
            enable_logging: enable_logging
                .and_then(|v| v.trim().parse().ok())
                .unwrap_or(defaults.enable_logging),
        }
    }

    pub fn log_level(&self) -> log::Level {
        if self.enable_logging {
            log::Level::Debug
        } else {
            log::Level::Warn
        }
    }
}

fn non_empty(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}

// Configuración global estática
lazy_static::lazy_static! {
    pub static ref CONFIG: AppConfig = AppConfig::from_env();
}
