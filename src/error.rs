// ============================================================================
// ERRORES DE API - Toda llamada de red termina en éxito o ApiError
// ============================================================================

use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// La petición no llegó a completarse (servidor caído, CORS, TLS...)
    Network(String),
    /// Respuesta con status fuera de 2xx
    Status { status: u16, body: String },
    /// El cuerpo no es el JSON esperado
    Decode(String),
    /// No se pudo construir la petición
    Encode(String),
}

impl ApiError {
    pub fn network(e: impl fmt::Display) -> Self {
        ApiError::Network(e.to_string())
    }

    pub fn decode(e: impl fmt::Display) -> Self {
        ApiError::Decode(e.to_string())
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::Network(msg) => write!(f, "request failed: {}", msg),
            ApiError::Status { status, body } if body.is_empty() => write!(f, "HTTP {}", status),
            ApiError::Status { status, body } => write!(f, "HTTP {}: {}", status, body),
            ApiError::Decode(msg) => write!(f, "invalid response: {}", msg),
            ApiError::Encode(msg) => write!(f, "invalid request: {}", msg),
        }
    }
}

impl std::error::Error for ApiError {}

impl From<serde_json::Error> for ApiError {
    fn from(e: serde_json::Error) -> Self {
        ApiError::decode(e)
    }
}

pub type ApiResult<T> = Result<T, ApiError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_display_includes_body_when_present() {
        let err = ApiError::Status { status: 404, body: "Last ping not available".into() };
        assert_eq!(err.to_string(), "HTTP 404: Last ping not available");

        let err = ApiError::Status { status: 502, body: String::new() };
        assert_eq!(err.to_string(), "HTTP 502");
    }

    #[test]
    fn json_errors_become_decode_errors() {
        let err: ApiError = serde_json::from_str::<serde_json::Value>("<html>")
            .unwrap_err()
            .into();
        assert!(matches!(err, ApiError::Decode(_)));
    }
}
