use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::models::lenient::string_or_none;

/// Cuerpo de `/test-endpoint` y `/health-ping`
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug, Default)]
pub struct PingPayload {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_ping: Option<Value>,
    #[serde(
        default,
        deserialize_with = "string_or_none",
        skip_serializing_if = "Option::is_none"
    )]
    pub message: Option<String>,
    /// Campos que el backend añada y la consola no interpreta
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl PingPayload {
    /// `last_ping` como texto; los timestamps llegan como string, el resto se serializa
    pub fn last_ping_text(&self) -> Option<String> {
        match self.last_ping.as_ref()? {
            Value::Null => None,
            Value::String(s) => Some(s.clone()),
            other => Some(other.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn reads_string_timestamp() {
        let payload: PingPayload =
            serde_json::from_value(json!({"last_ping": "2024-01-01T00:00:00Z"})).unwrap();
        assert_eq!(payload.last_ping_text().as_deref(), Some("2024-01-01T00:00:00Z"));
        assert!(payload.extra.is_empty());
    }

    #[test]
    fn health_ping_reply_keeps_message() {
        let payload: PingPayload = serde_json::from_value(json!({
            "message": "Pinged successfully!",
            "last_ping": "2024-03-05T10:11:12.123456"
        }))
        .unwrap();
        assert_eq!(payload.message.as_deref(), Some("Pinged successfully!"));
        assert_eq!(payload.last_ping_text().as_deref(), Some("2024-03-05T10:11:12.123456"));
    }

    #[test]
    fn missing_or_null_ping_has_no_text() {
        let payload: PingPayload =
            serde_json::from_value(json!({"message": "Last ping not available"})).unwrap();
        assert_eq!(payload.last_ping_text(), None);

        let payload: PingPayload = serde_json::from_value(json!({"last_ping": null})).unwrap();
        assert_eq!(payload.last_ping_text(), None);
    }

    #[test]
    fn non_string_ping_is_rendered_as_json() {
        let payload: PingPayload =
            serde_json::from_value(json!({"last_ping": 1704067200, "source": "scheduler"})).unwrap();
        assert_eq!(payload.last_ping_text().as_deref(), Some("1704067200"));
        assert_eq!(payload.extra.get("source"), Some(&json!("scheduler")));
    }

    #[test]
    fn non_string_message_keeps_last_ping() {
        let payload: PingPayload = serde_json::from_value(json!({
            "last_ping": "2024-01-01T00:00:00Z",
            "message": ["ok", "latency: 12ms"]
        }))
        .unwrap();
        assert_eq!(payload.last_ping_text().as_deref(), Some("2024-01-01T00:00:00Z"));
        assert_eq!(payload.message, None);
    }
}
