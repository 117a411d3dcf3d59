use serde::{Deserialize, Serialize};
use url::form_urlencoded;

use crate::models::lenient::{string_or_none, strictly_true};

pub const FORM_CONTENT_TYPE: &str = "application/x-www-form-urlencoded";

/// Credenciales del formulario de login
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct LoginForm {
    pub username: String,
    pub password: String,
}

impl LoginForm {
    pub fn new(username: &str, password: &str) -> Self {
        Self {
            username: username.to_string(),
            password: password.to_string(),
        }
    }

    /// Cuerpo `application/x-www-form-urlencoded` con `username` y `password`
    pub fn to_form_body(&self) -> String {
        form_urlencoded::Serializer::new(String::new())
            .append_pair("username", &self.username)
            .append_pair("password", &self.password)
            .finish()
    }
}

/// Respuesta de `/login`. Solo `success == true` autentica.
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug, Default)]
pub struct LoginResponse {
    #[serde(default, deserialize_with = "strictly_true")]
    pub success: bool,
    #[serde(default, deserialize_with = "string_or_none")]
    pub message: Option<String>,
}

impl LoginResponse {
    /// Cualquier JSON válido es una respuesta; lo que no sea un objeto cuenta como rechazo
    pub fn from_json(value: serde_json::Value) -> Result<Self, serde_json::Error> {
        if value.is_object() {
            serde_json::from_value(value)
        } else {
            Ok(Self::default())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn form_body_escapes_special_characters() {
        let form = LoginForm::new("trader one", "p&ss=w/rd");
        assert_eq!(form.to_form_body(), "username=trader+one&password=p%26ss%3Dw%2Frd");
    }

    #[test]
    fn only_boolean_true_is_success() {
        let ok = LoginResponse::from_json(json!({"success": true})).unwrap();
        assert!(ok.success);

        for body in [
            json!({"success": false}),
            json!({"success": "true"}),
            json!({"success": 1}),
            json!({"success": null}),
            json!({"message": "bad password"}),
            json!([true]),
            json!("success"),
        ] {
            let response = LoginResponse::from_json(body.clone()).unwrap();
            assert!(!response.success, "{} should not authenticate", body);
        }
    }

    #[test]
    fn message_is_kept() {
        let response = LoginResponse::from_json(json!({
            "success": false,
            "message": "Invalid credentials"
        }))
        .unwrap();
        assert_eq!(response.message.as_deref(), Some("Invalid credentials"));
    }

    #[test]
    fn non_string_message_does_not_break_login() {
        let response = LoginResponse::from_json(json!({
            "success": true,
            "message": {"user": "a"}
        }))
        .unwrap();
        assert!(response.success);
        assert_eq!(response.message, None);
    }
}
