// Deserializadores tolerantes: un campo con tipo inesperado no invalida el cuerpo entero

use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// Solo el booleano `true` cuenta; "true", 1, null... son `false`
pub(crate) fn strictly_true<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(value == Value::Bool(true))
}

/// Strings se conservan; cualquier otro tipo se descarta
pub(crate) fn string_or_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::String(s) => Ok(Some(s)),
        _ => Ok(None),
    }
}
