use crate::error::RelayError;
use serde_json::Value;

/// Inbound chat request as read from the raw body.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct ChatRequest {
    message: Option<Value>,
}

impl ChatRequest {
    /// Parses the raw body. An absent or empty body reads as `{}`.
    pub fn parse(body: Option<&str>) -> Result<Self, RelayError> {
        let raw = body.filter(|b| !b.is_empty()).unwrap_or("{}");

        match serde_json::from_str::<Value>(raw)? {
            Value::Object(mut fields) => Ok(Self {
                message: fields.remove("message"),
            }),
            Value::Null => Err(RelayError::unexpected(
                "Cannot read property 'message' of a null request body",
            )),
            _ => Ok(Self::default()),
        }
    }

    /// The validated message. Absent and falsy values (`null`, `false`,
    /// `0`, `""`) are rejected; any other JSON value is relayed untouched.
    pub fn into_message(self) -> Result<Value, RelayError> {
        match self.message {
            Some(message) if !is_falsy(&message) => Ok(message),
            _ => Err(RelayError::MissingMessage),
        }
    }
}

fn is_falsy(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Bool(b) => !b,
        Value::Number(n) => n.as_f64() == Some(0.0),
        Value::String(s) => s.is_empty(),
        Value::Array(_) | Value::Object(_) => false,
    }
}
