use crate::error::RelayError;
use http::StatusCode;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

pub const CONTENT_TYPE_JSON: &str = "application/json";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ResponseBody {
    Reply { reply: String },
    Error { error: String },
}

/// Host-agnostic outcome of one relay invocation. Always JSON.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RelayResponse {
    pub status: StatusCode,
    pub body: ResponseBody,
}

impl RelayResponse {
    pub fn reply(reply: impl Into<String>) -> Self {
        Self {
            status: StatusCode::OK,
            body: ResponseBody::Reply {
                reply: reply.into(),
            },
        }
    }

    pub fn error(status: StatusCode, error: impl Into<String>) -> Self {
        Self {
            status,
            body: ResponseBody::Error {
                error: error.into(),
            },
        }
    }

    pub fn body_json(&self) -> String {
        match &self.body {
            ResponseBody::Reply { reply } => serde_json::json!({ "reply": reply }),
            ResponseBody::Error { error } => serde_json::json!({ "error": error }),
        }
        .to_string()
    }
}

impl From<RelayError> for RelayResponse {
    fn from(err: RelayError) -> Self {
        Self::error(err.status(), err.to_string())
    }
}

/// Invocation record handed over by a function-as-a-service host.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FunctionEvent {
    #[serde(default)]
    pub http_method: Option<String>,
    #[serde(default)]
    pub body: Option<String>,
}

/// Result record returned to a function-as-a-service host.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FunctionResult {
    pub status_code: u16,
    pub headers: HashMap<String, String>,
    pub body: String,
}

impl From<RelayResponse> for FunctionResult {
    fn from(response: RelayResponse) -> Self {
        Self {
            status_code: response.status.as_u16(),
            headers: HashMap::from([("Content-Type".to_string(), CONTENT_TYPE_JSON.to_string())]),
            body: response.body_json(),
        }
    }
}
