use http::StatusCode;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

/// Startup and infrastructure failures. These abort the binary; they never
/// reach a caller of the relay.
#[derive(Error, Debug)]
pub enum Error {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    #[error("Address parse error: {0}")]
    AddrParse(#[from] std::net::AddrParseError),
}

impl Error {
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }
}

pub const MISSING_MESSAGE: &str = "Invalid request: no message provided";
pub const MISSING_API_KEY: &str = "Server configuration error: OPENAI_API_KEY not set";
pub const UNKNOWN_ERROR: &str = "Unknown error";

/// Everything that can stop a single relay invocation short of a reply.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RelayError {
    #[error("{}", MISSING_MESSAGE)]
    MissingMessage,

    #[error("{}", MISSING_API_KEY)]
    MissingApiKey,

    /// Non-2xx answer from the upstream API, forwarded untouched.
    #[error("{body}")]
    Upstream { status: StatusCode, body: String },

    #[error("{0}")]
    Unexpected(String),
}

impl RelayError {
    pub fn unexpected(msg: impl Into<String>) -> Self {
        let msg = msg.into();
        if msg.is_empty() {
            Self::Unexpected(UNKNOWN_ERROR.to_string())
        } else {
            Self::Unexpected(msg)
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            Self::MissingMessage => StatusCode::BAD_REQUEST,
            Self::MissingApiKey | Self::Unexpected(_) => StatusCode::INTERNAL_SERVER_ERROR,
            Self::Upstream { status, .. } => *status,
        }
    }
}

impl From<serde_json::Error> for RelayError {
    fn from(e: serde_json::Error) -> Self {
        Self::unexpected(e.to_string())
    }
}

impl From<reqwest::Error> for RelayError {
    fn from(e: reqwest::Error) -> Self {
        Self::unexpected(e.to_string())
    }
}

impl From<std::str::Utf8Error> for RelayError {
    fn from(e: std::str::Utf8Error) -> Self {
        Self::unexpected(format!("Request body is not valid UTF-8: {}", e))
    }
}
