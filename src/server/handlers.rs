use crate::{error::RelayError, relay::Relay, relay::RelayResponse};
use axum::{
    Json,
    body::Bytes,
    extract::{State, rejection::BytesRejection},
    response::{IntoResponse, Response},
};
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub relay: Arc<Relay>,
}

impl IntoResponse for RelayResponse {
    fn into_response(self) -> Response {
        (self.status, Json(self.body)).into_response()
    }
}

pub async fn chat(
    State(state): State<AppState>,
    body: Result<Bytes, BytesRejection>,
) -> RelayResponse {
    // Oversized or unreadable bodies still answer with a JSON error
    let body = match body {
        Ok(body) => body,
        Err(rejection) => return RelayError::unexpected(rejection.body_text()).into(),
    };

    let body = match std::str::from_utf8(&body) {
        Ok(body) => body,
        Err(e) => return RelayError::from(e).into(),
    };

    state.relay.handle(Some(body)).await
}

pub async fn health() -> &'static str {
    "OK"
}
