//! Security event route handlers.

use axum::{Json, extract::State};
use serde::Serialize;

use crate::security::SecurityEvent;
use crate::state::AppState;

/// `GET /api/security/events` response body.
#[derive(Debug, Serialize)]
pub struct EventsResponse {
    pub events: Vec<SecurityEvent>,
}

/// `GET /api/security/events`
///
/// The newest 50 events in chronological order.
pub async fn events(State(state): State<AppState>) -> Json<EventsResponse> {
    Json(EventsResponse {
        events: state.security().recent().await,
    })
}
