//! Events feed endpoint

use axum::{Json, Router, extract::State, routing::get};
use serde::Serialize;

use igniters_core::event::{Event, sort_schedule};
use igniters_core::source::resolve_events;

use crate::routes::AppError;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new().route("/events", get(list_events))
}

/// Events feed returned by the API
#[derive(Serialize)]
pub struct EventsResponse {
    pub events: Vec<Event>,
    /// "remote" when the upstream endpoint answered, "builtin" otherwise
    pub source: &'static str,
}

/// GET /events - The schedule as JSON, date-ascending
async fn list_events(State(state): State<AppState>) -> Result<Json<EventsResponse>, AppError> {
    let config = state.config()?;

    let resolved = resolve_events(&state.http, &config.upstream_base).await;
    let source = if resolved.is_fallback() {
        "builtin"
    } else {
        "remote"
    };

    let mut events = resolved.into_events();
    sort_schedule(&mut events);

    Ok(Json(EventsResponse { events, source }))
}
