//! Contact form endpoint

use axum::{Form, Router, extract::State, response::Html, routing::post};

use igniters_core::contact::{ContactMessage, submit_contact};
use igniters_core::html::render_event_list;
use igniters_core::source::resolve_events;

use crate::page;
use crate::routes::AppError;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new().route("/contact", post(submit))
}

/// POST /contact - Relay the form upstream, then re-render the page with
/// the outcome as the status line
async fn submit(
    State(state): State<AppState>,
    Form(message): Form<ContactMessage>,
) -> Result<Html<String>, AppError> {
    let config = state.config()?;

    let outcome = submit_contact(&state.http, &config.upstream_base, &message).await;

    let resolved = resolve_events(&state.http, &config.upstream_base).await;
    let events_html = render_event_list(resolved.events());

    Ok(Html(page::render_page(
        &events_html,
        Some(outcome.status_text()),
    )))
}
