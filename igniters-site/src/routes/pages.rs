//! The school site page.

use axum::{Router, extract::State, response::Html, routing::get};

use igniters_core::html::render_event_list;
use igniters_core::source::resolve_events;

use crate::page;
use crate::routes::AppError;
use crate::state::AppState;

pub fn router() -> Router<AppState> {
    Router::new().route("/", get(home))
}

/// GET / - Render the site with the current event schedule
async fn home(State(state): State<AppState>) -> Result<Html<String>, AppError> {
    let config = state.config()?;

    let resolved = resolve_events(&state.http, &config.upstream_base).await;
    let events_html = render_event_list(resolved.events());

    Ok(Html(page::render_page(&events_html, None)))
}
