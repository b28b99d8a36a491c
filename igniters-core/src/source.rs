//! Resolving the event schedule.
//!
//! One request to the events endpoint, no retries: any failure (network
//! error, timeout, non-success status, malformed body) substitutes the
//! built-in fallback schedule. The two cases stay distinct in
//! [`ResolvedEvents`] so callers can tell degraded mode apart, but they
//! are never partially merged.

use std::time::Duration;

use serde::Deserialize;

use crate::error::{SiteError, SiteResult};
use crate::event::Event;
use crate::fallback::fallback_events;

/// Base URL of the deployed site backend.
pub const DEFAULT_BASE_URL: &str = "https://igniters-academy.netlify.app";

/// Path of the serverless events function.
pub const EVENTS_ENDPOINT: &str = "/.netlify/functions/events";

/// Per-request timeout for both site endpoints.
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// The outcome of resolving events: fetched from the endpoint, or the
/// built-in schedule with the failure that caused the substitution.
#[derive(Debug)]
pub enum ResolvedEvents {
    Remote(Vec<Event>),
    Fallback { events: Vec<Event>, reason: SiteError },
}

impl ResolvedEvents {
    pub fn events(&self) -> &[Event] {
        match self {
            ResolvedEvents::Remote(events) => events,
            ResolvedEvents::Fallback { events, .. } => events,
        }
    }

    pub fn into_events(self) -> Vec<Event> {
        match self {
            ResolvedEvents::Remote(events) => events,
            ResolvedEvents::Fallback { events, .. } => events,
        }
    }

    pub fn is_fallback(&self) -> bool {
        matches!(self, ResolvedEvents::Fallback { .. })
    }
}

/// Resolve the event schedule from `{base_url}/.netlify/functions/events`.
///
/// Never fails: every error collapses into the fallback schedule.
pub async fn resolve_events(http: &reqwest::Client, base_url: &str) -> ResolvedEvents {
    match fetch_remote_events(http, base_url).await {
        Ok(events) => ResolvedEvents::Remote(events),
        Err(reason) => ResolvedEvents::Fallback {
            events: fallback_events(),
            reason,
        },
    }
}

async fn fetch_remote_events(http: &reqwest::Client, base_url: &str) -> SiteResult<Vec<Event>> {
    let url = endpoint_url(base_url, EVENTS_ENDPOINT);

    let response = http
        .get(&url)
        .header(reqwest::header::CACHE_CONTROL, "no-store")
        .timeout(REQUEST_TIMEOUT)
        .send()
        .await?;

    if !response.status().is_success() {
        return Err(SiteError::UnexpectedStatus(response.status()));
    }

    let body = response.bytes().await?;
    decode_events_body(&body)
}

pub(crate) fn endpoint_url(base_url: &str, path: &str) -> String {
    format!("{}{}", base_url.trim_end_matches('/'), path)
}

/// The endpoint may respond with `{"events": [...]}` or a bare array.
#[derive(Deserialize)]
#[serde(untagged)]
enum EventsBody {
    Wrapped { events: Vec<Event> },
    Bare(Vec<Event>),
}

fn decode_events_body(body: &[u8]) -> SiteResult<Vec<Event>> {
    let decoded: EventsBody =
        serde_json::from_slice(body).map_err(|e| SiteError::MalformedBody(e.to_string()))?;

    Ok(match decoded {
        EventsBody::Wrapped { events } => events,
        EventsBody::Bare(events) => events,
    })
}
