//! Contact form submission.
//!
//! Messages go to the contact function as JSON. When the endpoint is
//! missing or failing (static hosting with no backend), the outcome is a
//! fixed apology pointing at the school's email address instead.

use serde::{Deserialize, Serialize};

use crate::error::{SiteError, SiteResult};
use crate::source::{REQUEST_TIMEOUT, endpoint_url};

/// Path of the serverless contact function.
pub const CONTACT_ENDPOINT: &str = "/.netlify/functions/contact";

/// Shown when the endpoint accepts the message but returns no text of its own.
pub const DEFAULT_SENT_MESSAGE: &str = "Message sent. Thank you!";

/// Shown when the message could not be delivered at all.
pub const UNDELIVERABLE_MESSAGE: &str =
    "Could not send via server. Save your message and email us at info@igniters.example";

/// A message for the school office.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContactMessage {
    pub name: String,
    pub email: String,
    pub message: String,
}

#[derive(Deserialize)]
struct ContactReply {
    message: Option<String>,
}

/// What the sender should be told after a submission attempt.
#[derive(Debug, Clone, PartialEq)]
pub enum ContactOutcome {
    /// The endpoint accepted the message; holds the text to display.
    Delivered(String),
    /// The endpoint was unreachable or rejected the message.
    Undeliverable,
}

impl ContactOutcome {
    /// The status line to show the sender.
    pub fn status_text(&self) -> &str {
        match self {
            ContactOutcome::Delivered(text) => text,
            ContactOutcome::Undeliverable => UNDELIVERABLE_MESSAGE,
        }
    }
}

/// Submit a contact message to `{base_url}/.netlify/functions/contact`.
///
/// Never fails: every error collapses into [`ContactOutcome::Undeliverable`].
pub async fn submit_contact(
    http: &reqwest::Client,
    base_url: &str,
    message: &ContactMessage,
) -> ContactOutcome {
    match post_contact(http, base_url, message).await {
        Ok(text) => ContactOutcome::Delivered(text),
        Err(_) => ContactOutcome::Undeliverable,
    }
}

async fn post_contact(
    http: &reqwest::Client,
    base_url: &str,
    message: &ContactMessage,
) -> SiteResult<String> {
    let url = endpoint_url(base_url, CONTACT_ENDPOINT);

    let response = http
        .post(&url)
        .timeout(REQUEST_TIMEOUT)
        .json(message)
        .send()
        .await?;

    if !response.status().is_success() {
        return Err(SiteError::UnexpectedStatus(response.status()));
    }

    let reply: ContactReply = response.json().await?;
    Ok(reply
        .message
        .unwrap_or_else(|| DEFAULT_SENT_MESSAGE.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::{Json, Router, http::StatusCode, routing::post};
    use serde_json::json;

    async fn serve(router: Router) -> String {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Should bind an ephemeral port");
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, router).await.unwrap();
        });
        format!("http://{}", addr)
    }

    fn sample_message() -> ContactMessage {
        ContactMessage {
            name: "Ada".to_string(),
            email: "ada@example.com".to_string(),
            message: "When is the open day?".to_string(),
        }
    }

    #[test]
    fn test_payload_shape_matches_endpoint_contract() {
        let value = serde_json::to_value(sample_message()).expect("Should serialize");
        assert_eq!(
            value,
            json!({
                "name": "Ada",
                "email": "ada@example.com",
                "message": "When is the open day?"
            })
        );
    }

    #[tokio::test]
    async fn test_delivered_with_endpoint_message() {
        let router = Router::new().route(
            CONTACT_ENDPOINT,
            post(|| async { Json(json!({ "message": "X" })) }),
        );
        let base = serve(router).await;

        let outcome = submit_contact(&reqwest::Client::new(), &base, &sample_message()).await;
        assert_eq!(outcome, ContactOutcome::Delivered("X".to_string()));
        assert_eq!(outcome.status_text(), "X");
    }

    #[tokio::test]
    async fn test_delivered_without_endpoint_message_uses_default() {
        let router = Router::new().route(CONTACT_ENDPOINT, post(|| async { Json(json!({})) }));
        let base = serve(router).await;

        let outcome = submit_contact(&reqwest::Client::new(), &base, &sample_message()).await;
        assert_eq!(
            outcome,
            ContactOutcome::Delivered(DEFAULT_SENT_MESSAGE.to_string())
        );
    }

    #[tokio::test]
    async fn test_failing_endpoint_is_undeliverable() {
        let router = Router::new().route(
            CONTACT_ENDPOINT,
            post(|| async { StatusCode::INTERNAL_SERVER_ERROR }),
        );
        let base = serve(router).await;

        let outcome = submit_contact(&reqwest::Client::new(), &base, &sample_message()).await;
        assert_eq!(outcome, ContactOutcome::Undeliverable);
        assert!(outcome.status_text().contains("info@igniters.example"));
    }

    #[tokio::test]
    async fn test_unreachable_endpoint_is_undeliverable() {
        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);

        let base = format!("http://{}", addr);
        let outcome = submit_contact(&reqwest::Client::new(), &base, &sample_message()).await;
        assert_eq!(outcome, ContactOutcome::Undeliverable);
    }
}
