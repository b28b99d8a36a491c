pub mod contact;
pub mod events;
pub mod pages;

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;

use crate::config::SiteConfig;

/// Error payload for failed requests
#[derive(Serialize)]
pub struct ErrorBody {
    pub error: String,
    /// Path of the config file; the only way a handler fails here is a
    /// config that stopped parsing
    #[serde(skip_serializing_if = "Option::is_none")]
    pub config: Option<String>,
}

/// Converts handler errors into a 500 response pointing at the config file
pub struct AppError(anyhow::Error);

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let config = SiteConfig::config_path()
            .ok()
            .map(|path| path.display().to_string());

        let body = Json(ErrorBody {
            error: self.0.to_string(),
            config,
        });
        (StatusCode::INTERNAL_SERVER_ERROR, body).into_response()
    }
}

impl<E> From<E> for AppError
where
    E: Into<anyhow::Error>,
{
    fn from(err: E) -> Self {
        Self(err.into())
    }
}
