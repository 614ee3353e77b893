use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use thiserror::Error;

use crate::server::types::ErrorResponse;

pub type Result<T> = std::result::Result<T, Error>;

/// Upstream error bodies relayed to the caller are cut to this many
/// characters.
pub const MAX_DETAIL_CHARS: usize = 200;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Method not allowed, use POST.")]
    MethodNotAllowed,

    #[error("Missing \"message\" in body.")]
    MissingMessage,

    #[error("Server configuration error.")]
    MissingApiKey,

    #[error("OpenAI API error.")]
    Upstream { status: u16, detail: String },

    #[error("Failed to parse AI response JSON.")]
    MalformedResponse(String),

    #[error("AI response missing required fields.")]
    IncompleteResponse(String),

    #[error("Unexpected server error.")]
    Internal(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Address parse error: {0}")]
    AddrParse(#[from] std::net::AddrParseError),
}

impl Error {
    /// Wraps a non-success upstream reply, keeping only the leading
    /// [`MAX_DETAIL_CHARS`] characters of the raw body.
    pub fn upstream(status: u16, body: impl Into<String>) -> Self {
        let detail: String = body.into().chars().take(MAX_DETAIL_CHARS).collect();
        Self::Upstream { status, detail }
    }

    pub fn malformed(content: impl Into<String>) -> Self {
        Self::MalformedResponse(content.into())
    }

    pub fn incomplete(fields: impl Into<String>) -> Self {
        Self::IncompleteResponse(fields.into())
    }

    pub fn internal(msg: impl Into<String>) -> Self {
        Self::Internal(msg.into())
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            Self::MissingMessage => StatusCode::BAD_REQUEST,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// The `error` string shown to the caller. Variants that never reach a
    /// handler (startup IO, YAML, address parsing) collapse to the generic
    /// message so internals stay out of response bodies.
    fn client_message(&self) -> String {
        match self {
            Self::MethodNotAllowed
            | Self::MissingMessage
            | Self::MissingApiKey
            | Self::Upstream { .. }
            | Self::MalformedResponse(_)
            | Self::IncompleteResponse(_)
            | Self::Internal(_) => self.to_string(),
            _ => "Unexpected server error.".to_string(),
        }
    }

    fn client_details(&self) -> Option<String> {
        match self {
            Self::Upstream { detail, .. } => Some(detail.clone()),
            _ => None,
        }
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        let body = ErrorResponse {
            error: self.client_message(),
            details: self.client_details(),
        };

        (self.status_code(), Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn upstream_constructor_truncates_detail() {
        let body = "x".repeat(500);
        match Error::upstream(503, body.clone()) {
            Error::Upstream { status, detail } => {
                assert_eq!(status, 503);
                assert_eq!(detail.chars().count(), MAX_DETAIL_CHARS);
                assert!(body.starts_with(&detail));
            }
            other => panic!("unexpected variant: {other:?}"),
        }
    }

    #[test]
    fn upstream_constructor_keeps_short_bodies_whole() {
        match Error::upstream(429, "rate limited") {
            Error::Upstream { detail, .. } => assert_eq!(detail, "rate limited"),
            other => panic!("unexpected variant: {other:?}"),
        }
    }

    #[test]
    fn status_codes_follow_the_contract() {
        assert_eq!(
            Error::MethodNotAllowed.status_code(),
            StatusCode::METHOD_NOT_ALLOWED
        );
        assert_eq!(Error::MissingMessage.status_code(), StatusCode::BAD_REQUEST);
        for error in [
            Error::MissingApiKey,
            Error::upstream(502, "boom"),
            Error::malformed("not json"),
            Error::incomplete("advice"),
            Error::internal("connection reset"),
        ] {
            assert_eq!(error.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
        }
    }

    #[test]
    fn startup_errors_do_not_leak_into_client_messages() {
        let error: Error = std::io::Error::other("secret path unreadable").into();
        assert_eq!(error.client_message(), "Unexpected server error.");
        assert_eq!(error.client_details(), None);
    }

    #[test]
    fn only_upstream_errors_carry_details() {
        assert_eq!(
            Error::upstream(500, "bad gateway").client_details(),
            Some("bad gateway".to_string())
        );
        assert_eq!(Error::malformed("{").client_details(), None);
        assert_eq!(Error::MissingApiKey.client_details(), None);
    }
}
