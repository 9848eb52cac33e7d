use std::fmt;

use common::ProblemDetails;
use serde_json::Value;

pub const UNREACHABLE_MESSAGE: &str = "Cannot reach the server. Make sure the backend is running.";
pub const NOT_FOUND_MESSAGE: &str = "Resource not found (404).";
pub const UNEXPECTED_MESSAGE: &str = "An unexpected error occurred.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    NotFound,
    Validation,
    Unreachable,
    Unexpected,
}

/// What the server sent back with a failed response.
#[derive(Debug, Clone, PartialEq)]
pub enum ErrorBody {
    Text(String),
    Problem(ProblemDetails),
}

/// Failure of a single gateway call. Every call is terminal; nothing retries.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiError {
    pub kind: ErrorKind,
    pub status: Option<u16>,
    pub body: Option<ErrorBody>,
}

impl ApiError {
    pub fn unreachable() -> Self {
        Self {
            kind: ErrorKind::Unreachable,
            status: None,
            body: None,
        }
    }

    pub fn unexpected(status: Option<u16>) -> Self {
        Self {
            kind: ErrorKind::Unexpected,
            status,
            body: None,
        }
    }

    pub fn from_transport(err: reqwest::Error) -> Self {
        if err.is_connect() || err.is_timeout() {
            tracing::warn!(error = %err, "server unreachable");
            Self::unreachable()
        } else {
            tracing::warn!(error = %err, "request failed");
            Self::unexpected(err.status().map(|s| s.as_u16()))
        }
    }

    /// Classifies a non-success response from its status and raw body.
    pub fn from_response(status: u16, body: &[u8]) -> Self {
        let kind = match status {
            404 => ErrorKind::NotFound,
            400 | 422 => ErrorKind::Validation,
            _ => ErrorKind::Unexpected,
        };

        Self {
            kind,
            status: Some(status),
            body: parse_body(body),
        }
    }

    /// Single human-readable line: text body, then problem title, then all
    /// field messages; otherwise a fixed message for the kind.
    pub fn message(&self) -> String {
        match &self.body {
            Some(ErrorBody::Text(text)) if !text.is_empty() => return text.clone(),
            Some(ErrorBody::Problem(problem)) => {
                if let Some(title) = problem.title.as_deref().filter(|t| !t.is_empty()) {
                    return title.to_string();
                }
                if let Some(errors) = &problem.errors {
                    let joined = errors
                        .values()
                        .flatten()
                        .map(String::as_str)
                        .collect::<Vec<_>>()
                        .join(" ");
                    if !joined.is_empty() {
                        return joined;
                    }
                }
            }
            _ => {}
        }

        match self.kind {
            ErrorKind::Unreachable => UNREACHABLE_MESSAGE,
            ErrorKind::NotFound => NOT_FOUND_MESSAGE,
            ErrorKind::Validation | ErrorKind::Unexpected => UNEXPECTED_MESSAGE,
        }
        .to_string()
    }
}

fn parse_body(bytes: &[u8]) -> Option<ErrorBody> {
    let text = String::from_utf8_lossy(bytes).trim().to_string();
    if text.is_empty() {
        return None;
    }

    match serde_json::from_str::<Value>(&text) {
        Ok(Value::String(s)) => Some(ErrorBody::Text(s)),
        Ok(value @ Value::Object(_)) => serde_json::from_value::<ProblemDetails>(value)
            .ok()
            .map(ErrorBody::Problem),
        Ok(_) => None,
        Err(_) => Some(ErrorBody::Text(text)),
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message())
    }
}

impl std::error::Error for ApiError {}
