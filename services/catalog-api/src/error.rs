use axum::{
    Json,
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use common::{FieldErrors, ProblemDetails};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("resource not found")]
    NotFound,

    #[error("validation failed for {} field(s)", .0.len())]
    Validation(FieldErrors),

    #[error("malformed request body: {0}")]
    MalformedBody(String),

    #[error("database error: {0}")]
    Store(#[from] sqlx::Error),

    #[error("migration failed: {0}")]
    Migrate(#[from] sqlx::migrate::MigrateError),

    #[error("corrupt row: {0}")]
    CorruptRow(String),
}

impl CatalogError {
    pub fn field(field: &str, message: impl Into<String>) -> Self {
        let mut errors = FieldErrors::new();
        errors.insert(field.to_string(), vec![message.into()]);
        CatalogError::Validation(errors)
    }
}

impl From<JsonRejection> for CatalogError {
    fn from(rejection: JsonRejection) -> Self {
        CatalogError::MalformedBody(rejection.body_text())
    }
}

impl IntoResponse for CatalogError {
    fn into_response(self) -> Response {
        match self {
            CatalogError::NotFound => StatusCode::NOT_FOUND.into_response(),
            CatalogError::Validation(errors) => {
                let problem = ProblemDetails::new(400).with_errors(errors);
                (StatusCode::BAD_REQUEST, Json(problem)).into_response()
            }
            CatalogError::MalformedBody(detail) => {
                let problem = ProblemDetails::new(400)
                    .with_title("The request body could not be read.")
                    .with_detail(detail);
                (StatusCode::BAD_REQUEST, Json(problem)).into_response()
            }
            err @ (CatalogError::Store(_)
            | CatalogError::Migrate(_)
            | CatalogError::CorruptRow(_)) => {
                tracing::error!(error = %err, "request failed");
                let problem = ProblemDetails::new(500).with_title("An unexpected error occurred.");
                (StatusCode::INTERNAL_SERVER_ERROR, Json(problem)).into_response()
            }
        }
    }
}
