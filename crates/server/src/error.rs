use bulletin_domain::Error as DomainError;
use salvo::http::{ParseError, StatusCode};
use salvo::writing::Json;
use salvo::{Response, Scribe};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type with [`AppError`] as its error type.
pub type AppResult<T> = Result<T, AppError>;

/// Body written for every failed request.
#[derive(Serialize, Deserialize, Clone, PartialEq, Eq, Debug)]
pub struct ErrorResponse {
    /// Human readable reason.
    pub detail: String,
}

/// Errors a handler can answer with.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum AppError {
    /// Error raised by the domain layer.
    #[error(transparent)]
    Domain(#[from] DomainError),
    /// The request body could not be parsed.
    #[error("invalid request body: {0}")]
    Parse(#[from] ParseError),
    /// A path or query parameter is missing or malformed.
    #[error("missing or invalid parameter `{0}`")]
    Param(&'static str),
    /// The requested resource does not exist.
    #[error("{0} not found")]
    NotFound(String),
    /// The request was understood but cannot be carried out.
    #[error("bad request: {0}")]
    BadRequest(String),
    /// Shared state was not injected into the depot.
    #[error("application state is not available")]
    MissingState,
}

impl AppError {
    /// Http status code this error is answered with.
    #[must_use]
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::Domain(e) if e.is_validation() => StatusCode::BAD_REQUEST,
            Self::Domain(e) if e.is_not_found() => StatusCode::NOT_FOUND,
            Self::Domain(_) | Self::MissingState => StatusCode::INTERNAL_SERVER_ERROR,
            Self::Parse(_) | Self::Param(_) | Self::BadRequest(_) => StatusCode::BAD_REQUEST,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
        }
    }

    fn detail(&self) -> String {
        match self {
            Self::Domain(DomainError::Database(_)) | Self::MissingState => "internal server error".into(),
            _ => self.to_string(),
        }
    }
}

impl Scribe for AppError {
    fn render(self, res: &mut Response) {
        let code = self.status_code();
        if code.is_server_error() {
            tracing::error!(error = %self, "request failed");
        } else {
            tracing::info!(error = %self, status = %code, "request rejected");
        }
        res.status_code(code);
        res.render(Json(ErrorResponse { detail: self.detail() }));
    }
}
