use std::fmt;

use axum::{http::StatusCode, response::IntoResponse, Json};
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum AppError {
    Generic { description: String },
    MissingField { field: String },
    Validation { description: String },
    EntityFailIdNotFound { ident: String },
    Serde { source: String },
    SurrealDb { source: String },
}

pub type AppResult<T> = core::result::Result<T, AppError>;

impl std::error::Error for AppError {}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Generic { description } => write!(f, "{description}"),
            Self::MissingField { field } => write!(f, "Missing {field}"),
            Self::Validation { description } => write!(f, "{description}"),
            Self::EntityFailIdNotFound { ident } => write!(f, "{ident} not found"),
            Self::Serde { source } => write!(f, "Serde error - {source}"),
            Self::SurrealDb { source } => write!(f, "Database error - {source}"),
        }
    }
}

#[derive(Serialize, Deserialize, Debug)]
pub struct ErrorResponseBody {
    error: String,
}

impl ErrorResponseBody {
    pub fn new(error: String) -> Self {
        ErrorResponseBody { error }
    }

    pub fn get_err(&self) -> String {
        self.error.clone()
    }
}

// REST error response
impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        tracing::debug!("->> {:<12} - into_response - {self:?}", "ERROR");
        let status_code = match self {
            AppError::MissingField { .. }
            | AppError::Validation { .. }
            | AppError::Generic { .. } => StatusCode::BAD_REQUEST,
            AppError::EntityFailIdNotFound { .. } => StatusCode::NOT_FOUND,
            AppError::Serde { .. } | AppError::SurrealDb { .. } => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };
        (status_code, Json(ErrorResponseBody::new(self.to_string()))).into_response()
    }
}

// External errors
impl From<serde_json::Error> for AppError {
    fn from(value: serde_json::Error) -> Self {
        Self::Serde {
            source: value.to_string(),
        }
    }
}

impl From<surrealdb::Error> for AppError {
    fn from(value: surrealdb::Error) -> Self {
        Self::SurrealDb {
            source: value.to_string(),
        }
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(value: validator::ValidationErrors) -> Self {
        Self::Validation {
            description: value.to_string(),
        }
    }
}
