//! Sistema de manejo de errores
//!
//! Este módulo define los errores de la aplicación y su conversión a
//! respuestas HTTP.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;
use tracing::{error, warn};

use crate::clients::CatalogError;
use crate::utils::validation::{field_errors, FieldErrors};

/// Errores principales de la aplicación
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Validation error: {0}")]
    Validation(#[from] validator::ValidationErrors),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Car ID {0} does not exist.")]
    CarNotFound(i64),

    #[error("Already exists: {0}")]
    AlreadyExists(String),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("{0}")]
    ExternalApi(String),

    #[error("Internal server error: {0}")]
    Internal(String),
}

impl From<CatalogError> for AppError {
    fn from(err: CatalogError) -> Self {
        match err {
            not_found @ CatalogError::ModelNotFound { .. } => {
                AppError::NotFound(not_found.to_string())
            }
            CatalogError::Transport(message) => AppError::ExternalApi(message),
        }
    }
}

/// Respuesta de error para la API
#[derive(Debug, serde::Serialize)]
struct ErrorResponse {
    error: String,
    message: String,
    code: String,
}

impl ErrorResponse {
    fn new(error: &str, message: impl Into<String>, code: &str) -> Json<Self> {
        Json(Self {
            error: error.to_string(),
            message: message.into(),
            code: code.to_string(),
        })
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        match self {
            AppError::Database(e) => {
                error!("❌ Database error: {}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ErrorResponse::new(
                        "Database Error",
                        "An error occurred while accessing the database",
                        "DB_ERROR",
                    ),
                )
                    .into_response()
            }

            AppError::Validation(e) => {
                warn!("⚠️ Validation error: {}", e);
                (StatusCode::FORBIDDEN, Json(field_errors(&e))).into_response()
            }

            AppError::CarNotFound(car_id) => {
                warn!("⚠️ Rating rejected, car {} does not exist", car_id);
                let body: FieldErrors = [(
                    "car_id".to_string(),
                    vec![AppError::CarNotFound(car_id).to_string()],
                )]
                .into_iter()
                .collect();
                (StatusCode::NOT_FOUND, Json(body)).into_response()
            }

            AppError::NotFound(msg) => {
                warn!("⚠️ Resource not found: {}", msg);
                (
                    StatusCode::NOT_FOUND,
                    ErrorResponse::new("Not Found", msg, "NOT_FOUND"),
                )
                    .into_response()
            }

            AppError::AlreadyExists(msg) => {
                warn!("⚠️ Already exists: {}", msg);
                (
                    StatusCode::FORBIDDEN,
                    ErrorResponse::new("Forbidden", msg, "ALREADY_EXISTS"),
                )
                    .into_response()
            }

            AppError::BadRequest(msg) => {
                warn!("⚠️ Bad request: {}", msg);
                (
                    StatusCode::BAD_REQUEST,
                    ErrorResponse::new("Bad Request", msg, "BAD_REQUEST"),
                )
                    .into_response()
            }

            // The catalog's error text is the whole body.
            AppError::ExternalApi(msg) => {
                error!("❌ Vehicle catalog unavailable: {}", msg);
                (StatusCode::BAD_GATEWAY, Json(msg)).into_response()
            }

            AppError::Internal(msg) => {
                error!("❌ Internal error: {}", msg);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ErrorResponse::new(
                        "Internal Server Error",
                        "An unexpected error occurred",
                        "INTERNAL_ERROR",
                    ),
                )
                    .into_response()
            }
        }
    }
}

/// Resultado tipado para operaciones que pueden fallar
pub type AppResult<T> = Result<T, AppError>;
