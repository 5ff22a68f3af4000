use axum::http::StatusCode;
use thiserror::Error;
use tracing::error;

pub type AppResult<T> = Result<T, AppError>;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("{0}")]
    NotFound(String),

    #[error("{0}")]
    Validation(String),

    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("internal error: {0}")]
    Internal(String),
}

impl AppError {
    pub fn student_not_found(id: i64) -> Self {
        Self::NotFound(format!("student {id} not found"))
    }

    pub fn missing_fields(fields: &[&str]) -> Self {
        Self::Validation(format!("missing required fields: {}", fields.join(", ")))
    }

    pub fn internal(err: impl std::error::Error) -> Self {
        Self::Internal(err.to_string())
    }

    pub fn status(&self) -> StatusCode {
        match self {
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::Validation(_) => StatusCode::BAD_REQUEST,
            Self::Database(_) | Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        Self::internal(err)
    }
}

impl axum::response::IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        let status = self.status();
        let message = match &self {
            Self::NotFound(msg) | Self::Validation(msg) => msg.clone(),
            Self::Database(_) | Self::Internal(_) => {
                error!("{self}");
                "internal server error".to_string()
            }
        };
        (status, message).into_response()
    }
}
