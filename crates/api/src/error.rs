//! Unified error handling with Sentry integration.
//!
//! Provides a unified `AppError` type that captures server errors to Sentry
//! before responding to the client. All route handlers return
//! `Result<T, AppError>`, and every error body has the shape
//! `{"message": "..."}`.

use std::any::Any;

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;
use thiserror::Error;

use crate::db::RepositoryError;
use crate::services::auth::AuthError;

/// Message returned for any server-side failure.
pub const INTERNAL_ERROR_MESSAGE: &str = "Erro interno do servidor";

/// Message returned when the origin guard rejects a request.
pub const CORS_REJECTED_MESSAGE: &str = "Acesso bloqueado pela política de CORS";

/// Application-level error type for the API.
#[derive(Debug, Error)]
pub enum AppError {
    /// Repository operation failed.
    #[error("Repository error: {0}")]
    Repository(#[from] RepositoryError),

    /// Authentication operation failed.
    #[error("Auth error: {0}")]
    Auth(#[from] AuthError),

    /// Resource not found. The message is shown to the client.
    #[error("Not found: {0}")]
    NotFound(String),

    /// Bad request from client. The message is shown to the client.
    #[error("Bad request: {0}")]
    BadRequest(String),

    /// Request origin is not in the allow-list.
    #[error("Origin not allowed: {0}")]
    OriginNotAllowed(String),

    /// Internal server error.
    #[error("Internal error: {0}")]
    Internal(String),
}

impl AppError {
    fn status(&self) -> StatusCode {
        match self {
            Self::Repository(err) | Self::Auth(AuthError::Repository(err)) => match err {
                RepositoryError::NotFound => StatusCode::NOT_FOUND,
                RepositoryError::Conflict(_) => StatusCode::CONFLICT,
                RepositoryError::LockPoisoned => StatusCode::INTERNAL_SERVER_ERROR,
            },
            Self::Auth(err) => match err {
                AuthError::InvalidCredentials => StatusCode::UNAUTHORIZED,
                AuthError::MissingField(_) => StatusCode::BAD_REQUEST,
                AuthError::UserAlreadyExists => StatusCode::CONFLICT,
                AuthError::Repository(_) => StatusCode::INTERNAL_SERVER_ERROR,
            },
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::BadRequest(_) => StatusCode::BAD_REQUEST,
            Self::OriginNotAllowed(_) => StatusCode::FORBIDDEN,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn client_message(&self) -> String {
        match self {
            Self::Repository(err) | Self::Auth(AuthError::Repository(err)) => match err {
                RepositoryError::NotFound => "Recurso não encontrado!".to_owned(),
                RepositoryError::Conflict(_) => "Usuário ou e-mail já cadastrado!".to_owned(),
                // Don't expose internal error details to clients
                RepositoryError::LockPoisoned => INTERNAL_ERROR_MESSAGE.to_owned(),
            },
            Self::Auth(err) => match err {
                AuthError::InvalidCredentials => "Usuário ou senha incorretos!".to_owned(),
                AuthError::MissingField(_) => "Preencha todos os campos obrigatórios!".to_owned(),
                AuthError::UserAlreadyExists => "Usuário ou e-mail já cadastrado!".to_owned(),
                AuthError::Repository(_) => INTERNAL_ERROR_MESSAGE.to_owned(),
            },
            Self::NotFound(msg) | Self::BadRequest(msg) => msg.clone(),
            Self::OriginNotAllowed(_) => CORS_REJECTED_MESSAGE.to_owned(),
            Self::Internal(_) => INTERNAL_ERROR_MESSAGE.to_owned(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();

        // Capture server errors to Sentry
        if status.is_server_error() {
            let event_id = sentry::capture_error(&self);
            tracing::error!(
                error = %self,
                sentry_event_id = %event_id,
                "Request error"
            );
        }

        message_response(status, &self.client_message())
    }
}

/// Build a `{"message": ...}` JSON response.
pub fn message_response(status: StatusCode, message: &str) -> Response {
    (status, Json(json!({ "message": message }))).into_response()
}

/// Turn a handler panic into the generic 500 response.
///
/// Used with `tower_http::catch_panic::CatchPanicLayer`.
pub fn panic_response(panic: Box<dyn Any + Send + 'static>) -> Response {
    let detail = panic
        .downcast_ref::<String>()
        .map(String::as_str)
        .or_else(|| panic.downcast_ref::<&str>().copied())
        .unwrap_or("unknown panic");

    AppError::Internal(format!("handler panicked: {detail}")).into_response()
}

/// Result type alias for `AppError`.
pub type Result<T> = std::result::Result<T, AppError>;

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use http_body_util::BodyExt;

    use super::*;

    async fn body_message(response: Response) -> String {
        let bytes = response.into_body().collect().await.unwrap().to_bytes();
        let value: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        value["message"].as_str().unwrap().to_owned()
    }

    #[test]
    fn test_app_error_display() {
        let err = AppError::NotFound("Produto não encontrado!".to_string());
        assert_eq!(err.to_string(), "Not found: Produto não encontrado!");

        let err = AppError::BadRequest("invalid input".to_string());
        assert_eq!(err.to_string(), "Bad request: invalid input");
    }

    #[test]
    fn test_app_error_status_codes() {
        fn get_status(err: AppError) -> StatusCode {
            err.into_response().status()
        }

        assert_eq!(
            get_status(AppError::NotFound("test".to_string())),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            get_status(AppError::BadRequest("test".to_string())),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            get_status(AppError::OriginNotAllowed("http://evil.test".to_string())),
            StatusCode::FORBIDDEN
        );
        assert_eq!(
            get_status(AppError::Auth(AuthError::InvalidCredentials)),
            StatusCode::UNAUTHORIZED
        );
        assert_eq!(
            get_status(AppError::Auth(AuthError::MissingField("name"))),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            get_status(AppError::Auth(AuthError::UserAlreadyExists)),
            StatusCode::CONFLICT
        );
        assert_eq!(
            get_status(AppError::Repository(RepositoryError::LockPoisoned)),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(
            get_status(AppError::Internal("test".to_string())),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[tokio::test]
    async fn test_internal_details_are_hidden() {
        let response = AppError::Internal("secret stack trace".to_string()).into_response();
        assert_eq!(body_message(response).await, INTERNAL_ERROR_MESSAGE);
    }

    #[tokio::test]
    async fn test_cors_rejection_message() {
        let response = AppError::OriginNotAllowed("http://evil.test".to_string()).into_response();
        assert_eq!(body_message(response).await, CORS_REJECTED_MESSAGE);
    }

    #[tokio::test]
    async fn test_panic_response_is_generic_500() {
        let response = panic_response(Box::new("boom"));
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body_message(response).await, INTERNAL_ERROR_MESSAGE);
    }
}
