//! Authentication route handlers.

use axum::{Json, extract::State, http::StatusCode, response::Response};
use serde::Deserialize;
use serde_json::Value;

use crate::error::{Result, message_response};
use crate::extract::{JsonBody, field_text, is_truthy};
use crate::models::UserProfile;
use crate::services::auth::{AuthService, Registration};
use crate::state::AppState;

/// Login request body.
///
/// Fields of any JSON type are accepted and compared by their text.
#[derive(Debug, Default, Deserialize)]
pub struct LoginRequest {
    pub name: Option<Value>,
    pub password: Option<Value>,
}

/// Registration request body.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest {
    pub name: Option<Value>,
    pub password: Option<Value>,
    pub email: Option<Value>,
    pub full_name: Option<Value>,
    pub telephone: Option<Value>,
}

impl From<RegisterRequest> for Registration {
    fn from(req: RegisterRequest) -> Self {
        // Falsy required fields count as missing
        let required = |value: Option<Value>| value.filter(is_truthy).and_then(field_text);

        Self {
            name: required(req.name),
            password: required(req.password),
            email: required(req.email),
            full_name: req.full_name.and_then(field_text),
            telephone: req.telephone.and_then(field_text),
        }
    }
}

/// Handle `POST /login`.
///
/// Returns the public projection of the matching user.
pub async fn login(
    State(state): State<AppState>,
    JsonBody(req): JsonBody<LoginRequest>,
) -> Result<Json<UserProfile>> {
    let auth = AuthService::new(state.users());
    let name = req.name.and_then(field_text).unwrap_or_default();
    let password = req.password.and_then(field_text).unwrap_or_default();
    let user = auth.login(&name, &password)?;

    Ok(Json(user.profile()))
}

/// Handle `POST /register`.
pub async fn register(
    State(state): State<AppState>,
    JsonBody(req): JsonBody<RegisterRequest>,
) -> Result<Response> {
    let auth = AuthService::new(state.users());
    auth.register(req.into())?;

    Ok(message_response(StatusCode::CREATED, "Usuário registrado com sucesso!"))
}
