use std::sync::Arc;

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::post;
use axum::{Json, Router};
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::middleware::error::{AppError, AppResult};
use crate::middleware::mw_ctx::CtxState;
use crate::middleware::utils::extractor_utils::JsonOrFormValidated;
use crate::models::view::user::UserView;
use crate::services::auth_service::{AuthLoginInput, AuthRegisterInput, AuthService};

pub fn routes() -> Router<Arc<CtxState>> {
    Router::new()
        .route("/auth/login", post(login))
        .route("/auth/register", post(register))
}

#[derive(Debug, Deserialize, Serialize, Validate)]
pub struct LoginInput {
    #[validate(email)]
    pub email: Option<String>,
    pub password: Option<String>,
}

#[derive(Debug, Deserialize, Serialize, Validate)]
pub struct RegisterInput {
    pub username: Option<String>,
    #[validate(email)]
    pub email: Option<String>,
    pub password: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct AuthSuccessResponse {
    pub message: String,
    pub user: UserView,
}

async fn login(
    State(state): State<Arc<CtxState>>,
    JsonOrFormValidated(payload): JsonOrFormValidated<LoginInput>,
) -> AppResult<Json<AuthSuccessResponse>> {
    let (email, password) = match (payload.email, payload.password) {
        (Some(email), Some(password)) => (email, password),
        _ => {
            return Err(AppError::MissingField {
                field: "email or password".to_string(),
            })
        }
    };

    let user = AuthService::new(&state.db.client)
        .login_password(AuthLoginInput { email, password })
        .await?;

    Ok(Json(AuthSuccessResponse {
        message: "Login successful".to_string(),
        user: user.into(),
    }))
}

async fn register(
    State(state): State<Arc<CtxState>>,
    JsonOrFormValidated(payload): JsonOrFormValidated<RegisterInput>,
) -> AppResult<Response> {
    let (username, email, password) = match (payload.username, payload.email, payload.password) {
        (Some(username), Some(email), Some(password)) => (username, email, password),
        _ => {
            return Err(AppError::MissingField {
                field: "fields".to_string(),
            })
        }
    };

    let user = AuthService::new(&state.db.client)
        .register_password(AuthRegisterInput {
            username,
            email,
            password,
        })
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(AuthSuccessResponse {
            message: "User registered successfully".to_string(),
            user: user.into(),
        }),
    )
        .into_response())
}
