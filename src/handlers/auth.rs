// src/handlers/auth.rs

use axum::{Json, extract::State};
use validator::Validate;

use crate::{
    common::error::AppError,
    config::AppState,
    middleware::auth::AuthenticatedUser,
    models::auth::{AuthResponse, LoginUserPayload, SessionProfile, SwitchRolePayload},
};

// POST /api/auth/login
#[utoipa::path(
    post,
    path = "/api/auth/login",
    tag = "Auth",
    request_body = LoginUserPayload,
    responses(
        (status = 200, description = "Sessão criada", body = AuthResponse),
        (status = 401, description = "Credenciais inválidas")
    )
)]
pub async fn login(
    State(app_state): State<AppState>,
    Json(payload): Json<LoginUserPayload>,
) -> Result<Json<AuthResponse>, AppError> {
    payload.validate().map_err(AppError::ValidationError)?;

    let response = app_state
        .auth_service
        .login_user(&payload.email, &payload.password)
        .await?;

    Ok(Json(response))
}

// GET /api/auth/me
#[utoipa::path(
    get,
    path = "/api/auth/me",
    tag = "Auth",
    responses(
        (status = 200, description = "Perfil da sessão ativa", body = SessionProfile),
        (status = 401, description = "Não autorizado")
    ),
    security(("api_jwt" = []))
)]
pub async fn get_me(
    State(app_state): State<AppState>,
    AuthenticatedUser(session): AuthenticatedUser,
) -> Json<SessionProfile> {
    Json(app_state.auth_service.profile(&session))
}

// POST /api/auth/switch-role
// Recurso de demonstração: emite uma sessão nova com o perfil pedido.
#[utoipa::path(
    post,
    path = "/api/auth/switch-role",
    tag = "Auth",
    request_body = SwitchRolePayload,
    responses(
        (status = 200, description = "Nova sessão com o perfil trocado", body = AuthResponse),
        (status = 403, description = "Perfil desconhecido")
    ),
    security(("api_jwt" = []))
)]
pub async fn switch_role(
    State(app_state): State<AppState>,
    AuthenticatedUser(session): AuthenticatedUser,
    Json(payload): Json<SwitchRolePayload>,
) -> Result<Json<AuthResponse>, AppError> {
    let response = app_state.auth_service.switch_role(&session, &payload.role)?;
    Ok(Json(response))
}
