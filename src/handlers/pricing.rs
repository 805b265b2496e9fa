// src/handlers/pricing.rs

use axum::{
    Json,
    extract::{Path, State},
};
use uuid::Uuid;
use validator::Validate;

use crate::{
    common::error::AppError,
    config::AppState,
    middleware::{
        rbac::{PermPricingRead, PermPricingWrite, RequirePermission},
        scope::VenueScopeCtx,
    },
    models::pricing::{
        PreviewPricingPayload, PricingConfig, PricingPreview, UpdatePricingPayload,
    },
};

// GET /api/pricing/{venue_id}
#[utoipa::path(
    get,
    path = "/api/pricing/{venue_id}",
    tag = "Pricing",
    responses(
        (status = 200, description = "Configuração de preço ativa da casa", body = PricingConfig),
        (status = 403, description = "Sem permissão pricing:read ou casa fora do escopo"),
        (status = 404, description = "Sem configuração ativa")
    ),
    params(
        ("venue_id" = Uuid, Path, description = "ID da casa")
    ),
    security(("api_jwt" = []))
)]
pub async fn get_pricing(
    State(app_state): State<AppState>,
    VenueScopeCtx(scope): VenueScopeCtx,
    _perm: RequirePermission<PermPricingRead>,
    Path(venue_id): Path<Uuid>,
) -> Result<Json<PricingConfig>, AppError> {
    ensure_in_scope(&scope, venue_id)?;
    let config = app_state.pricing_service.active_config(venue_id)?;
    Ok(Json(config))
}

// PUT /api/pricing/{venue_id}
#[utoipa::path(
    put,
    path = "/api/pricing/{venue_id}",
    tag = "Pricing",
    request_body = UpdatePricingPayload,
    responses(
        (status = 200, description = "Nova configuração ativa (a anterior é desativada)", body = PricingConfig),
        (status = 400, description = "Valores negativos ou limites invertidos"),
        (status = 403, description = "Sem permissão pricing:write")
    ),
    params(
        ("venue_id" = Uuid, Path, description = "ID da casa")
    ),
    security(("api_jwt" = []))
)]
pub async fn update_pricing(
    State(app_state): State<AppState>,
    VenueScopeCtx(scope): VenueScopeCtx,
    _perm: RequirePermission<PermPricingWrite>,
    Path(venue_id): Path<Uuid>,
    Json(payload): Json<UpdatePricingPayload>,
) -> Result<Json<PricingConfig>, AppError> {
    payload.validate().map_err(AppError::ValidationError)?;
    ensure_in_scope(&scope, venue_id)?;

    let config = app_state.pricing_service.update_config(venue_id, payload)?;
    Ok(Json(config))
}

// POST /api/pricing/{venue_id}/preview
// Simula o preço de um grupo nas duas classes (Prime e Non-Prime)
#[utoipa::path(
    post,
    path = "/api/pricing/{venue_id}/preview",
    tag = "Pricing",
    request_body = PreviewPricingPayload,
    responses(
        (status = 200, description = "Detalhamento Prime e Non-Prime", body = PricingPreview),
        (status = 400, description = "Grupo fora dos limites da casa")
    ),
    params(
        ("venue_id" = Uuid, Path, description = "ID da casa")
    ),
    security(("api_jwt" = []))
)]
pub async fn preview_pricing(
    State(app_state): State<AppState>,
    VenueScopeCtx(scope): VenueScopeCtx,
    _perm: RequirePermission<PermPricingRead>,
    Path(venue_id): Path<Uuid>,
    Json(payload): Json<PreviewPricingPayload>,
) -> Result<Json<PricingPreview>, AppError> {
    payload.validate().map_err(AppError::ValidationError)?;
    ensure_in_scope(&scope, venue_id)?;

    let preview = app_state
        .pricing_service
        .preview(venue_id, payload.party_size)?;
    Ok(Json(preview))
}

fn ensure_in_scope(
    scope: &crate::models::venue::VenueScope,
    venue_id: Uuid,
) -> Result<(), AppError> {
    if !scope.contains(venue_id) {
        return Err(AppError::AccessDenied(format!(
            "a casa {venue_id} não está no escopo da sessão."
        )));
    }
    Ok(())
}
