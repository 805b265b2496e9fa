// src/handlers/promoters.rs

use axum::{
    Json,
    extract::{Path, State},
};
use uuid::Uuid;

use crate::{
    common::error::AppError,
    config::AppState,
    middleware::{
        rbac::{PermPromoterRead, PermPromoterWrite, RequirePermission},
        scope::VenueScopeCtx,
    },
    models::promoter::{AssignTierPayload, Promoter},
};

// GET /api/promoters
#[utoipa::path(
    get,
    path = "/api/promoters",
    tag = "Promoters",
    responses(
        (status = 200, description = "Promoters que atuam nas casas do escopo", body = Vec<Promoter>),
        (status = 403, description = "Sem permissão promoter:read")
    ),
    params(
        ("x-venue-id" = Option<Uuid>, Header, description = "Casa selecionada; ausente = portfólio")
    ),
    security(("api_jwt" = []))
)]
pub async fn list_promoters(
    State(app_state): State<AppState>,
    VenueScopeCtx(scope): VenueScopeCtx,
    _perm: RequirePermission<PermPromoterRead>,
) -> Result<Json<Vec<Promoter>>, AppError> {
    let promoters = app_state.promoter_store.list_in(&scope.venue_ids)?;
    Ok(Json(promoters))
}

// PATCH /api/promoters/{id}/tier
// Única via de mudança de nível — nunca acontece como efeito colateral
#[utoipa::path(
    patch,
    path = "/api/promoters/{id}/tier",
    tag = "Promoters",
    request_body = AssignTierPayload,
    responses(
        (status = 200, description = "Promoter com o nível novo", body = Promoter),
        (status = 403, description = "Sem permissão promoter:write"),
        (status = 404, description = "Promoter fora do escopo ou inexistente")
    ),
    params(
        ("id" = Uuid, Path, description = "ID do promoter")
    ),
    security(("api_jwt" = []))
)]
pub async fn assign_tier(
    State(app_state): State<AppState>,
    VenueScopeCtx(scope): VenueScopeCtx,
    _perm: RequirePermission<PermPromoterWrite>,
    Path(id): Path<Uuid>,
    Json(payload): Json<AssignTierPayload>,
) -> Result<Json<Promoter>, AppError> {
    let promoter = app_state
        .promoter_store
        .find(id)?
        .ok_or(AppError::NotFound("Promoter"))?;

    if !promoter.venue_ids.iter().any(|v| scope.contains(*v)) {
        return Err(AppError::NotFound("Promoter"));
    }

    let updated = app_state.promoter_store.assign_tier(id, payload.tier)?;
    Ok(Json(updated))
}
