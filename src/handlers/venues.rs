// src/handlers/venues.rs

use axum::{
    Json,
    extract::{Path, State},
};
use uuid::Uuid;

use crate::{
    common::error::AppError,
    config::AppState,
    middleware::scope::VenueScopeCtx,
    models::venue::Venue,
};

// GET /api/venues
#[utoipa::path(
    get,
    path = "/api/venues",
    tag = "Venues",
    responses(
        (status = 200, description = "Casas do escopo da sessão", body = Vec<Venue>),
        (status = 401, description = "Não autorizado"),
        (status = 403, description = "Escopo negado")
    ),
    params(
        ("x-venue-id" = Option<Uuid>, Header, description = "Casa selecionada; ausente = portfólio")
    ),
    security(("api_jwt" = []))
)]
pub async fn list_venues(
    State(app_state): State<AppState>,
    VenueScopeCtx(scope): VenueScopeCtx,
) -> Result<Json<Vec<Venue>>, AppError> {
    let venues = app_state.venue_store.list_in(&scope.venue_ids)?;
    Ok(Json(venues))
}

// GET /api/venues/{id}
#[utoipa::path(
    get,
    path = "/api/venues/{id}",
    tag = "Venues",
    responses(
        (status = 200, description = "Detalhe da casa", body = Venue),
        (status = 404, description = "Casa fora do escopo ou inexistente")
    ),
    params(
        ("id" = Uuid, Path, description = "ID da casa")
    ),
    security(("api_jwt" = []))
)]
pub async fn get_venue(
    State(app_state): State<AppState>,
    VenueScopeCtx(scope): VenueScopeCtx,
    Path(id): Path<Uuid>,
) -> Result<Json<Venue>, AppError> {
    if !scope.contains(id) {
        // Fora do escopo responde 404, sem confirmar a existência
        return Err(AppError::NotFound("Casa"));
    }
    let venue = app_state
        .venue_store
        .find(id)?
        .ok_or(AppError::NotFound("Casa"))?;
    Ok(Json(venue))
}
