// src/handlers/bookings.rs

use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
};
use chrono::NaiveDate;
use serde::Deserialize;
use utoipa::IntoParams;
use uuid::Uuid;

use crate::{
    common::error::AppError,
    config::AppState,
    middleware::{
        auth::AuthenticatedUser,
        rbac::{PermBookingRead, PermBookingWrite, RequirePermission},
        scope::VenueScopeCtx,
    },
    models::booking::{
        Booking, BookingStatus, CreateBookingPayload, TransitionBookingPayload,
    },
    services::access_service,
};
use validator::Validate;

#[derive(Debug, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
pub struct BookingListQuery {
    pub status: Option<BookingStatus>,
    pub date: Option<NaiveDate>,
}

// GET /api/bookings
#[utoipa::path(
    get,
    path = "/api/bookings",
    tag = "Bookings",
    responses(
        (status = 200, description = "Reservas do escopo, contato mascarado pelo nível de acesso", body = Vec<Booking>),
        (status = 401, description = "Não autorizado"),
        (status = 403, description = "Sem permissão booking:read")
    ),
    params(
        BookingListQuery,
        ("x-venue-id" = Option<Uuid>, Header, description = "Casa selecionada; ausente = portfólio")
    ),
    security(("api_jwt" = []))
)]
pub async fn list_bookings(
    State(app_state): State<AppState>,
    AuthenticatedUser(session): AuthenticatedUser,
    VenueScopeCtx(scope): VenueScopeCtx,
    _perm: RequirePermission<PermBookingRead>,
    Query(query): Query<BookingListQuery>,
) -> Result<Json<Vec<Booking>>, AppError> {
    let level = access_service::data_access_level(session.role);
    let bookings = app_state
        .booking_service
        .list(&scope, query.status, query.date, level)?;
    Ok(Json(bookings))
}

// POST /api/bookings
#[utoipa::path(
    post,
    path = "/api/bookings",
    tag = "Bookings",
    request_body = CreateBookingPayload,
    responses(
        (status = 201, description = "Reserva criada como Pending, valores já calculados", body = Booking),
        (status = 400, description = "Grupo fora dos limites da casa"),
        (status = 403, description = "Casa fora do escopo ou sem permissão booking:write")
    ),
    params(
        ("x-venue-id" = Option<Uuid>, Header, description = "Casa selecionada; ausente = portfólio")
    ),
    security(("api_jwt" = []))
)]
pub async fn create_booking(
    State(app_state): State<AppState>,
    VenueScopeCtx(scope): VenueScopeCtx,
    _perm: RequirePermission<PermBookingWrite>,
    Json(payload): Json<CreateBookingPayload>,
) -> Result<impl IntoResponse, AppError> {
    payload.validate().map_err(AppError::ValidationError)?;

    let booking = app_state.booking_service.create(&scope, payload)?;
    Ok((StatusCode::CREATED, Json(booking)))
}

// PATCH /api/bookings/{id}/status
#[utoipa::path(
    patch,
    path = "/api/bookings/{id}/status",
    tag = "Bookings",
    request_body = TransitionBookingPayload,
    responses(
        (status = 200, description = "Status alterado; comissão recalculada", body = Booking),
        (status = 404, description = "Reserva inexistente ou fora do escopo"),
        (status = 409, description = "Transição não permitida pela máquina de estados")
    ),
    params(
        ("id" = Uuid, Path, description = "ID da reserva"),
        ("x-venue-id" = Option<Uuid>, Header, description = "Casa selecionada; ausente = portfólio")
    ),
    security(("api_jwt" = []))
)]
pub async fn transition_booking(
    State(app_state): State<AppState>,
    VenueScopeCtx(scope): VenueScopeCtx,
    _perm: RequirePermission<PermBookingWrite>,
    Path(id): Path<Uuid>,
    Json(payload): Json<TransitionBookingPayload>,
) -> Result<Json<Booking>, AppError> {
    let booking = app_state
        .booking_service
        .transition(id, payload.status, &scope)?;
    Ok(Json(booking))
}
