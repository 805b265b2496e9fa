// src/handlers/payouts.rs

use axum::{
    Json,
    extract::{Query, State},
};
use chrono::NaiveDate;
use serde::Deserialize;
use utoipa::IntoParams;
use uuid::Uuid;

use crate::{
    common::error::AppError,
    config::AppState,
    middleware::{
        rbac::{PermCommissionRead, RequirePermission},
        scope::VenueScopeCtx,
    },
    models::dashboard::PayoutSummary,
};

#[derive(Debug, Deserialize, IntoParams)]
#[serde(rename_all = "camelCase")]
pub struct PayoutQuery {
    pub from: Option<NaiveDate>,
    pub to: Option<NaiveDate>,
}

// GET /api/payouts
#[utoipa::path(
    get,
    path = "/api/payouts",
    tag = "Payouts",
    responses(
        (status = 200, description = "Consolidado de comissões por promoter no período", body = Vec<PayoutSummary>),
        (status = 403, description = "Sem permissão commission:read")
    ),
    params(
        PayoutQuery,
        ("x-venue-id" = Option<Uuid>, Header, description = "Casa selecionada; ausente = portfólio")
    ),
    security(("api_jwt" = []))
)]
pub async fn list_payouts(
    State(app_state): State<AppState>,
    VenueScopeCtx(scope): VenueScopeCtx,
    _perm: RequirePermission<PermCommissionRead>,
    Query(query): Query<PayoutQuery>,
) -> Result<Json<Vec<PayoutSummary>>, AppError> {
    let summaries = app_state
        .commission_service
        .payout_summaries(&scope, query.from, query.to)?;
    Ok(Json(summaries))
}
