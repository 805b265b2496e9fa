// src/handlers/dashboard.rs

use axum::{Json, extract::State};
use uuid::Uuid;

use crate::{
    common::error::AppError,
    config::AppState,
    middleware::{
        rbac::{PermFinancialRead, RequirePermission},
        scope::VenueScopeCtx,
    },
    models::dashboard::DashboardSummary,
};

// GET /api/dashboard/summary
#[utoipa::path(
    get,
    path = "/api/dashboard/summary",
    tag = "Dashboard",
    responses(
        (status = 200, description = "KPIs do escopo: últimos 30 dias vs. 30 anteriores", body = DashboardSummary),
        (status = 401, description = "Não autorizado"),
        (status = 403, description = "Sem permissão financial:read")
    ),
    params(
        ("x-venue-id" = Option<Uuid>, Header, description = "Casa selecionada; ausente = portfólio")
    ),
    security(("api_jwt" = []))
)]
pub async fn get_summary(
    State(app_state): State<AppState>,
    VenueScopeCtx(scope): VenueScopeCtx,
    _perm: RequirePermission<PermFinancialRead>,
) -> Result<Json<DashboardSummary>, AppError> {
    let summary = app_state.dashboard_service.summary(&scope)?;
    Ok(Json(summary))
}
