// src/models/dashboard.rs

use rust_decimal::Decimal;
use serde::Serialize;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::models::promoter::PromoterTier;

// Métrica monetária com comparação contra o período anterior
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct MoneyMetric {
    #[schema(example = "12480.00")]
    pub current: Decimal,
    #[schema(example = "10310.00")]
    pub previous: Decimal,
    pub change: Decimal,
    // Em pontos percentuais; 0 quando o período anterior é zero
    pub change_percent: Decimal,
}

// Métrica de contagem com comparação contra o período anterior
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CountMetric {
    #[schema(example = 87)]
    pub current: i64,
    #[schema(example = 74)]
    pub previous: i64,
    pub change: i64,
    pub change_percent: Decimal,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DashboardSummary {
    pub total_revenue: MoneyMetric,
    pub total_bookings: CountMetric,
    pub total_diners: CountMetric,
    pub average_booking_value: MoneyMetric,

    // Contadores à parte: não entram nas métricas positivas
    pub cancelled_bookings: i64,
    pub no_show_bookings: i64,
}

// Consolidado de comissões por promoter no período
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PayoutSummary {
    pub promoter_id: Uuid,
    pub promoter_name: String,
    pub tier: PromoterTier,

    #[schema(example = 18)]
    pub eligible_bookings: i64,
    #[schema(example = "412.00")]
    pub total_commission: Decimal,
    // Quantas reservas tiveram o teto de comissão aplicado
    #[schema(example = 2)]
    pub capped_bookings: i64,
}
