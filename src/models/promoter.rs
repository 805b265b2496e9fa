// src/models/promoter.rs

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

// --- Enums ---

// Níveis de comissão, em ordem crescente
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PromoterTier {
    Standard,
    Premium,
    Vip,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PromoterStatus {
    Active,
    Inactive,
}

// --- Structs ---

// Métricas agregadas exibidas no painel do promoter
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PromoterMetrics {
    #[schema(example = 42)]
    pub total_bookings: i64,
    #[schema(example = 35)]
    pub completed_bookings: i64,
    #[schema(example = 4)]
    pub cancelled_bookings: i64,
    #[schema(example = "6230.00")]
    pub total_revenue: Decimal,
    #[schema(example = "498.40")]
    pub total_commission: Decimal,
}

#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Promoter {
    pub id: Uuid,

    #[schema(example = "Rafael Lima")]
    pub name: String,
    #[schema(example = "rafael@promo.agency")]
    pub email: String,

    pub tier: PromoterTier,
    pub status: PromoterStatus,

    // Casas onde o promoter pode atuar
    pub venue_ids: Vec<Uuid>,

    pub metrics: PromoterMetrics,
}

// O nível só muda por atribuição explícita, nunca como efeito colateral
#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AssignTierPayload {
    pub tier: PromoterTier,
}
