// src/models/pricing.rs

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::models::promoter::PromoterTier;

// --- Enums ---

// Modelo de cálculo da comissão
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RateModel {
    // Valor fixo por pessoa na reserva
    PerCover,
    // Percentual sobre o valor cobrado da reserva
    PercentOfSpend,
}

// Motivo de uma comissão zerada (não é erro — é resultado auditável)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CommissionReason {
    BookingNotEligible,
    OutsideValueBounds,
}

// --- Structs de configuração ---

// Configuração de preços por casa. Exatamente uma ativa por casa.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PricingConfig {
    pub id: Uuid,

    #[schema(ignore)]
    pub venue_id: Uuid,

    // Prime: base cobre os 2 primeiros, adicional por pessoa extra
    #[schema(example = "80.00")]
    pub base_for_two: Decimal,
    #[schema(example = "30.00")]
    pub additional_per_person: Decimal,

    // Non-Prime: por pessoa, com piso opcional
    #[schema(example = "22.50")]
    pub non_prime_per_diner: Decimal,
    #[schema(example = "45.00")]
    pub non_prime_minimum: Option<Decimal>,

    // Percentual como fração (0.10 = 10%)
    #[schema(example = "0.10")]
    pub platform_fee_percent: Decimal,

    #[schema(example = 1)]
    pub min_party_size: i32,
    #[schema(example = 12)]
    pub max_party_size: i32,

    #[schema(value_type = String, format = Date, example = "2026-01-01")]
    pub effective_from: NaiveDate,
    pub is_active: bool,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct UpdatePricingPayload {
    #[schema(example = "80.00")]
    pub base_for_two: Decimal,
    #[schema(example = "30.00")]
    pub additional_per_person: Decimal,
    #[schema(example = "22.50")]
    pub non_prime_per_diner: Decimal,
    pub non_prime_minimum: Option<Decimal>,
    #[schema(example = "0.10")]
    pub platform_fee_percent: Decimal,

    #[validate(range(min = 1, message = "O tamanho mínimo de grupo deve ser ao menos 1."))]
    pub min_party_size: i32,
    #[validate(range(min = 1, message = "O tamanho máximo de grupo deve ser ao menos 1."))]
    pub max_party_size: i32,
}

// Taxa de comissão por nível de promoter
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CommissionRate {
    pub id: Uuid,
    pub tier: PromoterTier,
    pub model: RateModel,

    #[schema(example = "8.00")]
    pub rate: Decimal,

    // Faixa de valor de reserva em que a taxa se aplica
    pub min_booking_value: Option<Decimal>,
    pub max_booking_value: Option<Decimal>,

    // Teto da comissão. Quando aplicado, o valor pré-teto fica registrado.
    pub max_commission: Option<Decimal>,
}

// --- Resultados calculados ---

#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PrimePricingBreakdown {
    pub base: Decimal,
    pub additional: Decimal,
    pub subtotal: Decimal,
    pub platform_fee: Decimal,
    pub total: Decimal,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct NonPrimePricingBreakdown {
    pub base: Decimal,
    pub platform_fee: Decimal,
    pub total: Decimal,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CommissionResult {
    pub amount: Decimal,
    // Valor original antes do teto, preservado para auditoria
    pub applied_cap_amount: Option<Decimal>,
    pub reason: Option<CommissionReason>,
}

#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PreviewPricingPayload {
    #[validate(range(min = 1, message = "A simulação precisa de ao menos 1 pessoa."))]
    pub party_size: i32,
}

#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct PricingPreview {
    pub party_size: i32,
    pub prime: PrimePricingBreakdown,
    pub non_prime: NonPrimePricingBreakdown,
}
