// src/models/booking.rs

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

// --- Enums ---

// Máquina de estados da reserva:
// Pending -> {Confirmed, Cancelled}
// Confirmed -> {Cancelled, NoShow, Completed}
// Cancelled / NoShow / Completed são terminais.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BookingStatus {
    Pending,
    Confirmed,
    Cancelled,
    NoShow,
    Completed,
}

impl BookingStatus {
    // Qualquer transição não listada aqui é inválida. Não existe default-allow.
    pub fn can_transition_to(self, to: Self) -> bool {
        matches!(
            (self, to),
            (Self::Pending, Self::Confirmed)
                | (Self::Pending, Self::Cancelled)
                | (Self::Confirmed, Self::Cancelled)
                | (Self::Confirmed, Self::NoShow)
                | (Self::Confirmed, Self::Completed)
        )
    }

    pub fn is_terminal(self) -> bool {
        matches!(self, Self::Cancelled | Self::NoShow | Self::Completed)
    }

    // Status que contam para receita, KPIs e comissão.
    // Decisão registrada no DESIGN.md: Completed conta igual a Confirmed.
    pub fn is_revenue_eligible(self) -> bool {
        matches!(self, Self::Confirmed | Self::Completed)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "PENDING",
            Self::Confirmed => "CONFIRMED",
            Self::Cancelled => "CANCELLED",
            Self::NoShow => "NO_SHOW",
            Self::Completed => "COMPLETED",
        }
    }
}

impl std::fmt::Display for BookingStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

// Classificação de precificação do horário
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PricingClass {
    Prime,
    NonPrime,
}

// --- Structs ---

#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Booking {
    pub id: Uuid,
    pub venue_id: Uuid,
    pub promoter_id: Option<Uuid>,

    #[schema(example = "Clara Nunes")]
    pub guest_name: String,
    #[schema(example = "+55 11 98888-1234")]
    pub guest_phone: String,
    #[schema(example = "clara@example.com")]
    pub guest_email: String,

    #[schema(example = 4)]
    pub party_size: i32,
    pub scheduled_at: DateTime<Utc>,

    pub status: BookingStatus,
    pub pricing_class: PricingClass,

    // Valores calculados na criação pelo motor financeiro
    #[schema(example = "154.00")]
    pub prime_total: Decimal,
    #[schema(example = "99.00")]
    pub non_prime_total: Decimal,
    // Valor cobrado segundo a classe da reserva (base do percent-of-spend)
    #[schema(example = "154.00")]
    pub total_amount: Decimal,
    #[schema(example = "32.00")]
    pub commission_amount: Decimal,

    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

// Payload de criação de reserva
#[derive(Debug, Deserialize, Validate, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct CreateBookingPayload {
    pub venue_id: Uuid,
    pub promoter_id: Option<Uuid>,

    #[validate(length(min = 2, message = "O nome do hóspede é obrigatório."))]
    pub guest_name: String,
    #[validate(length(min = 8, message = "O telefone do hóspede é inválido."))]
    pub guest_phone: String,
    #[validate(email(message = "O e-mail do hóspede é inválido."))]
    pub guest_email: String,

    #[validate(range(min = 1, message = "A reserva precisa de ao menos 1 pessoa."))]
    pub party_size: i32,
    pub scheduled_at: DateTime<Utc>,
    pub pricing_class: PricingClass,
}

// Payload de transição de status
#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct TransitionBookingPayload {
    pub status: BookingStatus,
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: [BookingStatus; 5] = [
        BookingStatus::Pending,
        BookingStatus::Confirmed,
        BookingStatus::Cancelled,
        BookingStatus::NoShow,
        BookingStatus::Completed,
    ];

    #[test]
    fn pending_so_vai_para_confirmed_ou_cancelled() {
        assert!(BookingStatus::Pending.can_transition_to(BookingStatus::Confirmed));
        assert!(BookingStatus::Pending.can_transition_to(BookingStatus::Cancelled));
        assert!(!BookingStatus::Pending.can_transition_to(BookingStatus::Completed));
        assert!(!BookingStatus::Pending.can_transition_to(BookingStatus::NoShow));
        assert!(!BookingStatus::Pending.can_transition_to(BookingStatus::Pending));
    }

    #[test]
    fn confirmed_tem_tres_saidas() {
        assert!(BookingStatus::Confirmed.can_transition_to(BookingStatus::Cancelled));
        assert!(BookingStatus::Confirmed.can_transition_to(BookingStatus::NoShow));
        assert!(BookingStatus::Confirmed.can_transition_to(BookingStatus::Completed));
        assert!(!BookingStatus::Confirmed.can_transition_to(BookingStatus::Pending));
        assert!(!BookingStatus::Confirmed.can_transition_to(BookingStatus::Confirmed));
    }

    #[test]
    fn status_terminais_nao_tem_saida() {
        for from in [
            BookingStatus::Cancelled,
            BookingStatus::NoShow,
            BookingStatus::Completed,
        ] {
            assert!(from.is_terminal());
            for to in ALL {
                assert!(
                    !from.can_transition_to(to),
                    "{from} -> {to} deveria ser inválida"
                );
            }
        }
    }

    #[test]
    fn cancelled_nao_volta_para_confirmed() {
        assert!(!BookingStatus::Cancelled.can_transition_to(BookingStatus::Confirmed));
    }

    #[test]
    fn elegibilidade_de_receita() {
        assert!(BookingStatus::Confirmed.is_revenue_eligible());
        assert!(BookingStatus::Completed.is_revenue_eligible());
        assert!(!BookingStatus::Pending.is_revenue_eligible());
        assert!(!BookingStatus::Cancelled.is_revenue_eligible());
        assert!(!BookingStatus::NoShow.is_revenue_eligible());
    }
}
