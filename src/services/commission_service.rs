// src/services/commission_service.rs

use chrono::NaiveDate;
use rust_decimal::Decimal;
use uuid::Uuid;

use crate::{
    common::error::AppError,
    models::{
        booking::Booking,
        dashboard::PayoutSummary,
        pricing::{CommissionRate, CommissionReason, CommissionResult, RateModel},
        venue::VenueScope,
    },
    services::pricing_service::round_money,
    store::{BookingStore, PricingStore, PromoterStore},
};

// --- Cálculo puro ---

// Comissão de uma reserva sob uma taxa de nível.
// Nunca falha: reserva inelegível vira resultado zero com motivo auditável.
pub fn calculate_commission(booking: &Booking, rate: &CommissionRate) -> CommissionResult {
    if !booking.status.is_revenue_eligible() {
        return CommissionResult {
            amount: Decimal::ZERO,
            applied_cap_amount: None,
            reason: Some(CommissionReason::BookingNotEligible),
        };
    }

    // Faixa de valor em que a taxa se aplica
    let booking_value = booking.total_amount;
    let below_min = rate
        .min_booking_value
        .is_some_and(|min| booking_value < min);
    let above_max = rate
        .max_booking_value
        .is_some_and(|max| booking_value > max);
    if below_min || above_max {
        return CommissionResult {
            amount: Decimal::ZERO,
            applied_cap_amount: None,
            reason: Some(CommissionReason::OutsideValueBounds),
        };
    }

    let raw_amount = match rate.model {
        RateModel::PerCover => Decimal::from(booking.party_size) * rate.rate,
        RateModel::PercentOfSpend => round_money(booking_value * rate.rate),
    };

    // O teto trava o valor, mas o montante pré-teto fica registrado
    if let Some(cap) = rate.max_commission {
        if raw_amount > cap {
            return CommissionResult {
                amount: cap,
                applied_cap_amount: Some(raw_amount),
                reason: None,
            };
        }
    }

    CommissionResult {
        amount: raw_amount,
        applied_cap_amount: None,
        reason: None,
    }
}

// --- Serviço ---

#[derive(Clone)]
pub struct CommissionService {
    pricing_store: PricingStore,
    promoter_store: PromoterStore,
    booking_store: BookingStore,
}

impl CommissionService {
    pub fn new(
        pricing_store: PricingStore,
        promoter_store: PromoterStore,
        booking_store: BookingStore,
    ) -> Self {
        Self {
            pricing_store,
            promoter_store,
            booking_store,
        }
    }

    // Comissão de uma reserva concreta, resolvendo o nível do promoter.
    // Reserva sem promoter não gera comissão.
    pub fn commission_for(&self, booking: &Booking) -> Result<CommissionResult, AppError> {
        let Some(promoter_id) = booking.promoter_id else {
            return Ok(CommissionResult {
                amount: Decimal::ZERO,
                applied_cap_amount: None,
                reason: None,
            });
        };

        let promoter = self
            .promoter_store
            .find(promoter_id)?
            .ok_or(AppError::NotFound("Promoter"))?;
        let rate = self
            .pricing_store
            .rate_for_tier(promoter.tier)?
            .ok_or(AppError::NotFound("Taxa de comissão"))?;

        Ok(calculate_commission(booking, &rate))
    }

    // Consolidado de repasses por promoter dentro do escopo e do período
    pub fn payout_summaries(
        &self,
        scope: &VenueScope,
        from: Option<NaiveDate>,
        to: Option<NaiveDate>,
    ) -> Result<Vec<PayoutSummary>, AppError> {
        let promoters = self.promoter_store.list_in(&scope.venue_ids)?;
        let bookings = self.booking_store.list(&scope.venue_ids, None, None)?;

        let mut summaries = Vec::with_capacity(promoters.len());
        for promoter in promoters {
            let rate = self
                .pricing_store
                .rate_for_tier(promoter.tier)?
                .ok_or(AppError::NotFound("Taxa de comissão"))?;

            let mut eligible_bookings = 0i64;
            let mut total_commission = Decimal::ZERO;
            let mut capped_bookings = 0i64;

            for booking in bookings
                .iter()
                .filter(|b| b.promoter_id == Some(promoter.id))
            {
                let date = booking.scheduled_at.date_naive();
                if from.is_some_and(|f| date < f) || to.is_some_and(|t| date > t) {
                    continue;
                }

                let result = calculate_commission(booking, &rate);
                if result.reason.is_some() {
                    continue;
                }
                eligible_bookings += 1;
                total_commission += result.amount;
                if result.applied_cap_amount.is_some() {
                    capped_bookings += 1;
                }
            }

            summaries.push(PayoutSummary {
                promoter_id: promoter.id,
                promoter_name: promoter.name,
                tier: promoter.tier,
                eligible_bookings,
                total_commission,
                capped_bookings,
            });
        }

        Ok(summaries)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::booking::{BookingStatus, PricingClass};
    use crate::models::promoter::PromoterTier;
    use chrono::Utc;

    fn booking(status: BookingStatus, party_size: i32, total: Decimal) -> Booking {
        let now = Utc::now();
        Booking {
            id: Uuid::new_v4(),
            venue_id: Uuid::new_v4(),
            promoter_id: Some(Uuid::new_v4()),
            guest_name: "Clara Nunes".into(),
            guest_phone: "+55 11 98888-1234".into(),
            guest_email: "clara@example.com".into(),
            party_size,
            scheduled_at: now,
            status,
            pricing_class: PricingClass::Prime,
            prime_total: total,
            non_prime_total: total,
            total_amount: total,
            commission_amount: Decimal::ZERO,
            created_at: now,
            updated_at: now,
        }
    }

    fn per_cover_rate(rate: Decimal) -> CommissionRate {
        CommissionRate {
            id: Uuid::new_v4(),
            tier: PromoterTier::Standard,
            model: RateModel::PerCover,
            rate,
            min_booking_value: None,
            max_booking_value: None,
            max_commission: None,
        }
    }

    #[test]
    fn per_cover_confirmada() {
        let b = booking(BookingStatus::Confirmed, 4, Decimal::new(12000, 2));
        let result = calculate_commission(&b, &per_cover_rate(Decimal::from(8)));
        assert_eq!(result.amount, Decimal::from(32));
        assert_eq!(result.applied_cap_amount, None);
        assert_eq!(result.reason, None);
    }

    #[test]
    fn cancelada_nao_gera_comissao() {
        let b = booking(BookingStatus::Cancelled, 4, Decimal::new(12000, 2));
        let result = calculate_commission(&b, &per_cover_rate(Decimal::from(8)));
        assert_eq!(result.amount, Decimal::ZERO);
        assert_eq!(result.reason, Some(CommissionReason::BookingNotEligible));
    }

    #[test]
    fn no_show_e_pending_tambem_nao_geram() {
        for status in [BookingStatus::NoShow, BookingStatus::Pending] {
            let b = booking(status, 4, Decimal::new(12000, 2));
            let result = calculate_commission(&b, &per_cover_rate(Decimal::from(8)));
            assert_eq!(result.amount, Decimal::ZERO);
            assert_eq!(result.reason, Some(CommissionReason::BookingNotEligible));
        }
    }

    #[test]
    fn completed_conta_como_confirmada() {
        let b = booking(BookingStatus::Completed, 2, Decimal::new(8800, 2));
        let result = calculate_commission(&b, &per_cover_rate(Decimal::from(8)));
        assert_eq!(result.amount, Decimal::from(16));
        assert_eq!(result.reason, None);
    }

    #[test]
    fn percent_of_spend_arredonda_half_up() {
        let mut rate = per_cover_rate(Decimal::new(65, 3)); // 0.065
        rate.model = RateModel::PercentOfSpend;
        // 77.77 * 0.065 = 5.05505 => 5.06
        let b = booking(BookingStatus::Confirmed, 2, Decimal::new(7777, 2));
        let result = calculate_commission(&b, &rate);
        assert_eq!(result.amount, Decimal::new(506, 2));
    }

    #[test]
    fn teto_preserva_o_valor_original() {
        let mut rate = per_cover_rate(Decimal::from(8));
        rate.max_commission = Some(Decimal::from(25));
        let b = booking(BookingStatus::Confirmed, 6, Decimal::new(25000, 2));
        let result = calculate_commission(&b, &rate);
        assert_eq!(result.amount, Decimal::from(25));
        assert_eq!(result.applied_cap_amount, Some(Decimal::from(48)));
        assert!(result.amount <= rate.max_commission.unwrap());
        assert_eq!(result.reason, None);
    }

    #[test]
    fn teto_igual_nao_marca_cap() {
        let mut rate = per_cover_rate(Decimal::from(8));
        rate.max_commission = Some(Decimal::from(32));
        let b = booking(BookingStatus::Confirmed, 4, Decimal::new(12000, 2));
        let result = calculate_commission(&b, &rate);
        assert_eq!(result.amount, Decimal::from(32));
        assert_eq!(result.applied_cap_amount, None);
    }

    #[test]
    fn valor_fora_da_faixa_zera_com_motivo() {
        let mut rate = per_cover_rate(Decimal::from(8));
        rate.min_booking_value = Some(Decimal::from(100));
        let b = booking(BookingStatus::Confirmed, 2, Decimal::new(8800, 2));
        let result = calculate_commission(&b, &rate);
        assert_eq!(result.amount, Decimal::ZERO);
        assert_eq!(result.reason, Some(CommissionReason::OutsideValueBounds));

        let mut rate = per_cover_rate(Decimal::from(8));
        rate.max_booking_value = Some(Decimal::from(50));
        let result = calculate_commission(&b, &rate);
        assert_eq!(result.reason, Some(CommissionReason::OutsideValueBounds));
    }
}
