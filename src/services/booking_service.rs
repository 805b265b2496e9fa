// src/services/booking_service.rs

use chrono::{NaiveDate, Utc};
use rust_decimal::Decimal;
use uuid::Uuid;

use crate::{
    common::error::AppError,
    models::{
        booking::{Booking, BookingStatus, CreateBookingPayload, PricingClass},
        rbac::DataAccessLevel,
        venue::VenueScope,
    },
    services::{
        access_service,
        commission_service::CommissionService,
        pricing_service::{
            PricingService, calculate_non_prime_pricing, calculate_prime_pricing,
            ensure_party_within_bounds,
        },
    },
    store::BookingStore,
};

// Validação da máquina de estados da reserva. Qualquer par fora da
// tabela é inválido — ver BookingStatus::can_transition_to.
pub fn validate_transition(from: BookingStatus, to: BookingStatus) -> bool {
    from.can_transition_to(to)
}

#[derive(Clone)]
pub struct BookingService {
    store: BookingStore,
    pricing_service: PricingService,
    commission_service: CommissionService,
}

impl BookingService {
    pub fn new(
        store: BookingStore,
        pricing_service: PricingService,
        commission_service: CommissionService,
    ) -> Self {
        Self {
            store,
            pricing_service,
            commission_service,
        }
    }

    // Lista as reservas do escopo com o contato do hóspede mascarado
    // conforme o nível de acesso da sessão
    pub fn list(
        &self,
        scope: &VenueScope,
        status: Option<BookingStatus>,
        date: Option<NaiveDate>,
        level: DataAccessLevel,
    ) -> Result<Vec<Booking>, AppError> {
        let bookings = self.store.list(&scope.venue_ids, status, date)?;
        Ok(bookings
            .into_iter()
            .map(|b| access_service::mask_booking(b, level))
            .collect())
    }

    pub fn get(
        &self,
        id: Uuid,
        scope: &VenueScope,
        level: DataAccessLevel,
    ) -> Result<Booking, AppError> {
        let booking = self.find_in_scope(id, scope)?;
        Ok(access_service::mask_booking(booking, level))
    }

    // Cria a reserva já com os valores calculados pelo motor financeiro.
    // Nasce Pending, portanto sem comissão ainda.
    pub fn create(
        &self,
        scope: &VenueScope,
        payload: CreateBookingPayload,
    ) -> Result<Booking, AppError> {
        if !scope.contains(payload.venue_id) {
            return Err(AppError::AccessDenied(format!(
                "a casa {} não está no escopo da sessão.",
                payload.venue_id
            )));
        }

        let config = self.pricing_service.active_config(payload.venue_id)?;
        ensure_party_within_bounds(&config, payload.party_size)?;

        let prime = calculate_prime_pricing(payload.party_size, &config)?;
        let non_prime = calculate_non_prime_pricing(payload.party_size, &config)?;
        let total_amount = match payload.pricing_class {
            PricingClass::Prime => prime.total,
            PricingClass::NonPrime => non_prime.total,
        };

        let now = Utc::now();
        let booking = Booking {
            id: Uuid::new_v4(),
            venue_id: payload.venue_id,
            promoter_id: payload.promoter_id,
            guest_name: payload.guest_name,
            guest_phone: payload.guest_phone,
            guest_email: payload.guest_email,
            party_size: payload.party_size,
            scheduled_at: payload.scheduled_at,
            status: BookingStatus::Pending,
            pricing_class: payload.pricing_class,
            prime_total: prime.total,
            non_prime_total: non_prime.total,
            total_amount,
            commission_amount: Decimal::ZERO,
            created_at: now,
            updated_at: now,
        };

        self.store.insert(booking)
    }

    // Transição de status com a máquina de estados como guarda.
    // Ao entrar num status elegível, a comissão é recalculada; ao sair
    // dele (cancelamento/no-show), volta a zero.
    pub fn transition(
        &self,
        id: Uuid,
        new_status: BookingStatus,
        scope: &VenueScope,
    ) -> Result<Booking, AppError> {
        let booking = self.find_in_scope(id, scope)?;

        if !validate_transition(booking.status, new_status) {
            return Err(AppError::InvalidTransition {
                from: booking.status,
                to: new_status,
            });
        }

        let mut updated = booking;
        updated.status = new_status;
        updated.updated_at = Utc::now();
        updated.commission_amount = if new_status.is_revenue_eligible() {
            self.commission_service.commission_for(&updated)?.amount
        } else {
            Decimal::ZERO
        };

        self.store.replace(updated)
    }

    fn find_in_scope(&self, id: Uuid, scope: &VenueScope) -> Result<Booking, AppError> {
        let booking = self.store.find(id)?.ok_or(AppError::NotFound("Reserva"))?;
        if !scope.contains(booking.venue_id) {
            // Fora do escopo responde como inexistente, sem vazar que a reserva existe
            return Err(AppError::NotFound("Reserva"));
        }
        Ok(booking)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{
        pricing::{CommissionRate, PricingConfig, RateModel},
        promoter::{Promoter, PromoterMetrics, PromoterStatus, PromoterTier},
    };
    use crate::store::{PricingStore, PromoterStore};
    use chrono::Duration;

    struct Fixture {
        service: BookingService,
        scope: VenueScope,
        venue_id: Uuid,
        promoter_id: Uuid,
        pending_id: Uuid,
    }

    fn fixture() -> Fixture {
        let venue_id = Uuid::new_v4();
        let promoter_id = Uuid::new_v4();
        let pending_id = Uuid::new_v4();
        let now = Utc::now();

        let config = PricingConfig {
            id: Uuid::new_v4(),
            venue_id,
            base_for_two: Decimal::new(8000, 2),
            additional_per_person: Decimal::new(3000, 2),
            non_prime_per_diner: Decimal::new(2250, 2),
            non_prime_minimum: None,
            platform_fee_percent: Decimal::new(10, 2),
            min_party_size: 1,
            max_party_size: 10,
            effective_from: now.date_naive(),
            is_active: true,
        };
        let rate = CommissionRate {
            id: Uuid::new_v4(),
            tier: PromoterTier::Standard,
            model: RateModel::PerCover,
            rate: Decimal::from(8),
            min_booking_value: None,
            max_booking_value: None,
            max_commission: None,
        };
        let promoter = Promoter {
            id: promoter_id,
            name: "Rafael Lima".into(),
            email: "rafael@promo.agency".into(),
            tier: PromoterTier::Standard,
            status: PromoterStatus::Active,
            venue_ids: vec![venue_id],
            metrics: PromoterMetrics {
                total_bookings: 0,
                completed_bookings: 0,
                cancelled_bookings: 0,
                total_revenue: Decimal::ZERO,
                total_commission: Decimal::ZERO,
            },
        };
        let pending = Booking {
            id: pending_id,
            venue_id,
            promoter_id: Some(promoter_id),
            guest_name: "Clara Nunes".into(),
            guest_phone: "+55 11 98888-1234".into(),
            guest_email: "clara@example.com".into(),
            party_size: 4,
            scheduled_at: now + Duration::days(2),
            status: BookingStatus::Pending,
            pricing_class: PricingClass::Prime,
            prime_total: Decimal::new(15400, 2),
            non_prime_total: Decimal::new(9900, 2),
            total_amount: Decimal::new(15400, 2),
            commission_amount: Decimal::ZERO,
            created_at: now,
            updated_at: now,
        };

        let booking_store = BookingStore::new(vec![pending]);
        let pricing_store = PricingStore::new(vec![config], vec![rate]);
        let promoter_store = PromoterStore::new(vec![promoter]);
        let pricing_service = PricingService::new(pricing_store.clone());
        let commission_service =
            CommissionService::new(pricing_store, promoter_store, booking_store.clone());
        let service = BookingService::new(booking_store, pricing_service, commission_service);

        Fixture {
            service,
            scope: VenueScope {
                venue_ids: vec![venue_id],
                is_portfolio: false,
            },
            venue_id,
            promoter_id,
            pending_id,
        }
    }

    fn payload(venue_id: Uuid, promoter_id: Option<Uuid>, party_size: i32) -> CreateBookingPayload {
        CreateBookingPayload {
            venue_id,
            promoter_id,
            guest_name: "Diego Antunes".into(),
            guest_phone: "+55 21 97777-0000".into(),
            guest_email: "diego@example.com".into(),
            party_size,
            scheduled_at: Utc::now() + Duration::days(1),
            pricing_class: PricingClass::Prime,
        }
    }

    #[test]
    fn criacao_calcula_valores_e_nasce_pending() {
        let fx = fixture();
        let booking = fx
            .service
            .create(&fx.scope, payload(fx.venue_id, Some(fx.promoter_id), 4))
            .unwrap();

        assert_eq!(booking.status, BookingStatus::Pending);
        assert_eq!(booking.prime_total, Decimal::new(15400, 2));
        assert_eq!(booking.total_amount, Decimal::new(15400, 2));
        assert_eq!(booking.commission_amount, Decimal::ZERO);
    }

    #[test]
    fn criacao_fora_do_escopo_e_negada() {
        let fx = fixture();
        let err = fx
            .service
            .create(&fx.scope, payload(Uuid::new_v4(), None, 4))
            .unwrap_err();
        assert!(matches!(err, AppError::AccessDenied(_)));
    }

    #[test]
    fn criacao_com_grupo_fora_dos_limites_e_rejeitada() {
        let fx = fixture();
        let err = fx
            .service
            .create(&fx.scope, payload(fx.venue_id, None, 11))
            .unwrap_err();
        assert!(matches!(err, AppError::InvalidInput(_)));
    }

    #[test]
    fn confirmar_recalcula_a_comissao() {
        let fx = fixture();
        let booking = fx
            .service
            .transition(fx.pending_id, BookingStatus::Confirmed, &fx.scope)
            .unwrap();
        assert_eq!(booking.status, BookingStatus::Confirmed);
        // PerCover: 4 pessoas x 8
        assert_eq!(booking.commission_amount, Decimal::from(32));
    }

    #[test]
    fn cancelar_zera_a_comissao() {
        let fx = fixture();
        fx.service
            .transition(fx.pending_id, BookingStatus::Confirmed, &fx.scope)
            .unwrap();
        let booking = fx
            .service
            .transition(fx.pending_id, BookingStatus::Cancelled, &fx.scope)
            .unwrap();
        assert_eq!(booking.commission_amount, Decimal::ZERO);
    }

    #[test]
    fn transicao_invalida_e_conflito() {
        let fx = fixture();
        let err = fx
            .service
            .transition(fx.pending_id, BookingStatus::Completed, &fx.scope)
            .unwrap_err();
        assert!(matches!(
            err,
            AppError::InvalidTransition {
                from: BookingStatus::Pending,
                to: BookingStatus::Completed,
            }
        ));
    }

    #[test]
    fn reserva_fora_do_escopo_responde_como_inexistente() {
        let fx = fixture();
        let outro_escopo = VenueScope {
            venue_ids: vec![Uuid::new_v4()],
            is_portfolio: false,
        };
        let err = fx
            .service
            .transition(fx.pending_id, BookingStatus::Confirmed, &outro_escopo)
            .unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));
    }

    #[test]
    fn listagem_mascara_o_contato_conforme_o_nivel() {
        let fx = fixture();
        let masked = fx
            .service
            .list(&fx.scope, None, None, DataAccessLevel::Masked)
            .unwrap();
        assert_eq!(masked[0].guest_phone, "***");
        assert_eq!(masked[0].guest_email, "***");

        let limited = fx
            .service
            .list(&fx.scope, None, None, DataAccessLevel::Limited)
            .unwrap();
        assert_eq!(limited[0].guest_phone, "***");
        assert_eq!(limited[0].guest_email, "clara@example.com");

        let full = fx
            .service
            .list(&fx.scope, None, None, DataAccessLevel::Full)
            .unwrap();
        assert_eq!(full[0].guest_phone, "+55 11 98888-1234");
    }
}
