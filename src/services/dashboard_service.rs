// src/services/dashboard_service.rs

use chrono::{DateTime, Duration, Utc};
use rust_decimal::Decimal;

use crate::{
    common::error::AppError,
    models::{
        booking::{Booking, BookingStatus},
        dashboard::{CountMetric, DashboardSummary, MoneyMetric},
        venue::VenueScope,
    },
    services::pricing_service::round_money,
    store::BookingStore,
};

// Janela de comparação do painel: últimos 30 dias vs. os 30 anteriores
const PERIOD_DAYS: i64 = 30;

// --- Agregação pura ---

// Fold puro sobre as duas coleções de reservas; as entradas não são tocadas.
// Receita/contagens consideram apenas status elegíveis; cancelamentos e
// no-shows saem como contadores separados do período corrente.
pub fn aggregate_kpis(current: &[Booking], previous: &[Booking]) -> DashboardSummary {
    let (cur_revenue, cur_bookings, cur_diners) = positive_totals(current);
    let (prev_revenue, prev_bookings, prev_diners) = positive_totals(previous);

    let cur_average = average(cur_revenue, cur_bookings);
    let prev_average = average(prev_revenue, prev_bookings);

    DashboardSummary {
        total_revenue: money_metric(cur_revenue, prev_revenue),
        total_bookings: count_metric(cur_bookings, prev_bookings),
        total_diners: count_metric(cur_diners, prev_diners),
        average_booking_value: money_metric(cur_average, prev_average),
        cancelled_bookings: count_status(current, BookingStatus::Cancelled),
        no_show_bookings: count_status(current, BookingStatus::NoShow),
    }
}

fn positive_totals(bookings: &[Booking]) -> (Decimal, i64, i64) {
    bookings
        .iter()
        .filter(|b| b.status.is_revenue_eligible())
        .fold((Decimal::ZERO, 0i64, 0i64), |(revenue, count, diners), b| {
            (
                revenue + b.total_amount,
                count + 1,
                diners + i64::from(b.party_size),
            )
        })
}

// Ticket médio; divisor zero vira 0, nunca erro
fn average(revenue: Decimal, bookings: i64) -> Decimal {
    if bookings > 0 {
        round_money(revenue / Decimal::from(bookings))
    } else {
        Decimal::ZERO
    }
}

fn count_status(bookings: &[Booking], status: BookingStatus) -> i64 {
    bookings.iter().filter(|b| b.status == status).count() as i64
}

// Variação percentual: período anterior zerado reporta 0 (decisão no DESIGN.md)
fn percent_change(change: Decimal, previous: Decimal) -> Decimal {
    if previous > Decimal::ZERO {
        round_money(change / previous * Decimal::from(100))
    } else {
        Decimal::ZERO
    }
}

fn money_metric(current: Decimal, previous: Decimal) -> MoneyMetric {
    let change = current - previous;
    MoneyMetric {
        current,
        previous,
        change,
        change_percent: percent_change(change, previous),
    }
}

fn count_metric(current: i64, previous: i64) -> CountMetric {
    let change = current - previous;
    CountMetric {
        current,
        previous,
        change,
        change_percent: percent_change(Decimal::from(change), Decimal::from(previous)),
    }
}

// --- Serviço ---

#[derive(Clone)]
pub struct DashboardService {
    store: BookingStore,
}

impl DashboardService {
    pub fn new(store: BookingStore) -> Self {
        Self { store }
    }

    pub fn summary(&self, scope: &VenueScope) -> Result<DashboardSummary, AppError> {
        self.summary_at(scope, Utc::now())
    }

    // Separado do relógio para os testes controlarem a referência
    pub fn summary_at(
        &self,
        scope: &VenueScope,
        reference: DateTime<Utc>,
    ) -> Result<DashboardSummary, AppError> {
        let bookings = self.store.list(&scope.venue_ids, None, None)?;

        let current_start = reference - Duration::days(PERIOD_DAYS);
        let previous_start = reference - Duration::days(PERIOD_DAYS * 2);

        let current: Vec<Booking> = bookings
            .iter()
            .filter(|b| b.scheduled_at > current_start && b.scheduled_at <= reference)
            .cloned()
            .collect();
        let previous: Vec<Booking> = bookings
            .iter()
            .filter(|b| b.scheduled_at > previous_start && b.scheduled_at <= current_start)
            .cloned()
            .collect();

        Ok(aggregate_kpis(&current, &previous))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::booking::PricingClass;
    use uuid::Uuid;

    fn booking(status: BookingStatus, party_size: i32, total: Decimal) -> Booking {
        let now = Utc::now();
        Booking {
            id: Uuid::new_v4(),
            venue_id: Uuid::new_v4(),
            promoter_id: None,
            guest_name: "Hóspede".into(),
            guest_phone: "+55 11 90000-0000".into(),
            guest_email: "hospede@example.com".into(),
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

    #[test]
    fn agrega_somente_status_elegiveis() {
        let current = vec![
            booking(BookingStatus::Confirmed, 4, Decimal::from(150)),
            booking(BookingStatus::Completed, 2, Decimal::from(90)),
            booking(BookingStatus::Cancelled, 6, Decimal::from(300)),
            booking(BookingStatus::NoShow, 3, Decimal::from(120)),
            booking(BookingStatus::Pending, 5, Decimal::from(200)),
        ];

        let summary = aggregate_kpis(&current, &[]);
        assert_eq!(summary.total_revenue.current, Decimal::from(240));
        assert_eq!(summary.total_bookings.current, 2);
        assert_eq!(summary.total_diners.current, 6);
        assert_eq!(summary.cancelled_bookings, 1);
        assert_eq!(summary.no_show_bookings, 1);
    }

    #[test]
    fn ticket_medio_sem_reservas_e_zero() {
        let summary = aggregate_kpis(&[], &[]);
        assert_eq!(summary.average_booking_value.current, Decimal::ZERO);
        assert_eq!(summary.total_revenue.current, Decimal::ZERO);
    }

    #[test]
    fn periodo_anterior_zerado_nao_divide_por_zero() {
        let current = vec![booking(BookingStatus::Confirmed, 4, Decimal::from(100))];
        let summary = aggregate_kpis(&current, &[]);
        assert_eq!(summary.total_revenue.change, Decimal::from(100));
        assert_eq!(summary.total_revenue.change_percent, Decimal::ZERO);
        assert_eq!(summary.total_bookings.change_percent, Decimal::ZERO);
    }

    #[test]
    fn deltas_contra_o_periodo_anterior() {
        let current = vec![
            booking(BookingStatus::Confirmed, 4, Decimal::from(150)),
            booking(BookingStatus::Completed, 2, Decimal::from(50)),
        ];
        let previous = vec![booking(BookingStatus::Completed, 2, Decimal::from(100))];

        let summary = aggregate_kpis(&current, &previous);
        assert_eq!(summary.total_revenue.current, Decimal::from(200));
        assert_eq!(summary.total_revenue.previous, Decimal::from(100));
        assert_eq!(summary.total_revenue.change, Decimal::from(100));
        assert_eq!(summary.total_revenue.change_percent, Decimal::from(100));

        assert_eq!(summary.total_bookings.change, 1);
        assert_eq!(summary.total_bookings.change_percent, Decimal::from(100));

        // Ticket médio caiu de 100 para 100 => sem variação
        assert_eq!(summary.average_booking_value.current, Decimal::from(100));
        assert_eq!(summary.average_booking_value.change, Decimal::ZERO);
    }

    #[test]
    fn entradas_nao_sao_mutadas() {
        let current = vec![booking(BookingStatus::Confirmed, 4, Decimal::from(100))];
        let snapshot = current.clone();
        let _ = aggregate_kpis(&current, &[]);
        assert_eq!(current.len(), snapshot.len());
        assert_eq!(current[0].total_amount, snapshot[0].total_amount);
        assert_eq!(current[0].status, snapshot[0].status);
    }
}
