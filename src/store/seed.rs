// src/store/seed.rs

use bcrypt::{DEFAULT_COST, hash};
use chrono::{Duration, Utc};
use rust_decimal::Decimal;
use uuid::Uuid;

use crate::models::{
    auth::User,
    booking::{Booking, BookingStatus, PricingClass},
    pricing::{CommissionRate, PricingConfig, RateModel},
    promoter::{Promoter, PromoterMetrics, PromoterStatus, PromoterTier},
    rbac::Role,
    venue::Venue,
};
use crate::services::{
    commission_service::calculate_commission,
    pricing_service::{calculate_non_prime_pricing, calculate_prime_pricing},
};

// Massa de dados demo, no lugar da camada de interceptação de rede do app
// original. Tudo determinístico exceto ids e datas relativas a "agora".
pub struct SeedData {
    pub users: Vec<User>,
    pub venues: Vec<Venue>,
    pub bookings: Vec<Booking>,
    pub promoters: Vec<Promoter>,
    pub pricing_configs: Vec<PricingConfig>,
    pub commission_rates: Vec<CommissionRate>,
}

pub fn demo_data() -> anyhow::Result<SeedData> {
    let now = Utc::now();
    let today = now.date_naive();

    // --- Casas ---
    let venues = vec![
        Venue {
            id: Uuid::new_v4(),
            name: "Terraço Aurora".into(),
            category: "Rooftop Bar".into(),
            address_line: "Rua das Laranjeiras, 145".into(),
            city: "São Paulo".into(),
            postal_code: "01415-001".into(),
            capacity: 220,
            is_active: true,
        },
        Venue {
            id: Uuid::new_v4(),
            name: "Cantina Boa Mesa".into(),
            category: "Restaurante".into(),
            address_line: "Av. Atlântica, 2210".into(),
            city: "Rio de Janeiro".into(),
            postal_code: "22021-001".into(),
            capacity: 140,
            is_active: true,
        },
        Venue {
            id: Uuid::new_v4(),
            name: "Club Meia-Noite".into(),
            category: "Club".into(),
            address_line: "Rua Augusta, 980".into(),
            city: "São Paulo".into(),
            postal_code: "01304-001".into(),
            capacity: 450,
            is_active: true,
        },
    ];
    let all_venue_ids: Vec<Uuid> = venues.iter().map(|v| v.id).collect();

    // --- Usuários demo (um por perfil) ---
    // Senha fixa de demonstração; o hash roda uma vez no boot.
    let password_hash = hash("demo1234", DEFAULT_COST)?;
    let users = vec![
        User {
            id: Uuid::new_v4(),
            email: "admin@demo.venue".into(),
            password_hash: password_hash.clone(),
            display_name: "Marina Duarte".into(),
            default_role: Role::Admin,
            venue_ids: all_venue_ids.clone(),
            is_active: true,
            created_at: now,
        },
        User {
            id: Uuid::new_v4(),
            email: "manager@demo.venue".into(),
            password_hash: password_hash.clone(),
            display_name: "Otávio Braga".into(),
            default_role: Role::Manager,
            venue_ids: vec![venues[0].id, venues[1].id],
            is_active: true,
            created_at: now,
        },
        User {
            id: Uuid::new_v4(),
            email: "coordinator@demo.venue".into(),
            password_hash,
            display_name: "Letícia Prado".into(),
            default_role: Role::Coordinator,
            venue_ids: vec![venues[0].id],
            is_active: true,
            created_at: now,
        },
    ];

    // --- Configuração de preços (uma ativa por casa) ---
    let pricing_configs: Vec<PricingConfig> = venues
        .iter()
        .enumerate()
        .map(|(i, venue)| PricingConfig {
            id: Uuid::new_v4(),
            venue_id: venue.id,
            base_for_two: Decimal::new(8000 + (i as i64) * 1000, 2),
            additional_per_person: Decimal::new(3000, 2),
            non_prime_per_diner: Decimal::new(2250, 2),
            non_prime_minimum: Some(Decimal::new(4500, 2)),
            platform_fee_percent: Decimal::new(10, 2), // 10%
            min_party_size: 1,
            max_party_size: 12,
            effective_from: today - Duration::days(90),
            is_active: true,
        })
        .collect();

    // --- Taxas de comissão por nível ---
    let commission_rates = vec![
        CommissionRate {
            id: Uuid::new_v4(),
            tier: PromoterTier::Standard,
            model: RateModel::PerCover,
            rate: Decimal::from(8),
            min_booking_value: None,
            max_booking_value: None,
            max_commission: None,
        },
        CommissionRate {
            id: Uuid::new_v4(),
            tier: PromoterTier::Premium,
            model: RateModel::PercentOfSpend,
            rate: Decimal::new(6, 2), // 6% do valor da reserva
            min_booking_value: Some(Decimal::from(50)),
            max_booking_value: None,
            max_commission: Some(Decimal::from(60)),
        },
        CommissionRate {
            id: Uuid::new_v4(),
            tier: PromoterTier::Vip,
            model: RateModel::PercentOfSpend,
            rate: Decimal::new(10, 2), // 10%
            min_booking_value: Some(Decimal::from(80)),
            max_booking_value: None,
            max_commission: Some(Decimal::from(120)),
        },
    ];

    // --- Promoters ---
    let promoters = vec![
        Promoter {
            id: Uuid::new_v4(),
            name: "Rafael Lima".into(),
            email: "rafael@promo.agency".into(),
            tier: PromoterTier::Standard,
            status: PromoterStatus::Active,
            venue_ids: vec![venues[0].id, venues[1].id],
            metrics: empty_metrics(),
        },
        Promoter {
            id: Uuid::new_v4(),
            name: "Bianca Castro".into(),
            email: "bianca@noitelivre.com".into(),
            tier: PromoterTier::Premium,
            status: PromoterStatus::Active,
            venue_ids: all_venue_ids.clone(),
            metrics: empty_metrics(),
        },
        Promoter {
            id: Uuid::new_v4(),
            name: "Heitor Salles".into(),
            email: "heitor@vipnights.com".into(),
            tier: PromoterTier::Vip,
            status: PromoterStatus::Inactive,
            venue_ids: vec![venues[2].id],
            metrics: empty_metrics(),
        },
    ];

    // --- Reservas espalhadas por status e pelos dois períodos do dashboard ---
    let plan: &[(usize, Option<usize>, &str, i32, i64, BookingStatus, PricingClass)] = &[
        (0, Some(0), "Clara Nunes", 4, 2, BookingStatus::Confirmed, PricingClass::Prime),
        (0, Some(1), "João Pedro Reis", 2, 5, BookingStatus::Completed, PricingClass::Prime),
        (0, None, "Aline Furtado", 6, 1, BookingStatus::Pending, PricingClass::Prime),
        (0, Some(0), "Vera Campos", 3, 9, BookingStatus::Cancelled, PricingClass::NonPrime),
        (1, Some(0), "Diego Antunes", 5, 12, BookingStatus::Confirmed, PricingClass::NonPrime),
        (1, Some(1), "Paula Siqueira", 8, 16, BookingStatus::Completed, PricingClass::Prime),
        (1, None, "Márcio Teles", 2, 20, BookingStatus::NoShow, PricingClass::NonPrime),
        (2, Some(2), "Renata Vilela", 10, 25, BookingStatus::Completed, PricingClass::Prime),
        // Período anterior (31-60 dias atrás), para os deltas do dashboard
        (0, Some(0), "Sandro Maia", 4, 36, BookingStatus::Completed, PricingClass::Prime),
        (1, Some(1), "Talita Borges", 2, 42, BookingStatus::Completed, PricingClass::NonPrime),
        (2, Some(2), "Igor Sampaio", 6, 50, BookingStatus::Cancelled, PricingClass::Prime),
    ];

    let mut bookings = Vec::with_capacity(plan.len());
    for (venue_idx, promoter_idx, guest, party, days_ago, status, class) in plan.iter().copied() {
        let venue = &venues[venue_idx];
        let config = &pricing_configs[venue_idx];
        let promoter = promoter_idx.map(|i| &promoters[i]);

        let prime = calculate_prime_pricing(party, config)?;
        let non_prime = calculate_non_prime_pricing(party, config)?;
        let total_amount = match class {
            PricingClass::Prime => prime.total,
            PricingClass::NonPrime => non_prime.total,
        };

        let mut booking = Booking {
            id: Uuid::new_v4(),
            venue_id: venue.id,
            promoter_id: promoter.map(|p| p.id),
            guest_name: guest.into(),
            guest_phone: format!("+55 11 9{:04}-{:04}", party * 731 % 10000, days_ago * 97 % 10000),
            guest_email: format!(
                "{}@example.com",
                guest.to_lowercase().replace(' ', ".")
            ),
            party_size: party,
            scheduled_at: now - Duration::days(days_ago),
            status,
            pricing_class: class,
            prime_total: prime.total,
            non_prime_total: non_prime.total,
            total_amount,
            commission_amount: Decimal::ZERO,
            created_at: now - Duration::days(days_ago + 3),
            updated_at: now - Duration::days(days_ago),
        };

        if let Some(promoter) = promoter {
            if let Some(rate) = commission_rates.iter().find(|r| r.tier == promoter.tier) {
                booking.commission_amount = calculate_commission(&booking, rate).amount;
            }
        }

        bookings.push(booking);
    }

    // Consolida as métricas exibidas no painel de cada promoter
    let mut promoters = promoters;
    for promoter in promoters.iter_mut() {
        let own: Vec<&Booking> = bookings
            .iter()
            .filter(|b| b.promoter_id == Some(promoter.id))
            .collect();
        promoter.metrics = PromoterMetrics {
            total_bookings: own.len() as i64,
            completed_bookings: own
                .iter()
                .filter(|b| b.status == BookingStatus::Completed)
                .count() as i64,
            cancelled_bookings: own
                .iter()
                .filter(|b| b.status == BookingStatus::Cancelled)
                .count() as i64,
            total_revenue: own
                .iter()
                .filter(|b| b.status.is_revenue_eligible())
                .map(|b| b.total_amount)
                .sum(),
            total_commission: own.iter().map(|b| b.commission_amount).sum(),
        };
    }

    Ok(SeedData {
        users,
        venues,
        bookings,
        promoters,
        pricing_configs,
        commission_rates,
    })
}

fn empty_metrics() -> PromoterMetrics {
    PromoterMetrics {
        total_bookings: 0,
        completed_bookings: 0,
        cancelled_bookings: 0,
        total_revenue: Decimal::ZERO,
        total_commission: Decimal::ZERO,
    }
}
