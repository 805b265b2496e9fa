// src/docs.rs

use utoipa::OpenApi;
use utoipa::openapi::security::{Http, HttpAuthScheme, SecurityScheme};

use crate::handlers;
use crate::models;

#[derive(OpenApi)]
#[openapi(
    paths(
        // --- Auth ---
        handlers::auth::login,
        handlers::auth::get_me,
        handlers::auth::switch_role,

        // --- Venues ---
        handlers::venues::list_venues,
        handlers::venues::get_venue,

        // --- Bookings ---
        handlers::bookings::list_bookings,
        handlers::bookings::create_booking,
        handlers::bookings::transition_booking,

        // --- Pricing ---
        handlers::pricing::get_pricing,
        handlers::pricing::update_pricing,
        handlers::pricing::preview_pricing,

        // --- Promoters ---
        handlers::promoters::list_promoters,
        handlers::promoters::assign_tier,

        // --- Payouts ---
        handlers::payouts::list_payouts,

        // --- Dashboard ---
        handlers::dashboard::get_summary,
    ),
    components(
        schemas(
            // --- Auth / RBAC ---
            models::auth::User,
            models::auth::LoginUserPayload,
            models::auth::SwitchRolePayload,
            models::auth::SessionProfile,
            models::auth::AuthResponse,
            models::rbac::Role,
            models::rbac::Permission,
            models::rbac::DataAccessLevel,

            // --- Venues ---
            models::venue::Venue,
            models::venue::VenueScope,

            // --- Bookings ---
            models::booking::BookingStatus,
            models::booking::PricingClass,
            models::booking::Booking,
            models::booking::CreateBookingPayload,
            models::booking::TransitionBookingPayload,

            // --- Pricing ---
            models::pricing::RateModel,
            models::pricing::CommissionReason,
            models::pricing::PricingConfig,
            models::pricing::UpdatePricingPayload,
            models::pricing::CommissionRate,
            models::pricing::PrimePricingBreakdown,
            models::pricing::NonPrimePricingBreakdown,
            models::pricing::CommissionResult,
            models::pricing::PreviewPricingPayload,
            models::pricing::PricingPreview,

            // --- Promoters ---
            models::promoter::PromoterTier,
            models::promoter::PromoterStatus,
            models::promoter::PromoterMetrics,
            models::promoter::Promoter,
            models::promoter::AssignTierPayload,

            // --- Dashboard / Payouts ---
            models::dashboard::MoneyMetric,
            models::dashboard::CountMetric,
            models::dashboard::DashboardSummary,
            models::dashboard::PayoutSummary,
        )
    ),
    tags(
        (name = "Auth", description = "Autenticação e troca de perfil"),
        (name = "Venues", description = "Casas e escopo de navegação"),
        (name = "Bookings", description = "Gestão de Reservas"),
        (name = "Pricing", description = "Configuração de Preços por Casa"),
        (name = "Promoters", description = "Promoters e Níveis de Comissão"),
        (name = "Payouts", description = "Repasses de Comissão"),
        (name = "Dashboard", description = "Indicadores Gerenciais")
    ),
    modifiers(&SecurityAddon)
)]
pub struct ApiDoc;

struct SecurityAddon;

impl utoipa::Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        let components = openapi.components.get_or_insert_with(Default::default);
        components.add_security_scheme(
            "api_jwt",
            SecurityScheme::Http(Http::new(HttpAuthScheme::Bearer)),
        );
    }
}
