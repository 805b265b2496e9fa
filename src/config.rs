// src/config.rs

use std::env;

use crate::{
    services::{
        auth::AuthService, booking_service::BookingService,
        commission_service::CommissionService, dashboard_service::DashboardService,
        pricing_service::PricingService,
    },
    store::{
        BookingStore, PricingStore, PromoterStore, UserStore, VenueStore, seed,
    },
};

// O estado compartilhado que será acessível em toda a aplicação
#[derive(Clone)]
pub struct AppState {
    pub jwt_secret: String,

    pub venue_store: VenueStore,
    pub promoter_store: PromoterStore,

    pub auth_service: AuthService,
    pub booking_service: BookingService,
    pub pricing_service: PricingService,
    pub commission_service: CommissionService,
    pub dashboard_service: DashboardService,
}

impl AppState {
    // Carrega as configurações, semeia a camada de dados simulada e
    // monta o gráfico de dependências dos serviços.
    pub fn new() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();

        let jwt_secret = env::var("JWT_SECRET")
            .map_err(|_| anyhow::anyhow!("JWT_SECRET deve ser definida"))?;

        // Sem banco: a fonte de dados é a massa demo em memória,
        // como a camada de interceptação de rede do app original.
        let data = seed::demo_data()?;
        tracing::info!(
            "✅ Dados demo carregados: {} casas, {} reservas, {} promoters",
            data.venues.len(),
            data.bookings.len(),
            data.promoters.len()
        );

        let user_store = UserStore::new(data.users);
        let venue_store = VenueStore::new(data.venues);
        let booking_store = BookingStore::new(data.bookings);
        let promoter_store = PromoterStore::new(data.promoters);
        let pricing_store = PricingStore::new(data.pricing_configs, data.commission_rates);

        // --- Monta o gráfico de dependências ---
        let auth_service = AuthService::new(user_store, jwt_secret.clone());
        let pricing_service = PricingService::new(pricing_store.clone());
        let commission_service = CommissionService::new(
            pricing_store,
            promoter_store.clone(),
            booking_store.clone(),
        );
        let booking_service = BookingService::new(
            booking_store.clone(),
            pricing_service.clone(),
            commission_service.clone(),
        );
        let dashboard_service = DashboardService::new(booking_store);

        Ok(Self {
            jwt_secret,
            venue_store,
            promoter_store,
            auth_service,
            booking_service,
            pricing_service,
            commission_service,
            dashboard_service,
        })
    }
}
