//src/main.rs

use axum::{
    Router,
    middleware as axum_middleware,
    routing::{get, patch, post},
};
use tokio::net::TcpListener;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

// Declaração dos nossos módulos
mod common;
mod config;
mod docs;
mod handlers;
mod middleware;
mod models;
mod services;
mod store;

// Importações principais
use crate::config::AppState;
use crate::docs::ApiDoc;
use crate::middleware::{auth::auth_guard, scope::scope_guard};

#[tokio::main]
async fn main() {
    // Inicializa o logger
    tracing_subscriber::fmt().with_target(false).compact().init();

    // Se a configuração falhar, a aplicação não deve iniciar.
    let app_state = AppState::new().expect("Falha ao inicializar o estado da aplicação.");

    // Rotas públicas de autenticação
    let auth_routes = Router::new().route("/login", post(handlers::auth::login));

    // Rotas da sessão (protegidas pelo guard de auth)
    let session_routes = Router::new()
        .route("/me", get(handlers::auth::get_me))
        .route("/switch-role", post(handlers::auth::switch_role))
        .layer(axum_middleware::from_fn_with_state(
            app_state.clone(),
            auth_guard,
        ));

    // Tudo abaixo depende do escopo de casas resolvido (header x-venue-id)
    let venue_routes = Router::new()
        .route("/", get(handlers::venues::list_venues))
        .route("/{id}", get(handlers::venues::get_venue))
        .layer(axum_middleware::from_fn_with_state(
            app_state.clone(),
            scope_guard,
        ));

    let booking_routes = Router::new()
        .route(
            "/",
            get(handlers::bookings::list_bookings).post(handlers::bookings::create_booking),
        )
        .route(
            "/{id}/status",
            patch(handlers::bookings::transition_booking),
        )
        .layer(axum_middleware::from_fn_with_state(
            app_state.clone(),
            scope_guard,
        ));

    let pricing_routes = Router::new()
        .route(
            "/{venue_id}",
            get(handlers::pricing::get_pricing).put(handlers::pricing::update_pricing),
        )
        .route(
            "/{venue_id}/preview",
            post(handlers::pricing::preview_pricing),
        )
        .layer(axum_middleware::from_fn_with_state(
            app_state.clone(),
            scope_guard,
        ));

    let promoter_routes = Router::new()
        .route("/", get(handlers::promoters::list_promoters))
        .route("/{id}/tier", patch(handlers::promoters::assign_tier))
        .layer(axum_middleware::from_fn_with_state(
            app_state.clone(),
            scope_guard,
        ));

    let payout_routes = Router::new()
        .route("/", get(handlers::payouts::list_payouts))
        .layer(axum_middleware::from_fn_with_state(
            app_state.clone(),
            scope_guard,
        ));

    let dashboard_routes = Router::new()
        .route("/summary", get(handlers::dashboard::get_summary))
        .layer(axum_middleware::from_fn_with_state(
            app_state.clone(),
            scope_guard,
        ));

    // Combina tudo no router principal
    let app = Router::new()
        .route("/api/health", get(|| async { "OK" }))
        .nest("/api/auth", auth_routes.merge(session_routes))
        .nest("/api/venues", venue_routes)
        .nest("/api/bookings", booking_routes)
        .nest("/api/pricing", pricing_routes)
        .nest("/api/promoters", promoter_routes)
        .nest("/api/payouts", payout_routes)
        .nest("/api/dashboard", dashboard_routes)
        .merge(SwaggerUi::new("/docs").url("/api-docs/openapi.json", ApiDoc::openapi()))
        .with_state(app_state);

    // Inicia o servidor
    let addr = std::env::var("BIND_ADDR").unwrap_or_else(|_| "0.0.0.0:3000".to_owned());
    let listener = TcpListener::bind(&addr)
        .await
        .expect("Falha ao iniciar o listener TCP");
    tracing::info!(
        "🚀 Servidor escutando em {}",
        listener.local_addr().expect("endereço local indisponível")
    );
    axum::serve(listener, app).await.expect("Erro no servidor Axum");
}
