// src/middleware/scope.rs

use axum::{
    extract::{FromRequestParts, State},
    http::request::Parts,
    middleware::Next,
    response::Response,
};
use uuid::Uuid;

use crate::{
    common::error::AppError,
    config::AppState,
    middleware::auth::session_from_request,
    models::venue::{ScopeSelection, VenueScope},
    services::scope_service,
};

// Guarda de escopo: autentica e resolve o conjunto efetivo de casas da
// requisição. A seleção vem do header opcional `x-venue-id`; sem header,
// a visão é o portfólio inteiro do usuário.
pub async fn scope_guard(
    State(app_state): State<AppState>,
    mut request: axum::http::Request<axum::body::Body>,
    next: Next,
) -> Result<Response, AppError> {
    let session = session_from_request(&app_state, &request)?;

    let selection = match request.headers().get("x-venue-id") {
        Some(value) => {
            let raw = value
                .to_str()
                .map_err(|_| AppError::InvalidInput("Header x-venue-id ilegível.".into()))?;
            let venue_id = Uuid::parse_str(raw).map_err(|_| {
                AppError::InvalidInput(format!("Header x-venue-id inválido: '{raw}'."))
            })?;
            ScopeSelection::Venue(venue_id)
        }
        None => ScopeSelection::Portfolio,
    };

    let scope = scope_service::resolve_scope(&session.user.venue_ids, selection)?;

    request.extensions_mut().insert(session);
    request.extensions_mut().insert(scope);
    Ok(next.run(request).await)
}

// Extrator do escopo resolvido
pub struct VenueScopeCtx(pub VenueScope);

impl<S> FromRequestParts<S> for VenueScopeCtx
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<VenueScope>()
            .cloned()
            .map(VenueScopeCtx)
            .ok_or_else(|| {
                AppError::AccessDenied("escopo de casas não resolvido para a requisição.".into())
            })
    }
}
