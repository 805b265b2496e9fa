// src/models/venue.rs

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

// Dados de referência de uma casa. Imutáveis para este escopo.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Venue {
    pub id: Uuid,

    #[schema(example = "Terraço Aurora")]
    pub name: String,

    #[schema(example = "Rooftop Bar")]
    pub category: String,

    #[schema(example = "Rua das Laranjeiras, 145")]
    pub address_line: String,

    #[schema(example = "São Paulo")]
    pub city: String,

    #[schema(example = "01415-001")]
    pub postal_code: String,

    #[schema(example = 220)]
    pub capacity: i32,

    pub is_active: bool,
}

// Seleção de escopo vinda da UI: portfólio inteiro ou uma casa específica
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScopeSelection {
    Portfolio,
    Venue(Uuid),
}

// Escopo efetivo resolvido para a sessão: todo filtro de dados passa por ele
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct VenueScope {
    pub venue_ids: Vec<Uuid>,
    pub is_portfolio: bool,
}

impl VenueScope {
    pub fn contains(&self, venue_id: Uuid) -> bool {
        self.venue_ids.contains(&venue_id)
    }
}
