// src/models/rbac.rs

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

// --- Enums (Conjuntos fechados — ver tabela estática em services/access_service.rs) ---

// Os três perfis da plataforma. Configuração estática, nunca mutada em runtime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Role {
    Admin,
    Manager,
    Coordinator,
}

impl Role {
    // Resolução a partir de string livre (ex: payload de troca de perfil).
    // Identificador desconhecido => None, e o avaliador nega tudo (fail-closed).
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "ADMIN" => Some(Self::Admin),
            "MANAGER" => Some(Self::Manager),
            "COORDINATOR" => Some(Self::Coordinator),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Admin => "ADMIN",
            Self::Manager => "MANAGER",
            Self::Coordinator => "COORDINATOR",
        }
    }
}

// Permissões no formato "modulo:acao", como slugs fixos.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "snake_case")]
pub enum Permission {
    BookingRead,
    BookingWrite,
    FinancialRead,
    FinancialWrite,
    PromoterRead,
    PromoterWrite,
    PricingRead,
    PricingWrite,
    IncentiveRead,
    IncentiveWrite,
    CommissionRead,
    CommissionWrite,
    TeamRead,
    TeamWrite,
    SettingsRead,
    SettingsWrite,
}

impl Permission {
    pub fn slug(&self) -> &'static str {
        match self {
            Self::BookingRead => "booking:read",
            Self::BookingWrite => "booking:write",
            Self::FinancialRead => "financial:read",
            Self::FinancialWrite => "financial:write",
            Self::PromoterRead => "promoter:read",
            Self::PromoterWrite => "promoter:write",
            Self::PricingRead => "pricing:read",
            Self::PricingWrite => "pricing:write",
            Self::IncentiveRead => "incentive:read",
            Self::IncentiveWrite => "incentive:write",
            Self::CommissionRead => "commission:read",
            Self::CommissionWrite => "commission:write",
            Self::TeamRead => "team:read",
            Self::TeamWrite => "team:write",
            Self::SettingsRead => "settings:read",
            Self::SettingsWrite => "settings:write",
        }
    }
}

// Nível de mascaramento de dados sensíveis (contato do hóspede).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DataAccessLevel {
    Full,
    Limited,
    Masked,
    None,
}
