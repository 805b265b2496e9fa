// src/models/auth.rs

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

use crate::models::rbac::{DataAccessLevel, Permission, Role};

// Representa um usuário parceiro vindo da camada de dados (mock)
#[derive(Debug, Clone, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: Uuid,
    pub email: String,

    #[serde(skip_serializing)] // IMPORTANTE para segurança
    #[schema(ignore)]
    pub password_hash: String,

    #[schema(example = "Marina Duarte")]
    pub display_name: String,

    // Perfil com o qual o login inicia; a sessão ativa pode trocar de perfil
    pub default_role: Role,

    // Casas às quais o usuário tem acesso
    pub venue_ids: Vec<Uuid>,

    pub is_active: bool,
    pub created_at: DateTime<Utc>,
}

// Dados para login
#[derive(Debug, Deserialize, Validate, ToSchema)]
pub struct LoginUserPayload {
    #[validate(email(message = "O e-mail fornecido é inválido."))]
    #[schema(example = "manager@demo.venue")]
    pub email: String,
    #[validate(length(min = 6, message = "A senha deve ter no mínimo 6 caracteres."))]
    pub password: String,
}

// Troca de perfil da sessão (recurso de demonstração).
// O perfil chega como string livre e é resolvido fail-closed.
#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SwitchRolePayload {
    #[schema(example = "COORDINATOR")]
    pub role: String,
}

// Estrutura de dados ("claims") dentro do JWT.
// O perfil ativo mora aqui: trocar de perfil emite um token novo,
// nunca altera a sessão existente em partes.
#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    pub sub: Uuid,   // Subject (ID do usuário)
    pub role: Role,  // Perfil ativo da sessão
    pub exp: usize,  // Expiration time
    pub iat: usize,  // Issued At
}

// Sessão autenticada, montada pelo middleware a partir do token
#[derive(Debug, Clone)]
pub struct AuthSession {
    pub user: User,
    pub role: Role,
    pub logged_in_at: DateTime<Utc>,
}

// O que o front recebe sobre a sessão ativa
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SessionProfile {
    pub id: Uuid,
    pub email: String,
    pub display_name: String,
    pub role: Role,
    pub data_access_level: DataAccessLevel,
    pub permissions: Vec<Permission>,
    pub venue_ids: Vec<Uuid>,
    pub logged_in_at: DateTime<Utc>,
}

// Resposta de autenticação com o token
#[derive(Debug, Serialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct AuthResponse {
    pub token: String,
    pub profile: SessionProfile,
}
