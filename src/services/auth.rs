// src/services/auth.rs

use bcrypt::verify;
use chrono::{DateTime, TimeZone, Utc};
use jsonwebtoken::{DecodingKey, EncodingKey, Header, Validation, decode, encode};

use crate::{
    common::error::AppError,
    models::auth::{AuthResponse, AuthSession, Claims, SessionProfile, User},
    models::rbac::Role,
    services::access_service,
    store::UserStore,
};

#[derive(Clone)]
pub struct AuthService {
    user_store: UserStore,
    jwt_secret: String,
}

impl AuthService {
    pub fn new(user_store: UserStore, jwt_secret: String) -> Self {
        Self {
            user_store,
            jwt_secret,
        }
    }

    pub async fn login_user(&self, email: &str, password: &str) -> Result<AuthResponse, AppError> {
        let user = self
            .user_store
            .find_by_email(email)?
            .filter(|u| u.is_active)
            .ok_or(AppError::InvalidCredentials)?;

        let password_clone = password.to_owned();
        let password_hash_clone = user.password_hash.clone();

        // Executa a verificação em um thread separado
        let is_password_valid = tokio::task::spawn_blocking(move || {
            verify(&password_clone, &password_hash_clone)
        })
        .await
        .map_err(|e| anyhow::anyhow!("Falha na task de verificação de senha: {}", e))??;

        if !is_password_valid {
            return Err(AppError::InvalidCredentials);
        }

        // A sessão nasce com o perfil padrão do usuário
        self.issue_session(user, None)
    }

    pub fn validate_token(&self, token: &str) -> Result<AuthSession, AppError> {
        let validation = Validation::default();
        let token_data = decode::<Claims>(
            token,
            &DecodingKey::from_secret(self.jwt_secret.as_ref()),
            &validation,
        )
        .map_err(|_| AppError::InvalidToken)?;

        let user = self
            .user_store
            .find_by_id(token_data.claims.sub)?
            .filter(|u| u.is_active)
            .ok_or(AppError::UserNotFound)?;

        let logged_in_at = Utc
            .timestamp_opt(token_data.claims.iat as i64, 0)
            .single()
            .unwrap_or_else(Utc::now);

        Ok(AuthSession {
            user,
            role: token_data.claims.role,
            logged_in_at,
        })
    }

    // Troca de perfil da demo: a sessão antiga não é alterada — um token
    // novo é emitido com o perfil novo, como substituição atômica.
    pub fn switch_role(
        &self,
        session: &AuthSession,
        requested_role: &str,
    ) -> Result<AuthResponse, AppError> {
        let role = Role::parse(requested_role).ok_or_else(|| {
            AppError::AccessDenied(format!("perfil desconhecido '{requested_role}'."))
        })?;

        self.issue_session(session.user.clone(), Some(role))
    }

    pub fn profile(&self, session: &AuthSession) -> SessionProfile {
        build_profile(&session.user, session.role, session.logged_in_at)
    }

    fn issue_session(&self, user: User, role: Option<Role>) -> Result<AuthResponse, AppError> {
        let role = role.unwrap_or(user.default_role);
        let now = Utc::now();
        let expires_at = now + chrono::Duration::days(7);

        let claims = Claims {
            sub: user.id,
            role,
            exp: expires_at.timestamp() as usize,
            iat: now.timestamp() as usize,
        };

        let token = encode(
            &Header::default(),
            &claims,
            &EncodingKey::from_secret(self.jwt_secret.as_ref()),
        )?;

        Ok(AuthResponse {
            token,
            profile: build_profile(&user, role, now),
        })
    }
}

fn build_profile(user: &User, role: Role, logged_in_at: DateTime<Utc>) -> SessionProfile {
    SessionProfile {
        id: user.id,
        email: user.email.clone(),
        display_name: user.display_name.clone(),
        role,
        data_access_level: access_service::data_access_level(role),
        permissions: access_service::permissions_for(role).to_vec(),
        venue_ids: user.venue_ids.clone(),
        logged_in_at,
    }
}
