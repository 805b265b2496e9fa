// src/middleware/rbac.rs

use axum::{extract::FromRequestParts, http::request::Parts};
use std::marker::PhantomData;

use crate::{
    common::error::AppError,
    models::auth::AuthSession,
    models::rbac::Permission,
    services::access_service,
};

/// 1. O Trait que define o que é uma Permissão
pub trait PermissionDef: Send + Sync + 'static {
    fn permission() -> Permission;
}

/// 2. O Extractor (Guardião)
pub struct RequirePermission<T>(pub PhantomData<T>);

// 3. Implementação do FromRequestParts
//
// A verificação é puramente a tabela estática de perfis — sem I/O.

impl<T, S> FromRequestParts<S> for RequirePermission<T>
where
    T: PermissionDef,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        // A. Extrai a sessão (pendurada pelo guard de auth/escopo)
        let session = parts
            .extensions
            .get::<AuthSession>()
            .ok_or(AppError::InvalidToken)?;

        // B. Verifica na tabela estática, fail-closed
        let required = T::permission();
        if !access_service::has_permission(session.role, required) {
            return Err(AppError::AccessDenied(format!(
                "você precisa da permissão '{}' para realizar esta ação.",
                required.slug()
            )));
        }

        Ok(RequirePermission(PhantomData))
    }
}

// ---
// DEFINIÇÃO DAS PERMISSÕES (TIPOS)
// ---

pub struct PermBookingRead;
impl PermissionDef for PermBookingRead {
    fn permission() -> Permission {
        Permission::BookingRead
    }
}

pub struct PermBookingWrite;
impl PermissionDef for PermBookingWrite {
    fn permission() -> Permission {
        Permission::BookingWrite
    }
}

pub struct PermFinancialRead;
impl PermissionDef for PermFinancialRead {
    fn permission() -> Permission {
        Permission::FinancialRead
    }
}

pub struct PermPricingRead;
impl PermissionDef for PermPricingRead {
    fn permission() -> Permission {
        Permission::PricingRead
    }
}

pub struct PermPricingWrite;
impl PermissionDef for PermPricingWrite {
    fn permission() -> Permission {
        Permission::PricingWrite
    }
}

pub struct PermPromoterRead;
impl PermissionDef for PermPromoterRead {
    fn permission() -> Permission {
        Permission::PromoterRead
    }
}

pub struct PermPromoterWrite;
impl PermissionDef for PermPromoterWrite {
    fn permission() -> Permission {
        Permission::PromoterWrite
    }
}

pub struct PermCommissionRead;
impl PermissionDef for PermCommissionRead {
    fn permission() -> Permission {
        Permission::CommissionRead
    }
}
