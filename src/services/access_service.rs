// src/services/access_service.rs

use crate::models::booking::Booking;
use crate::models::rbac::{DataAccessLevel, Permission, Role};

// Avaliador de acesso: funções puras sobre a tabela estática de perfis.
// Sem I/O, sem estado — chamar quantas vezes quiser dá sempre o mesmo resultado.

use crate::models::rbac::Permission::*;

const ADMIN_PERMISSIONS: &[Permission] = &[
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
];

const MANAGER_PERMISSIONS: &[Permission] = &[
    BookingRead,
    BookingWrite,
    FinancialRead,
    PromoterRead,
    PromoterWrite,
    PricingRead,
    PricingWrite,
    IncentiveRead,
    IncentiveWrite,
    CommissionRead,
    TeamRead,
    SettingsRead,
];

const COORDINATOR_PERMISSIONS: &[Permission] = &[BookingRead, BookingWrite, PromoterRead];

// A lista de permissões de cada perfil. `match` exaustivo sobre o enum fechado:
// adicionar um perfil novo sem tabela não compila.
pub fn permissions_for(role: Role) -> &'static [Permission] {
    match role {
        Role::Admin => ADMIN_PERMISSIONS,
        Role::Manager => MANAGER_PERMISSIONS,
        Role::Coordinator => COORDINATOR_PERMISSIONS,
    }
}

pub fn has_permission(role: Role, permission: Permission) -> bool {
    permissions_for(role).contains(&permission)
}

pub fn data_access_level(role: Role) -> DataAccessLevel {
    match role {
        Role::Admin => DataAccessLevel::Full,
        Role::Manager => DataAccessLevel::Limited,
        Role::Coordinator => DataAccessLevel::Masked,
    }
}

// Resolução a partir de identificador livre (ex: vindo de fuzz ou payload).
// Desconhecido => None. Nunca fail-open.
pub fn data_access_level_for(identifier: &str) -> DataAccessLevel {
    match Role::parse(identifier) {
        Some(role) => data_access_level(role),
        None => DataAccessLevel::None,
    }
}

const MASKED_FIELD: &str = "***";

// Aplica o nível de mascaramento ao contato do hóspede.
// Full: tudo visível. Limited: telefone oculto. Masked: contato todo oculto.
// None: nenhum dado deveria chegar aqui — mascara tudo por segurança.
pub fn mask_booking(mut booking: Booking, level: DataAccessLevel) -> Booking {
    match level {
        DataAccessLevel::Full => {}
        DataAccessLevel::Limited => {
            booking.guest_phone = MASKED_FIELD.to_owned();
        }
        DataAccessLevel::Masked | DataAccessLevel::None => {
            booking.guest_phone = MASKED_FIELD.to_owned();
            booking.guest_email = MASKED_FIELD.to_owned();
        }
    }
    booking
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn admin_tem_todas_as_permissoes() {
        for perm in ADMIN_PERMISSIONS {
            assert!(has_permission(Role::Admin, *perm));
        }
        assert_eq!(permissions_for(Role::Admin).len(), 16);
    }

    #[test]
    fn coordinator_nao_escreve_precos_nem_le_financeiro() {
        assert!(!has_permission(Role::Coordinator, PricingWrite));
        assert!(!has_permission(Role::Coordinator, PricingRead));
        assert!(!has_permission(Role::Coordinator, FinancialRead));
        assert!(!has_permission(Role::Coordinator, CommissionRead));
        assert!(has_permission(Role::Coordinator, BookingRead));
        assert!(has_permission(Role::Coordinator, BookingWrite));
    }

    #[test]
    fn manager_le_mas_nao_escreve_financeiro() {
        assert!(has_permission(Role::Manager, FinancialRead));
        assert!(!has_permission(Role::Manager, FinancialWrite));
        assert!(has_permission(Role::Manager, PricingWrite));
        assert!(!has_permission(Role::Manager, CommissionWrite));
    }

    #[test]
    fn niveis_de_acesso_por_perfil() {
        assert_eq!(data_access_level(Role::Admin), DataAccessLevel::Full);
        assert_eq!(data_access_level(Role::Manager), DataAccessLevel::Limited);
        assert_eq!(data_access_level(Role::Coordinator), DataAccessLevel::Masked);
    }

    #[test]
    fn perfil_desconhecido_resolve_para_none() {
        for garbage in ["SUPERADMIN", "admin", "", "ADMIN ", "🦀", "root"] {
            assert_eq!(data_access_level_for(garbage), DataAccessLevel::None);
        }
        assert_eq!(data_access_level_for("MANAGER"), DataAccessLevel::Limited);
    }
}
