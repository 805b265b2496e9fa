// src/services/scope_service.rs

use uuid::Uuid;

use crate::{
    common::error::AppError,
    models::venue::{ScopeSelection, VenueScope},
};

// Resolve o escopo efetivo de casas da sessão a partir da seleção da UI.
// Função pura: lista de acesso + seleção entram, escopo sai.
//
// Regras:
// - Casa pedida fora da lista de acesso => AccessDenied. Nunca cai em
//   portfólio silenciosamente, para não dar ilusão de acesso.
// - Lista vazia => NoAccess (configuração, não requisição errada).
// - Uma única casa => seleciona direto essa casa, mesmo pedindo portfólio
//   (não existe nada para agregar).
pub fn resolve_scope(
    accessible: &[Uuid],
    selection: ScopeSelection,
) -> Result<VenueScope, AppError> {
    if accessible.is_empty() {
        return Err(AppError::NoAccess);
    }

    match selection {
        ScopeSelection::Venue(venue_id) => {
            if !accessible.contains(&venue_id) {
                return Err(AppError::AccessDenied(format!(
                    "a casa {venue_id} não está na sua carteira."
                )));
            }
            Ok(VenueScope {
                venue_ids: vec![venue_id],
                is_portfolio: false,
            })
        }
        ScopeSelection::Portfolio => {
            if accessible.len() == 1 {
                // Portfólio de uma casa só vira seleção única
                return Ok(VenueScope {
                    venue_ids: accessible.to_vec(),
                    is_portfolio: false,
                });
            }
            Ok(VenueScope {
                venue_ids: accessible.to_vec(),
                is_portfolio: true,
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn venues(n: usize) -> Vec<Uuid> {
        (0..n).map(|_| Uuid::new_v4()).collect()
    }

    #[test]
    fn portfolio_com_varias_casas() {
        let acesso = venues(3);
        let scope = resolve_scope(&acesso, ScopeSelection::Portfolio).unwrap();
        assert!(scope.is_portfolio);
        assert_eq!(scope.venue_ids, acesso);
    }

    #[test]
    fn casa_unica_vira_selecao_direta() {
        let acesso = venues(1);
        let scope = resolve_scope(&acesso, ScopeSelection::Portfolio).unwrap();
        assert!(!scope.is_portfolio);
        assert_eq!(scope.venue_ids, acesso);
    }

    #[test]
    fn casa_fora_da_carteira_e_negada() {
        let acesso = venues(2);
        let intrusa = Uuid::new_v4();
        let err = resolve_scope(&acesso, ScopeSelection::Venue(intrusa)).unwrap_err();
        assert!(matches!(err, AppError::AccessDenied(_)));
    }

    #[test]
    fn casa_da_carteira_e_aceita() {
        let acesso = venues(2);
        let scope = resolve_scope(&acesso, ScopeSelection::Venue(acesso[1])).unwrap();
        assert!(!scope.is_portfolio);
        assert_eq!(scope.venue_ids, vec![acesso[1]]);
    }

    #[test]
    fn sem_casas_e_no_access() {
        let err = resolve_scope(&[], ScopeSelection::Portfolio).unwrap_err();
        assert!(matches!(err, AppError::NoAccess));

        // Mesmo pedindo uma casa específica, lista vazia é NoAccess
        let err = resolve_scope(&[], ScopeSelection::Venue(Uuid::new_v4())).unwrap_err();
        assert!(matches!(err, AppError::NoAccess));
    }
}
