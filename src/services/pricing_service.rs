// src/services/pricing_service.rs

use chrono::Utc;
use rust_decimal::{Decimal, RoundingStrategy};
use uuid::Uuid;

use crate::{
    common::error::AppError,
    models::pricing::{
        NonPrimePricingBreakdown, PricingConfig, PricingPreview, PrimePricingBreakdown,
        UpdatePricingPayload,
    },
    store::PricingStore,
};

// Arredondamento half-up em 2 casas, usado em taxas e comissões percentuais.
// Decisão registrada no DESIGN.md (half-up, não half-even).
pub fn round_money(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}

// --- Cálculos puros ---

// Precificação Prime: a base cobre sempre os 2 primeiros.
// Uma pessoa sozinha paga a base de 2 — regra de negócio, não bug.
pub fn calculate_prime_pricing(
    diner_count: i32,
    config: &PricingConfig,
) -> Result<PrimePricingBreakdown, AppError> {
    if diner_count < 1 {
        return Err(AppError::InvalidInput(format!(
            "Quantidade de pessoas inválida: {diner_count}."
        )));
    }

    let base = config.base_for_two;
    let extra_diners = (diner_count - 2).max(0);
    let additional = Decimal::from(extra_diners) * config.additional_per_person;
    let subtotal = base + additional;
    let platform_fee = round_money(subtotal * config.platform_fee_percent);

    Ok(PrimePricingBreakdown {
        base,
        additional,
        subtotal,
        platform_fee,
        total: subtotal + platform_fee,
    })
}

// Precificação Non-Prime: por pessoa, com piso opcional
pub fn calculate_non_prime_pricing(
    diner_count: i32,
    config: &PricingConfig,
) -> Result<NonPrimePricingBreakdown, AppError> {
    if diner_count < 1 {
        return Err(AppError::InvalidInput(format!(
            "Quantidade de pessoas inválida: {diner_count}."
        )));
    }

    let per_diner_total = Decimal::from(diner_count) * config.non_prime_per_diner;
    let floor = config.non_prime_minimum.unwrap_or(Decimal::ZERO);
    let base = per_diner_total.max(floor);
    let platform_fee = round_money(base * config.platform_fee_percent);

    Ok(NonPrimePricingBreakdown {
        base,
        platform_fee,
        total: base + platform_fee,
    })
}

// Valida o tamanho do grupo contra os limites configurados da casa
pub fn ensure_party_within_bounds(
    config: &PricingConfig,
    party_size: i32,
) -> Result<(), AppError> {
    if party_size < config.min_party_size || party_size > config.max_party_size {
        return Err(AppError::InvalidInput(format!(
            "O grupo de {party_size} pessoas está fora dos limites da casa ({} a {}).",
            config.min_party_size, config.max_party_size
        )));
    }
    Ok(())
}

// --- Serviço (configuração por casa) ---

#[derive(Clone)]
pub struct PricingService {
    store: PricingStore,
}

impl PricingService {
    pub fn new(store: PricingStore) -> Self {
        Self { store }
    }

    pub fn active_config(&self, venue_id: Uuid) -> Result<PricingConfig, AppError> {
        self.store
            .active_config(venue_id)?
            .ok_or(AppError::NotFound("Configuração de preço"))
    }

    // Substitui a configuração ativa da casa por uma nova.
    // A anterior é desativada e a nova entra, numa única operação no store.
    pub fn update_config(
        &self,
        venue_id: Uuid,
        payload: UpdatePricingPayload,
    ) -> Result<PricingConfig, AppError> {
        for (label, value) in [
            ("baseForTwo", payload.base_for_two),
            ("additionalPerPerson", payload.additional_per_person),
            ("nonPrimePerDiner", payload.non_prime_per_diner),
            ("platformFeePercent", payload.platform_fee_percent),
        ] {
            if value < Decimal::ZERO {
                return Err(AppError::InvalidInput(format!(
                    "O campo {label} não pode ser negativo."
                )));
            }
        }
        if let Some(floor) = payload.non_prime_minimum {
            if floor < Decimal::ZERO {
                return Err(AppError::InvalidInput(
                    "O piso non-prime não pode ser negativo.".into(),
                ));
            }
        }
        if payload.min_party_size > payload.max_party_size {
            return Err(AppError::InvalidInput(
                "O tamanho mínimo de grupo não pode exceder o máximo.".into(),
            ));
        }

        let config = PricingConfig {
            id: Uuid::new_v4(),
            venue_id,
            base_for_two: payload.base_for_two,
            additional_per_person: payload.additional_per_person,
            non_prime_per_diner: payload.non_prime_per_diner,
            non_prime_minimum: payload.non_prime_minimum,
            platform_fee_percent: payload.platform_fee_percent,
            min_party_size: payload.min_party_size,
            max_party_size: payload.max_party_size,
            effective_from: Utc::now().date_naive(),
            is_active: true,
        };

        self.store.replace_active(venue_id, config)
    }

    pub fn preview(&self, venue_id: Uuid, party_size: i32) -> Result<PricingPreview, AppError> {
        let config = self.active_config(venue_id)?;
        ensure_party_within_bounds(&config, party_size)?;

        Ok(PricingPreview {
            party_size,
            prime: calculate_prime_pricing(party_size, &config)?,
            non_prime: calculate_non_prime_pricing(party_size, &config)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn config() -> PricingConfig {
        PricingConfig {
            id: Uuid::new_v4(),
            venue_id: Uuid::new_v4(),
            base_for_two: Decimal::new(8000, 2),          // 80.00
            additional_per_person: Decimal::new(3000, 2), // 30.00
            non_prime_per_diner: Decimal::new(2250, 2),   // 22.50
            non_prime_minimum: Some(Decimal::new(4500, 2)),
            platform_fee_percent: Decimal::new(10, 2), // 0.10
            min_party_size: 1,
            max_party_size: 12,
            effective_from: NaiveDate::from_ymd_opt(2026, 1, 1).unwrap(),
            is_active: true,
        }
    }

    #[test]
    fn prime_para_quatro_pessoas() {
        let result = calculate_prime_pricing(4, &config()).unwrap();
        assert_eq!(result.base, Decimal::new(8000, 2));
        assert_eq!(result.additional, Decimal::new(6000, 2));
        assert_eq!(result.subtotal, Decimal::new(14000, 2));
        assert_eq!(result.platform_fee, Decimal::new(1400, 2));
        assert_eq!(result.total, Decimal::new(15400, 2));
    }

    #[test]
    fn uma_pessoa_paga_a_base_de_duas() {
        let result = calculate_prime_pricing(1, &config()).unwrap();
        assert_eq!(result.base, Decimal::new(8000, 2));
        assert_eq!(result.additional, Decimal::ZERO);
        assert_eq!(result.subtotal, Decimal::new(8000, 2));
        assert_eq!(result.platform_fee, Decimal::new(800, 2));
        assert_eq!(result.total, Decimal::new(8800, 2));
    }

    #[test]
    fn duas_pessoas_nao_tem_adicional() {
        let result = calculate_prime_pricing(2, &config()).unwrap();
        assert_eq!(result.additional, Decimal::ZERO);
        assert_eq!(result.subtotal, result.base);
    }

    #[test]
    fn total_fecha_com_subtotal_mais_taxa() {
        for n in 1..=12 {
            let result = calculate_prime_pricing(n, &config()).unwrap();
            assert_eq!(result.total, result.subtotal + result.platform_fee);
        }
    }

    #[test]
    fn quantidade_invalida_e_rejeitada() {
        assert!(matches!(
            calculate_prime_pricing(0, &config()),
            Err(AppError::InvalidInput(_))
        ));
        assert!(matches!(
            calculate_prime_pricing(-3, &config()),
            Err(AppError::InvalidInput(_))
        ));
        assert!(matches!(
            calculate_non_prime_pricing(0, &config()),
            Err(AppError::InvalidInput(_))
        ));
    }

    #[test]
    fn non_prime_respeita_o_piso() {
        // 1 pessoa: 22.50 < piso 45.00 => cobra o piso
        let result = calculate_non_prime_pricing(1, &config()).unwrap();
        assert_eq!(result.base, Decimal::new(4500, 2));
        assert_eq!(result.platform_fee, Decimal::new(450, 2));
        assert_eq!(result.total, Decimal::new(4950, 2));

        // 4 pessoas: 90.00 > piso => cobra por pessoa
        let result = calculate_non_prime_pricing(4, &config()).unwrap();
        assert_eq!(result.base, Decimal::new(9000, 2));
    }

    #[test]
    fn non_prime_sem_piso_configurado() {
        let mut cfg = config();
        cfg.non_prime_minimum = None;
        let result = calculate_non_prime_pricing(1, &cfg).unwrap();
        assert_eq!(result.base, Decimal::new(2250, 2));
    }

    #[test]
    fn taxa_arredonda_half_up() {
        let mut cfg = config();
        // subtotal 80 + 30 = 110; 110 * 0.075 = 8.25 (exato)
        cfg.platform_fee_percent = Decimal::new(75, 3);
        let result = calculate_prime_pricing(3, &cfg).unwrap();
        assert_eq!(result.platform_fee, Decimal::new(825, 2));

        // base 33.33; 33.33 * 0.075 = 2.49975 => 2.50 (meio para cima)
        cfg.base_for_two = Decimal::new(3333, 2);
        let result = calculate_prime_pricing(2, &cfg).unwrap();
        assert_eq!(result.platform_fee, Decimal::new(250, 2));
    }

    #[test]
    fn limites_de_grupo() {
        let cfg = config();
        assert!(ensure_party_within_bounds(&cfg, 1).is_ok());
        assert!(ensure_party_within_bounds(&cfg, 12).is_ok());
        assert!(matches!(
            ensure_party_within_bounds(&cfg, 13),
            Err(AppError::InvalidInput(_))
        ));
    }
}
