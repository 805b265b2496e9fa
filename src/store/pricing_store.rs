// src/store/pricing_store.rs

use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

use anyhow::anyhow;
use uuid::Uuid;

use crate::{
    common::error::AppError,
    models::{
        pricing::{CommissionRate, PricingConfig},
        promoter::PromoterTier,
    },
};

// Configurações de preço por casa + taxas de comissão por nível
#[derive(Clone)]
pub struct PricingStore {
    configs: Arc<RwLock<Vec<PricingConfig>>>,
    rates: Arc<RwLock<Vec<CommissionRate>>>,
}

impl PricingStore {
    pub fn new(configs: Vec<PricingConfig>, rates: Vec<CommissionRate>) -> Self {
        Self {
            configs: Arc::new(RwLock::new(configs)),
            rates: Arc::new(RwLock::new(rates)),
        }
    }

    fn read_configs(&self) -> Result<RwLockReadGuard<'_, Vec<PricingConfig>>, AppError> {
        self.configs
            .read()
            .map_err(|_| AppError::from(anyhow!("lock de preços envenenado")))
    }

    fn write_configs(&self) -> Result<RwLockWriteGuard<'_, Vec<PricingConfig>>, AppError> {
        self.configs
            .write()
            .map_err(|_| AppError::from(anyhow!("lock de preços envenenado")))
    }

    pub fn active_config(&self, venue_id: Uuid) -> Result<Option<PricingConfig>, AppError> {
        let configs = self.read_configs()?;
        Ok(configs
            .iter()
            .find(|c| c.venue_id == venue_id && c.is_active)
            .cloned())
    }

    // Desativa a configuração vigente e ativa a nova sob o mesmo write lock,
    // preservando o invariante de exatamente uma ativa por casa.
    pub fn replace_active(
        &self,
        venue_id: Uuid,
        new_config: PricingConfig,
    ) -> Result<PricingConfig, AppError> {
        let mut configs = self.write_configs()?;
        for config in configs.iter_mut().filter(|c| c.venue_id == venue_id) {
            config.is_active = false;
        }
        configs.push(new_config.clone());
        Ok(new_config)
    }

    pub fn rate_for_tier(&self, tier: PromoterTier) -> Result<Option<CommissionRate>, AppError> {
        let rates = self
            .rates
            .read()
            .map_err(|_| AppError::from(anyhow!("lock de taxas envenenado")))?;
        Ok(rates.iter().find(|r| r.tier == tier).cloned())
    }
}
