// src/store/promoter_store.rs

use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

use anyhow::anyhow;
use uuid::Uuid;

use crate::{
    common::error::AppError,
    models::promoter::{Promoter, PromoterTier},
};

#[derive(Clone)]
pub struct PromoterStore {
    inner: Arc<RwLock<Vec<Promoter>>>,
}

impl PromoterStore {
    pub fn new(seed: Vec<Promoter>) -> Self {
        Self {
            inner: Arc::new(RwLock::new(seed)),
        }
    }

    fn read(&self) -> Result<RwLockReadGuard<'_, Vec<Promoter>>, AppError> {
        self.inner
            .read()
            .map_err(|_| AppError::from(anyhow!("lock de promoters envenenado")))
    }

    fn write(&self) -> Result<RwLockWriteGuard<'_, Vec<Promoter>>, AppError> {
        self.inner
            .write()
            .map_err(|_| AppError::from(anyhow!("lock de promoters envenenado")))
    }

    // Promoters que atuam em ao menos uma casa do escopo
    pub fn list_in(&self, venue_ids: &[Uuid]) -> Result<Vec<Promoter>, AppError> {
        let promoters = self.read()?;
        let mut result: Vec<Promoter> = promoters
            .iter()
            .filter(|p| p.venue_ids.iter().any(|v| venue_ids.contains(v)))
            .cloned()
            .collect();
        result.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(result)
    }

    pub fn find(&self, id: Uuid) -> Result<Option<Promoter>, AppError> {
        let promoters = self.read()?;
        Ok(promoters.iter().find(|p| p.id == id).cloned())
    }

    // Troca de nível por substituição do valor inteiro, sob um único write lock
    pub fn assign_tier(&self, id: Uuid, tier: PromoterTier) -> Result<Promoter, AppError> {
        let mut promoters = self.write()?;
        let slot = promoters
            .iter_mut()
            .find(|p| p.id == id)
            .ok_or(AppError::NotFound("Promoter"))?;
        let mut updated = slot.clone();
        updated.tier = tier;
        *slot = updated.clone();
        Ok(updated)
    }
}
