// src/store/venue_store.rs

use std::sync::{Arc, RwLock, RwLockReadGuard};

use anyhow::anyhow;
use uuid::Uuid;

use crate::{common::error::AppError, models::venue::Venue};

// Dados de referência das casas. Somente leitura após o seed.
#[derive(Clone)]
pub struct VenueStore {
    inner: Arc<RwLock<Vec<Venue>>>,
}

impl VenueStore {
    pub fn new(seed: Vec<Venue>) -> Self {
        Self {
            inner: Arc::new(RwLock::new(seed)),
        }
    }

    fn read(&self) -> Result<RwLockReadGuard<'_, Vec<Venue>>, AppError> {
        self.inner
            .read()
            .map_err(|_| AppError::from(anyhow!("lock de casas envenenado")))
    }

    pub fn list_in(&self, venue_ids: &[Uuid]) -> Result<Vec<Venue>, AppError> {
        let venues = self.read()?;
        let mut result: Vec<Venue> = venues
            .iter()
            .filter(|v| venue_ids.contains(&v.id))
            .cloned()
            .collect();
        result.sort_by(|a, b| a.name.cmp(&b.name));
        Ok(result)
    }

    pub fn find(&self, id: Uuid) -> Result<Option<Venue>, AppError> {
        let venues = self.read()?;
        Ok(venues.iter().find(|v| v.id == id).cloned())
    }
}
