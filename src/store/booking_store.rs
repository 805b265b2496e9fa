// src/store/booking_store.rs

use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

use anyhow::anyhow;
use chrono::NaiveDate;
use uuid::Uuid;

use crate::{
    common::error::AppError,
    models::booking::{Booking, BookingStatus},
};

#[derive(Clone)]
pub struct BookingStore {
    inner: Arc<RwLock<Vec<Booking>>>,
}

impl BookingStore {
    pub fn new(seed: Vec<Booking>) -> Self {
        Self {
            inner: Arc::new(RwLock::new(seed)),
        }
    }

    fn read(&self) -> Result<RwLockReadGuard<'_, Vec<Booking>>, AppError> {
        self.inner
            .read()
            .map_err(|_| AppError::from(anyhow!("lock de reservas envenenado")))
    }

    fn write(&self) -> Result<RwLockWriteGuard<'_, Vec<Booking>>, AppError> {
        self.inner
            .write()
            .map_err(|_| AppError::from(anyhow!("lock de reservas envenenado")))
    }

    // Filtro + ordenação no estilo da camada simulada: mais recentes primeiro
    pub fn list(
        &self,
        venue_ids: &[Uuid],
        status: Option<BookingStatus>,
        date: Option<NaiveDate>,
    ) -> Result<Vec<Booking>, AppError> {
        let bookings = self.read()?;
        let mut result: Vec<Booking> = bookings
            .iter()
            .filter(|b| venue_ids.contains(&b.venue_id))
            .filter(|b| status.is_none_or(|s| b.status == s))
            .filter(|b| date.is_none_or(|d| b.scheduled_at.date_naive() == d))
            .cloned()
            .collect();
        result.sort_by(|a, b| b.scheduled_at.cmp(&a.scheduled_at));
        Ok(result)
    }

    pub fn find(&self, id: Uuid) -> Result<Option<Booking>, AppError> {
        let bookings = self.read()?;
        Ok(bookings.iter().find(|b| b.id == id).cloned())
    }

    pub fn insert(&self, booking: Booking) -> Result<Booking, AppError> {
        let mut bookings = self.write()?;
        bookings.push(booking.clone());
        Ok(booking)
    }

    // Substituição do valor inteiro pelo id — nunca atualização parcial de campos
    pub fn replace(&self, booking: Booking) -> Result<Booking, AppError> {
        let mut bookings = self.write()?;
        let slot = bookings
            .iter_mut()
            .find(|b| b.id == booking.id)
            .ok_or(AppError::NotFound("Reserva"))?;
        *slot = booking.clone();
        Ok(booking)
    }
}
