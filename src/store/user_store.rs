// src/store/user_store.rs

use std::sync::{Arc, RwLock, RwLockReadGuard};

use anyhow::anyhow;
use uuid::Uuid;

use crate::{common::error::AppError, models::auth::User};

// Camada de dados simulada: os usuários demo vivem em memória,
// espelhando o comportamento da fonte de dados original (sem banco).
#[derive(Clone)]
pub struct UserStore {
    inner: Arc<RwLock<Vec<User>>>,
}

impl UserStore {
    pub fn new(seed: Vec<User>) -> Self {
        Self {
            inner: Arc::new(RwLock::new(seed)),
        }
    }

    fn read(&self) -> Result<RwLockReadGuard<'_, Vec<User>>, AppError> {
        self.inner
            .read()
            .map_err(|_| AppError::from(anyhow!("lock de usuários envenenado")))
    }

    pub fn find_by_email(&self, email: &str) -> Result<Option<User>, AppError> {
        let users = self.read()?;
        Ok(users
            .iter()
            .find(|u| u.email.eq_ignore_ascii_case(email))
            .cloned())
    }

    pub fn find_by_id(&self, id: Uuid) -> Result<Option<User>, AppError> {
        let users = self.read()?;
        Ok(users.iter().find(|u| u.id == id).cloned())
    }
}
