//! Shared application state
//!
//! Este módulo define el estado compartido de la aplicación que se pasa
//! a través del router de Axum.

use sqlx::PgPool;

use crate::config::EnvironmentConfig;
use crate::services::photo_storage::PhotoStorage;

#[derive(Clone)]
pub struct AppState {
    pub pool: PgPool,
    pub config: EnvironmentConfig,
    pub photos: PhotoStorage,
}

impl AppState {
    pub fn new(pool: PgPool, config: EnvironmentConfig) -> Self {
        let photos = PhotoStorage::new(&config.upload_dir);
        Self {
            pool,
            config,
            photos,
        }
    }
}
