//! Shared application state
//!
//! Este módulo define el estado compartido de la aplicación que se pasa
//! a través del router de Axum.

use std::sync::Arc;

use sqlx::PgPool;

use crate::clients::VehicleCatalog;
use crate::repositories::{
    CarRepository, InMemoryStore, PgCarRepository, PgRatingRepository, RatingRepository,
};

#[derive(Clone)]
pub struct AppState {
    pub cars: Arc<dyn CarRepository>,
    pub ratings: Arc<dyn RatingRepository>,
    pub catalog: Arc<dyn VehicleCatalog>,
}

impl AppState {
    pub fn new(
        cars: Arc<dyn CarRepository>,
        ratings: Arc<dyn RatingRepository>,
        catalog: Arc<dyn VehicleCatalog>,
    ) -> Self {
        Self {
            cars,
            ratings,
            catalog,
        }
    }

    /// Estado respaldado por PostgreSQL
    pub fn with_postgres(pool: PgPool, catalog: Arc<dyn VehicleCatalog>) -> Self {
        Self::new(
            Arc::new(PgCarRepository::new(pool.clone())),
            Arc::new(PgRatingRepository::new(pool)),
            catalog,
        )
    }

    /// Estado en memoria (sin base de datos)
    pub fn in_memory(catalog: Arc<dyn VehicleCatalog>) -> Self {
        let store = Arc::new(InMemoryStore::new());
        Self::new(store.clone(), store, catalog)
    }
}
