//! Modelo de Car
//!
//! Camiones registrados por un administrador. Mapea a la tabla cars.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;
use validator::Validate;

/// Camión - propiedad exclusiva de un administrador
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Car {
    pub id: Uuid,
    pub admin_id: Uuid,
    pub plate: String,
    pub brand: String,
    pub model: Option<String>,
    pub year: Option<i32>,
    pub created_at: DateTime<Utc>,
}

/// Request para registrar un camión
#[derive(Debug, Deserialize, Validate)]
pub struct CreateCarRequest {
    #[validate(length(min = 5, max = 20))]
    pub plate: String,

    #[validate(length(min = 2, max = 100))]
    pub brand: String,

    #[validate(length(min = 2, max = 100))]
    pub model: Option<String>,

    #[validate(range(min = 1950, max = 2035))]
    pub year: Option<i32>,
}
