//! Modelos de marcas de neumáticos y cambios de neumáticos
//!
//! Las marcas son datos de referencia globales (no pertenecen a un
//! administrador). Los cambios son historial de solo lectura: se crean
//! y se consultan, nunca se actualizan.

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;
use validator::Validate;

#[derive(Debug, Clone, Serialize, FromRow)]
pub struct TireBrand {
    pub id: Uuid,
    pub name: String,
    pub created_at: DateTime<Utc>,
}

/// Registro de cambio de neumático
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct TireChange {
    pub id: Uuid,
    pub admin_id: Uuid,
    pub car_id: Uuid,
    pub brand_id: Uuid,
    pub position: String,
    pub odometer_at_change: Decimal,
    pub change_date: NaiveDate,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Deserialize, Validate)]
pub struct CreateTireBrandRequest {
    #[validate(length(min = 2, max = 100))]
    pub name: String,
}

#[derive(Debug, Deserialize, Validate)]
pub struct CreateTireChangeRequest {
    pub car_id: Uuid,
    pub brand_id: Uuid,

    /// Posición en el camión: dianteiro, tração, carreta
    #[validate(length(min = 2, max = 50))]
    pub position: String,

    pub odometer_at_change: f64,
    pub change_date: NaiveDate,
}
