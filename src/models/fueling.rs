//! Modelo de Fueling
//!
//! Un abastecimiento registra litros y precio unitario de arla y diésel
//! S-10 con 4 decimales, tal como los captura la bomba. El total es un
//! campo derivado redondeado a 2 decimales.

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;
use validator::Validate;

#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Fueling {
    pub id: Uuid,
    pub cycle_id: Uuid,
    pub date: NaiveDate,
    pub station: String,
    pub odometer: Decimal,
    pub arla_liters: Decimal,
    pub arla_price_per_liter: Decimal,
    pub diesel_liters: Decimal,
    pub diesel_price_per_liter: Decimal,
    pub total: Decimal,
    pub odometer_photo_url: String,
    pub receipt_photo_url: String,
    pub created_at: DateTime<Utc>,
}

/// Request para agregar un abastecimiento
///
/// Cualquiera de los dos combustibles puede venir en cero.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateFuelingRequest {
    pub date: NaiveDate,

    #[validate(length(min = 1, max = 150))]
    pub station: String,

    pub odometer: f64,

    #[serde(default)]
    pub arla_liters: f64,
    #[serde(default)]
    pub arla_price_per_liter: f64,
    #[serde(default)]
    pub diesel_liters: f64,
    #[serde(default)]
    pub diesel_price_per_liter: f64,

    /// Foto del odómetro - siempre requerida
    pub odometer_photo: Option<String>,
    /// Foto de la nota fiscal - siempre requerida
    pub receipt_photo: Option<String>,
}

/// Request para editar un abastecimiento
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateFuelingRequest {
    pub date: Option<NaiveDate>,

    #[validate(length(min = 1, max = 150))]
    pub station: Option<String>,

    pub odometer: Option<f64>,
    pub arla_liters: Option<f64>,
    pub arla_price_per_liter: Option<f64>,
    pub diesel_liters: Option<f64>,
    pub diesel_price_per_liter: Option<f64>,
    pub odometer_photo: Option<String>,
    pub receipt_photo: Option<String>,
}
