//! Modelo de Freight
//!
//! Un frete es una carga transportada dentro de un ciclo. El valor y la
//! comisión son campos derivados: se calculan al persistir y se
//! recalculan en cada edición. El porcentaje de comisión queda congelado
//! en el registro al momento de crearlo.

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;
use validator::Validate;

#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Freight {
    pub id: Uuid,
    pub cycle_id: Uuid,
    pub date: NaiveDate,
    pub origin: String,
    pub destination: String,
    /// Peso de salida en kilogramos
    pub departure_weight: Decimal,
    pub arrival_weight: Option<Decimal>,
    /// Tarifa por tonelada métrica
    pub rate_per_ton: Decimal,
    pub value: Decimal,
    pub commission_percent: Decimal,
    pub commission_value: Decimal,
    pub loss_value: Decimal,
    pub departure_photo_url: String,
    pub arrival_photo_url: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Request para agregar un frete a un ciclo
#[derive(Debug, Deserialize, Validate)]
pub struct CreateFreightRequest {
    pub date: NaiveDate,

    #[validate(length(min = 1, max = 150))]
    pub origin: String,

    #[validate(length(min = 1, max = 150))]
    pub destination: String,

    pub departure_weight: f64,
    pub arrival_weight: Option<f64>,
    pub rate_per_ton: f64,
    pub loss_value: Option<f64>,

    /// Foto del peso de salida (data URL) - siempre requerida
    pub departure_photo: Option<String>,
    /// Foto del peso de llegada - requerida solo si viene arrival_weight
    pub arrival_photo: Option<String>,
}

/// Request para editar un frete
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateFreightRequest {
    pub date: Option<NaiveDate>,

    #[validate(length(min = 1, max = 150))]
    pub origin: Option<String>,

    #[validate(length(min = 1, max = 150))]
    pub destination: Option<String>,

    pub departure_weight: Option<f64>,
    pub arrival_weight: Option<f64>,
    pub rate_per_ton: Option<f64>,
    pub loss_value: Option<f64>,
    pub departure_photo: Option<String>,
    pub arrival_photo: Option<String>,
}
