//! Modelo de Cycle
//!
//! Un ciclo es la asignación de un motorista + camión que parte con una
//! lectura de odómetro comprobada por foto. Es la raíz de agregación de
//! fretes, abastecimientos y despesas.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::{FromRow, Type};
use uuid::Uuid;
use validator::Validate;

/// Estado del ciclo - mapea al ENUM cycle_status
///
/// La transición es una sola y en un solo sentido: open -> closed.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Type, PartialEq, Eq)]
#[sqlx(type_name = "cycle_status", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum CycleStatus {
    Open,
    Closed,
}

/// Cycle principal - mapea a la tabla cycles
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Cycle {
    pub id: Uuid,
    pub admin_id: Uuid,
    pub driver_id: Uuid,
    pub car_id: Uuid,
    pub description: String,
    pub departure_at: DateTime<Utc>,
    pub departure_odometer: Decimal,
    pub departure_photo_url: String,
    pub status: CycleStatus,
    pub created_at: DateTime<Utc>,
}

/// Request para abrir un nuevo ciclo
///
/// La foto del odómetro de salida viene como data URL base64, tal como
/// la captura el front. Un ciclo no puede existir sin esa evidencia.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateCycleRequest {
    #[validate(length(min = 1, max = 200))]
    pub description: String,

    pub driver_id: Uuid,
    pub car_id: Uuid,
    pub departure_at: DateTime<Utc>,
    pub departure_odometer: f64,
    pub departure_photo: Option<String>,
}

/// Request para editar un ciclo existente
///
/// La foto solo se reemplaza si viene un payload nuevo.
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateCycleRequest {
    #[validate(length(min = 1, max = 200))]
    pub description: Option<String>,

    pub driver_id: Option<Uuid>,
    pub car_id: Option<Uuid>,
    pub departure_at: Option<DateTime<Utc>>,
    pub departure_odometer: Option<f64>,
    pub departure_photo: Option<String>,
}

/// Filtro de estado para listados y dashboard
#[derive(Debug, Clone, Copy, Default, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum StatusFilter {
    Open,
    Closed,
    #[default]
    All,
}

impl StatusFilter {
    pub fn matches(&self, status: CycleStatus) -> bool {
        match self {
            StatusFilter::All => true,
            StatusFilter::Open => status == CycleStatus::Open,
            StatusFilter::Closed => status == CycleStatus::Closed,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_filter_matches() {
        assert!(StatusFilter::All.matches(CycleStatus::Open));
        assert!(StatusFilter::All.matches(CycleStatus::Closed));
        assert!(StatusFilter::Open.matches(CycleStatus::Open));
        assert!(!StatusFilter::Open.matches(CycleStatus::Closed));
        assert!(StatusFilter::Closed.matches(CycleStatus::Closed));
        assert!(!StatusFilter::Closed.matches(CycleStatus::Open));
    }
}
