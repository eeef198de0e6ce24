//! Configuraciones por administrador y permisos por motorista
//!
//! Dos mapas keyed: admin_id -> CommissionSettings y
//! driver_id -> DriverPermissions. Cuando no hay registro se aplican
//! los defaults (10% de comisión, todas las vistas habilitadas).

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;
use validator::Validate;

pub const DEFAULT_COMMISSION_PERCENTAGE: u32 = 10;

#[derive(Debug, Clone, Serialize, FromRow)]
pub struct CommissionSettings {
    pub admin_id: Uuid,
    pub commission_percentage: Decimal,
    pub updated_at: DateTime<Utc>,
}

impl CommissionSettings {
    /// Default aplicado cuando el administrador nunca guardó configuración
    pub fn default_for(admin_id: Uuid) -> Self {
        Self {
            admin_id,
            commission_percentage: Decimal::from(DEFAULT_COMMISSION_PERCENTAGE),
            updated_at: Utc::now(),
        }
    }
}

#[derive(Debug, Clone, Serialize, FromRow)]
pub struct DriverPermissions {
    pub driver_id: Uuid,
    pub view_tire_changes: bool,
    pub view_fuelings: bool,
    pub view_expenses: bool,
    pub updated_at: DateTime<Utc>,
}

impl DriverPermissions {
    /// Default aplicado cuando el administrador nunca ajustó permisos
    pub fn default_for(driver_id: Uuid) -> Self {
        Self {
            driver_id,
            view_tire_changes: true,
            view_fuelings: true,
            view_expenses: true,
            updated_at: Utc::now(),
        }
    }
}

#[derive(Debug, Deserialize, Validate)]
pub struct UpdateCommissionRequest {
    #[validate(range(min = 0.0, max = 100.0))]
    pub commission_percentage: f64,
}

#[derive(Debug, Deserialize)]
pub struct UpdatePermissionsRequest {
    pub view_tire_changes: bool,
    pub view_fuelings: bool,
    pub view_expenses: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let admin_id = Uuid::new_v4();
        let settings = CommissionSettings::default_for(admin_id);
        assert_eq!(settings.commission_percentage, Decimal::from(10));

        let driver_id = Uuid::new_v4();
        let perms = DriverPermissions::default_for(driver_id);
        assert!(perms.view_tire_changes && perms.view_fuelings && perms.view_expenses);
    }
}
