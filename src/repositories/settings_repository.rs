//! Repositorio de configuración de comisión y permisos de motorista
//!
//! La ausencia de fila no es error: se devuelven los defaults del
//! modelo. Los guardados son upserts.

use chrono::Utc;
use rust_decimal::Decimal;
use sqlx::PgPool;
use uuid::Uuid;

use crate::models::settings::{CommissionSettings, DriverPermissions};
use crate::utils::errors::AppError;

pub struct SettingsRepository {
    pool: PgPool,
}

impl SettingsRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn get_commission(&self, admin_id: Uuid) -> Result<CommissionSettings, AppError> {
        let settings = sqlx::query_as::<_, CommissionSettings>(
            "SELECT * FROM commission_settings WHERE admin_id = $1",
        )
        .bind(admin_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(settings.unwrap_or_else(|| CommissionSettings::default_for(admin_id)))
    }

    pub async fn save_commission(
        &self,
        admin_id: Uuid,
        commission_percentage: Decimal,
    ) -> Result<CommissionSettings, AppError> {
        let settings = sqlx::query_as::<_, CommissionSettings>(
            r#"
            INSERT INTO commission_settings (admin_id, commission_percentage, updated_at)
            VALUES ($1, $2, $3)
            ON CONFLICT (admin_id)
            DO UPDATE SET commission_percentage = EXCLUDED.commission_percentage, updated_at = EXCLUDED.updated_at
            RETURNING *
            "#,
        )
        .bind(admin_id)
        .bind(commission_percentage)
        .bind(Utc::now())
        .fetch_one(&self.pool)
        .await?;

        Ok(settings)
    }

    pub async fn get_permissions(&self, driver_id: Uuid) -> Result<DriverPermissions, AppError> {
        let permissions = sqlx::query_as::<_, DriverPermissions>(
            "SELECT * FROM driver_permissions WHERE driver_id = $1",
        )
        .bind(driver_id)
        .fetch_optional(&self.pool)
        .await?;

        Ok(permissions.unwrap_or_else(|| DriverPermissions::default_for(driver_id)))
    }

    pub async fn save_permissions(
        &self,
        driver_id: Uuid,
        view_tire_changes: bool,
        view_fuelings: bool,
        view_expenses: bool,
    ) -> Result<DriverPermissions, AppError> {
        let permissions = sqlx::query_as::<_, DriverPermissions>(
            r#"
            INSERT INTO driver_permissions (driver_id, view_tire_changes, view_fuelings, view_expenses, updated_at)
            VALUES ($1, $2, $3, $4, $5)
            ON CONFLICT (driver_id)
            DO UPDATE SET view_tire_changes = EXCLUDED.view_tire_changes,
                          view_fuelings = EXCLUDED.view_fuelings,
                          view_expenses = EXCLUDED.view_expenses,
                          updated_at = EXCLUDED.updated_at
            RETURNING *
            "#,
        )
        .bind(driver_id)
        .bind(view_tire_changes)
        .bind(view_fuelings)
        .bind(view_expenses)
        .bind(Utc::now())
        .fetch_one(&self.pool)
        .await?;

        Ok(permissions)
    }
}
