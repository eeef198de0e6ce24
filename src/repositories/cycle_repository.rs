//! Repositorio de ciclos
//!
//! Incluye el contrato de cascada: borrar un ciclo elimina todos sus
//! fretes, abastecimientos y despesas dentro de una sola transacción.
//! O se borra todo, o no se borra nada.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use sqlx::PgPool;
use uuid::Uuid;

use crate::models::cycle::Cycle;
use crate::utils::errors::{not_found_error, AppError};

pub struct CycleRepository {
    pool: PgPool,
}

/// Campos editables de un ciclo; None conserva el valor actual
#[derive(Debug, Default)]
pub struct CyclePatch {
    pub description: Option<String>,
    pub driver_id: Option<Uuid>,
    pub car_id: Option<Uuid>,
    pub departure_at: Option<DateTime<Utc>>,
    pub departure_odometer: Option<Decimal>,
    pub departure_photo_url: Option<String>,
}

impl CycleRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    #[allow(clippy::too_many_arguments)]
    pub async fn create(
        &self,
        admin_id: Uuid,
        driver_id: Uuid,
        car_id: Uuid,
        description: String,
        departure_at: DateTime<Utc>,
        departure_odometer: Decimal,
        departure_photo_url: String,
    ) -> Result<Cycle, AppError> {
        let cycle = sqlx::query_as::<_, Cycle>(
            r#"
            INSERT INTO cycles (id, admin_id, driver_id, car_id, description, departure_at, departure_odometer, departure_photo_url, status, created_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, 'open', $9)
            RETURNING *
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(admin_id)
        .bind(driver_id)
        .bind(car_id)
        .bind(description)
        .bind(departure_at)
        .bind(departure_odometer)
        .bind(departure_photo_url)
        .bind(Utc::now())
        .fetch_one(&self.pool)
        .await?;

        Ok(cycle)
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<Cycle>, AppError> {
        let cycle = sqlx::query_as::<_, Cycle>("SELECT * FROM cycles WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(cycle)
    }

    pub async fn find_by_admin(&self, admin_id: Uuid) -> Result<Vec<Cycle>, AppError> {
        let cycles = sqlx::query_as::<_, Cycle>(
            "SELECT * FROM cycles WHERE admin_id = $1 ORDER BY departure_at DESC",
        )
        .bind(admin_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(cycles)
    }

    /// Ciclos del administrador asignados a un motorista específico
    pub async fn find_by_admin_and_driver(
        &self,
        admin_id: Uuid,
        driver_id: Uuid,
    ) -> Result<Vec<Cycle>, AppError> {
        let cycles = sqlx::query_as::<_, Cycle>(
            "SELECT * FROM cycles WHERE admin_id = $1 AND driver_id = $2 ORDER BY departure_at DESC",
        )
        .bind(admin_id)
        .bind(driver_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(cycles)
    }

    pub async fn update(&self, id: Uuid, patch: CyclePatch) -> Result<Cycle, AppError> {
        let current = self
            .find_by_id(id)
            .await?
            .ok_or_else(|| not_found_error("Cycle", id))?;

        let cycle = sqlx::query_as::<_, Cycle>(
            r#"
            UPDATE cycles
            SET description = $2, driver_id = $3, car_id = $4, departure_at = $5, departure_odometer = $6, departure_photo_url = $7
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(patch.description.unwrap_or(current.description))
        .bind(patch.driver_id.unwrap_or(current.driver_id))
        .bind(patch.car_id.unwrap_or(current.car_id))
        .bind(patch.departure_at.unwrap_or(current.departure_at))
        .bind(patch.departure_odometer.unwrap_or(current.departure_odometer))
        .bind(patch.departure_photo_url.unwrap_or(current.departure_photo_url))
        .fetch_one(&self.pool)
        .await?;

        Ok(cycle)
    }

    /// Transición open -> closed. Devuelve false si el ciclo ya no
    /// estaba abierto (el caller lo reporta como Forbidden, no como
    /// éxito silencioso).
    pub async fn close(&self, id: Uuid) -> Result<bool, AppError> {
        let result = sqlx::query("UPDATE cycles SET status = 'closed' WHERE id = $1 AND status = 'open'")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected() == 1)
    }

    /// Borrado en cascada del ciclo y todos sus registros hijos
    pub async fn delete_cascade(&self, id: Uuid) -> Result<(), AppError> {
        let mut tx = self.pool.begin().await?;

        sqlx::query("DELETE FROM freights WHERE cycle_id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await?;
        sqlx::query("DELETE FROM fuelings WHERE cycle_id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await?;
        sqlx::query("DELETE FROM expenses WHERE cycle_id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await?;
        sqlx::query("DELETE FROM cycles WHERE id = $1")
            .bind(id)
            .execute(&mut *tx)
            .await?;

        tx.commit().await?;
        Ok(())
    }
}
