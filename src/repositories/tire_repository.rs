//! Repositorio de marcas de neumáticos y cambios
//!
//! Los cambios son historial de solo lectura: create y list, sin update.

use chrono::{NaiveDate, Utc};
use rust_decimal::Decimal;
use sqlx::PgPool;
use uuid::Uuid;

use crate::models::tire::{TireBrand, TireChange};
use crate::utils::errors::AppError;

pub struct TireRepository {
    pool: PgPool,
}

impl TireRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn create_brand(&self, name: String) -> Result<TireBrand, AppError> {
        let brand = sqlx::query_as::<_, TireBrand>(
            r#"
            INSERT INTO tire_brands (id, name, created_at)
            VALUES ($1, $2, $3)
            RETURNING *
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(name)
        .bind(Utc::now())
        .fetch_one(&self.pool)
        .await?;

        Ok(brand)
    }

    pub async fn find_brand_by_id(&self, id: Uuid) -> Result<Option<TireBrand>, AppError> {
        let brand = sqlx::query_as::<_, TireBrand>("SELECT * FROM tire_brands WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(brand)
    }

    /// Las marcas son referencia global, sin scoping por administrador
    pub async fn list_brands(&self) -> Result<Vec<TireBrand>, AppError> {
        let brands =
            sqlx::query_as::<_, TireBrand>("SELECT * FROM tire_brands ORDER BY name ASC")
                .fetch_all(&self.pool)
                .await?;

        Ok(brands)
    }

    #[allow(clippy::too_many_arguments)]
    pub async fn create_change(
        &self,
        admin_id: Uuid,
        car_id: Uuid,
        brand_id: Uuid,
        position: String,
        odometer_at_change: Decimal,
        change_date: NaiveDate,
    ) -> Result<TireChange, AppError> {
        let change = sqlx::query_as::<_, TireChange>(
            r#"
            INSERT INTO tire_changes (id, admin_id, car_id, brand_id, position, odometer_at_change, change_date, created_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8)
            RETURNING *
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(admin_id)
        .bind(car_id)
        .bind(brand_id)
        .bind(position)
        .bind(odometer_at_change)
        .bind(change_date)
        .bind(Utc::now())
        .fetch_one(&self.pool)
        .await?;

        Ok(change)
    }

    pub async fn find_changes_by_admin(&self, admin_id: Uuid) -> Result<Vec<TireChange>, AppError> {
        let changes = sqlx::query_as::<_, TireChange>(
            "SELECT * FROM tire_changes WHERE admin_id = $1 ORDER BY change_date DESC",
        )
        .bind(admin_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(changes)
    }
}
