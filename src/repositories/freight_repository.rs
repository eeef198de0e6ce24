//! Repositorio de fretes
//!
//! Los campos derivados (value, commission_value) llegan ya calculados
//! desde el controller; aquí solo se persisten.

use chrono::{NaiveDate, Utc};
use rust_decimal::Decimal;
use sqlx::PgPool;
use uuid::Uuid;

use crate::models::freight::Freight;
use crate::utils::errors::AppError;

pub struct FreightRepository {
    pool: PgPool,
}

/// Fila completa lista para insertar
#[derive(Debug)]
pub struct NewFreight {
    pub cycle_id: Uuid,
    pub date: NaiveDate,
    pub origin: String,
    pub destination: String,
    pub departure_weight: Decimal,
    pub arrival_weight: Option<Decimal>,
    pub rate_per_ton: Decimal,
    pub value: Decimal,
    pub commission_percent: Decimal,
    pub commission_value: Decimal,
    pub loss_value: Decimal,
    pub departure_photo_url: String,
    pub arrival_photo_url: Option<String>,
}

impl FreightRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn create(&self, new: NewFreight) -> Result<Freight, AppError> {
        let freight = sqlx::query_as::<_, Freight>(
            r#"
            INSERT INTO freights (id, cycle_id, date, origin, destination, departure_weight, arrival_weight,
                                  rate_per_ton, value, commission_percent, commission_value, loss_value,
                                  departure_photo_url, arrival_photo_url, created_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14, $15)
            RETURNING *
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(new.cycle_id)
        .bind(new.date)
        .bind(new.origin)
        .bind(new.destination)
        .bind(new.departure_weight)
        .bind(new.arrival_weight)
        .bind(new.rate_per_ton)
        .bind(new.value)
        .bind(new.commission_percent)
        .bind(new.commission_value)
        .bind(new.loss_value)
        .bind(new.departure_photo_url)
        .bind(new.arrival_photo_url)
        .bind(Utc::now())
        .fetch_one(&self.pool)
        .await?;

        Ok(freight)
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<Freight>, AppError> {
        let freight = sqlx::query_as::<_, Freight>("SELECT * FROM freights WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(freight)
    }

    pub async fn find_by_cycle(&self, cycle_id: Uuid) -> Result<Vec<Freight>, AppError> {
        let freights = sqlx::query_as::<_, Freight>(
            "SELECT * FROM freights WHERE cycle_id = $1 ORDER BY date ASC, created_at ASC",
        )
        .bind(cycle_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(freights)
    }

    /// Reemplaza la fila completa; el controller ya mezcló los campos y
    /// recalculó los derivados con el porcentaje congelado.
    pub async fn update(&self, updated: Freight) -> Result<Freight, AppError> {
        let freight = sqlx::query_as::<_, Freight>(
            r#"
            UPDATE freights
            SET date = $2, origin = $3, destination = $4, departure_weight = $5, arrival_weight = $6,
                rate_per_ton = $7, value = $8, commission_value = $9, loss_value = $10,
                departure_photo_url = $11, arrival_photo_url = $12
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(updated.id)
        .bind(updated.date)
        .bind(updated.origin)
        .bind(updated.destination)
        .bind(updated.departure_weight)
        .bind(updated.arrival_weight)
        .bind(updated.rate_per_ton)
        .bind(updated.value)
        .bind(updated.commission_value)
        .bind(updated.loss_value)
        .bind(updated.departure_photo_url)
        .bind(updated.arrival_photo_url)
        .fetch_one(&self.pool)
        .await?;

        Ok(freight)
    }

    pub async fn delete(&self, id: Uuid) -> Result<(), AppError> {
        sqlx::query("DELETE FROM freights WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(())
    }
}
