//! Repositorio de abastecimientos

use chrono::{NaiveDate, Utc};
use rust_decimal::Decimal;
use sqlx::PgPool;
use uuid::Uuid;

use crate::models::fueling::Fueling;
use crate::utils::errors::AppError;

pub struct FuelingRepository {
    pool: PgPool,
}

#[derive(Debug)]
pub struct NewFueling {
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
}

impl FuelingRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn create(&self, new: NewFueling) -> Result<Fueling, AppError> {
        let fueling = sqlx::query_as::<_, Fueling>(
            r#"
            INSERT INTO fuelings (id, cycle_id, date, station, odometer, arla_liters, arla_price_per_liter,
                                  diesel_liters, diesel_price_per_liter, total, odometer_photo_url,
                                  receipt_photo_url, created_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13)
            RETURNING *
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(new.cycle_id)
        .bind(new.date)
        .bind(new.station)
        .bind(new.odometer)
        .bind(new.arla_liters)
        .bind(new.arla_price_per_liter)
        .bind(new.diesel_liters)
        .bind(new.diesel_price_per_liter)
        .bind(new.total)
        .bind(new.odometer_photo_url)
        .bind(new.receipt_photo_url)
        .bind(Utc::now())
        .fetch_one(&self.pool)
        .await?;

        Ok(fueling)
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<Fueling>, AppError> {
        let fueling = sqlx::query_as::<_, Fueling>("SELECT * FROM fuelings WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(fueling)
    }

    pub async fn find_by_cycle(&self, cycle_id: Uuid) -> Result<Vec<Fueling>, AppError> {
        let fuelings = sqlx::query_as::<_, Fueling>(
            "SELECT * FROM fuelings WHERE cycle_id = $1 ORDER BY date ASC, created_at ASC",
        )
        .bind(cycle_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(fuelings)
    }

    pub async fn update(&self, updated: Fueling) -> Result<Fueling, AppError> {
        let fueling = sqlx::query_as::<_, Fueling>(
            r#"
            UPDATE fuelings
            SET date = $2, station = $3, odometer = $4, arla_liters = $5, arla_price_per_liter = $6,
                diesel_liters = $7, diesel_price_per_liter = $8, total = $9,
                odometer_photo_url = $10, receipt_photo_url = $11
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(updated.id)
        .bind(updated.date)
        .bind(updated.station)
        .bind(updated.odometer)
        .bind(updated.arla_liters)
        .bind(updated.arla_price_per_liter)
        .bind(updated.diesel_liters)
        .bind(updated.diesel_price_per_liter)
        .bind(updated.total)
        .bind(updated.odometer_photo_url)
        .bind(updated.receipt_photo_url)
        .fetch_one(&self.pool)
        .await?;

        Ok(fueling)
    }

    pub async fn delete(&self, id: Uuid) -> Result<(), AppError> {
        sqlx::query("DELETE FROM fuelings WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(())
    }
}
