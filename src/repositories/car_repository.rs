//! Repositorio de camiones

use chrono::Utc;
use sqlx::PgPool;
use uuid::Uuid;

use crate::models::car::Car;
use crate::utils::errors::AppError;

pub struct CarRepository {
    pool: PgPool,
}

impl CarRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn create(
        &self,
        admin_id: Uuid,
        plate: String,
        brand: String,
        model: Option<String>,
        year: Option<i32>,
    ) -> Result<Car, AppError> {
        let car = sqlx::query_as::<_, Car>(
            r#"
            INSERT INTO cars (id, admin_id, plate, brand, model, year, created_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            RETURNING *
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(admin_id)
        .bind(plate)
        .bind(brand)
        .bind(model)
        .bind(year)
        .bind(Utc::now())
        .fetch_one(&self.pool)
        .await?;

        Ok(car)
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<Car>, AppError> {
        let car = sqlx::query_as::<_, Car>("SELECT * FROM cars WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(car)
    }

    pub async fn find_by_admin(&self, admin_id: Uuid) -> Result<Vec<Car>, AppError> {
        let cars = sqlx::query_as::<_, Car>(
            "SELECT * FROM cars WHERE admin_id = $1 ORDER BY created_at DESC",
        )
        .bind(admin_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(cars)
    }

    pub async fn delete(&self, id: Uuid) -> Result<(), AppError> {
        sqlx::query("DELETE FROM cars WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(())
    }
}
