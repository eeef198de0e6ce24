//! Repositorio de despesas

use chrono::{NaiveDate, Utc};
use rust_decimal::Decimal;
use sqlx::PgPool;
use uuid::Uuid;

use crate::models::expense::Expense;
use crate::utils::errors::AppError;

pub struct ExpenseRepository {
    pool: PgPool,
}

impl ExpenseRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn create(
        &self,
        cycle_id: Uuid,
        date: NaiveDate,
        description: String,
        value: Decimal,
        receipt_photo_url: Option<String>,
    ) -> Result<Expense, AppError> {
        let expense = sqlx::query_as::<_, Expense>(
            r#"
            INSERT INTO expenses (id, cycle_id, date, description, value, receipt_photo_url, created_at)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            RETURNING *
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(cycle_id)
        .bind(date)
        .bind(description)
        .bind(value)
        .bind(receipt_photo_url)
        .bind(Utc::now())
        .fetch_one(&self.pool)
        .await?;

        Ok(expense)
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<Expense>, AppError> {
        let expense = sqlx::query_as::<_, Expense>("SELECT * FROM expenses WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(expense)
    }

    pub async fn find_by_cycle(&self, cycle_id: Uuid) -> Result<Vec<Expense>, AppError> {
        let expenses = sqlx::query_as::<_, Expense>(
            "SELECT * FROM expenses WHERE cycle_id = $1 ORDER BY date ASC, created_at ASC",
        )
        .bind(cycle_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(expenses)
    }

    pub async fn update(&self, updated: Expense) -> Result<Expense, AppError> {
        let expense = sqlx::query_as::<_, Expense>(
            r#"
            UPDATE expenses
            SET date = $2, description = $3, value = $4, receipt_photo_url = $5
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(updated.id)
        .bind(updated.date)
        .bind(updated.description)
        .bind(updated.value)
        .bind(updated.receipt_photo_url)
        .fetch_one(&self.pool)
        .await?;

        Ok(expense)
    }

    pub async fn delete(&self, id: Uuid) -> Result<(), AppError> {
        sqlx::query("DELETE FROM expenses WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;

        Ok(())
    }
}
