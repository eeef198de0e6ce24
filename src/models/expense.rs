//! Modelo de Expense
//!
//! Despesa suelta dentro de un ciclo. La foto de la nota fiscal es
//! opcional, a diferencia de fretes y abastecimientos.

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;
use validator::Validate;

#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Expense {
    pub id: Uuid,
    pub cycle_id: Uuid,
    pub date: NaiveDate,
    pub description: String,
    pub value: Decimal,
    pub receipt_photo_url: Option<String>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Deserialize, Validate)]
pub struct CreateExpenseRequest {
    pub date: NaiveDate,

    #[validate(length(min = 1, max = 500))]
    pub description: String,

    pub value: f64,
    pub receipt_photo: Option<String>,
}

#[derive(Debug, Deserialize, Validate)]
pub struct UpdateExpenseRequest {
    pub date: Option<NaiveDate>,

    #[validate(length(min = 1, max = 500))]
    pub description: Option<String>,

    pub value: Option<f64>,
    pub receipt_photo: Option<String>,
}
