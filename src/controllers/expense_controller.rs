//! Controller de despesas
//!
//! La foto de la nota fiscal es opcional; el resto sigue las mismas
//! reglas de acceso que los demás registros hijos.

use sqlx::PgPool;
use uuid::Uuid;
use validator::Validate;

use crate::models::{
    actor::Actor,
    expense::{CreateExpenseRequest, Expense, UpdateExpenseRequest},
    ApiResponse,
};
use crate::repositories::{CycleRepository, ExpenseRepository, SettingsRepository};
use crate::services::{
    access_control::{self, ChildKind},
    photo_storage::PhotoStorage,
};
use crate::utils::{
    errors::{forbidden_error, not_found_error, AppError},
    validation::non_negative_decimal,
};

pub struct ExpenseController {
    cycles: CycleRepository,
    expenses: ExpenseRepository,
    settings: SettingsRepository,
    photos: PhotoStorage,
}

impl ExpenseController {
    pub fn new(pool: PgPool, photos: PhotoStorage) -> Self {
        Self {
            cycles: CycleRepository::new(pool.clone()),
            expenses: ExpenseRepository::new(pool.clone()),
            settings: SettingsRepository::new(pool),
            photos,
        }
    }

    pub async fn create(
        &self,
        actor: &Actor,
        cycle_id: Uuid,
        request: CreateExpenseRequest,
    ) -> Result<ApiResponse<Expense>, AppError> {
        request.validate()?;
        let cycle = super::mutable_cycle(&self.cycles, actor, cycle_id).await?;

        let value = non_negative_decimal("value", request.value)?;

        let receipt_photo_url = match request.receipt_photo.as_deref() {
            Some(payload) if !payload.trim().is_empty() => {
                Some(self.photos.save("expenses", payload).await?)
            }
            _ => None,
        };

        let expense = self
            .expenses
            .create(cycle.id, request.date, request.description, value, receipt_photo_url)
            .await?;

        Ok(ApiResponse::success_with_message(
            expense,
            "Despesa registrada exitosamente".to_string(),
        ))
    }

    pub async fn list(&self, actor: &Actor, cycle_id: Uuid) -> Result<Vec<Expense>, AppError> {
        let cycle = super::visible_cycle(&self.cycles, actor, cycle_id).await?;

        let permissions = self.settings.get_permissions(actor.id).await?;
        if !access_control::can_view_kind(actor, &permissions, ChildKind::Expenses) {
            return Err(forbidden_error(
                "view expenses",
                "your administrator disabled this view",
            ));
        }

        self.expenses.find_by_cycle(cycle.id).await
    }

    pub async fn update(
        &self,
        actor: &Actor,
        expense_id: Uuid,
        request: UpdateExpenseRequest,
    ) -> Result<ApiResponse<Expense>, AppError> {
        request.validate()?;

        let mut expense = self
            .expenses
            .find_by_id(expense_id)
            .await?
            .ok_or_else(|| not_found_error("Expense", expense_id))?;
        super::mutable_cycle(&self.cycles, actor, expense.cycle_id).await?;

        if let Some(date) = request.date {
            expense.date = date;
        }
        if let Some(description) = request.description {
            expense.description = description;
        }
        if let Some(value) = request.value {
            expense.value = non_negative_decimal("value", value)?;
        }
        if let Some(payload) = request.receipt_photo.as_deref() {
            if !payload.trim().is_empty() {
                expense.receipt_photo_url = Some(self.photos.save("expenses", payload).await?);
            }
        }

        let updated = self.expenses.update(expense).await?;

        Ok(ApiResponse::success_with_message(
            updated,
            "Despesa actualizada exitosamente".to_string(),
        ))
    }

    pub async fn delete(&self, actor: &Actor, expense_id: Uuid) -> Result<(), AppError> {
        let expense = self
            .expenses
            .find_by_id(expense_id)
            .await?
            .ok_or_else(|| not_found_error("Expense", expense_id))?;
        super::mutable_cycle(&self.cycles, actor, expense.cycle_id).await?;

        self.expenses.delete(expense.id).await
    }
}
