use axum::{
    extract::{Path, State},
    routing::{delete, put},
    Extension, Json, Router,
};
use uuid::Uuid;

use crate::controllers::expense_controller::ExpenseController;
use crate::models::{
    actor::Actor,
    expense::{CreateExpenseRequest, Expense, UpdateExpenseRequest},
    ApiResponse,
};
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_expense_router() -> Router<AppState> {
    Router::new()
        .route("/:id", put(update_expense))
        .route("/:id", delete(delete_expense))
}

pub async fn create_expense(
    State(state): State<AppState>,
    Extension(actor): Extension<Actor>,
    Path(cycle_id): Path<Uuid>,
    Json(request): Json<CreateExpenseRequest>,
) -> Result<Json<ApiResponse<Expense>>, AppError> {
    let controller = ExpenseController::new(state.pool.clone(), state.photos.clone());
    let response = controller.create(&actor, cycle_id, request).await?;
    Ok(Json(response))
}

pub async fn list_expenses(
    State(state): State<AppState>,
    Extension(actor): Extension<Actor>,
    Path(cycle_id): Path<Uuid>,
) -> Result<Json<Vec<Expense>>, AppError> {
    let controller = ExpenseController::new(state.pool.clone(), state.photos.clone());
    let response = controller.list(&actor, cycle_id).await?;
    Ok(Json(response))
}

async fn update_expense(
    State(state): State<AppState>,
    Extension(actor): Extension<Actor>,
    Path(id): Path<Uuid>,
    Json(request): Json<UpdateExpenseRequest>,
) -> Result<Json<ApiResponse<Expense>>, AppError> {
    let controller = ExpenseController::new(state.pool.clone(), state.photos.clone());
    let response = controller.update(&actor, id, request).await?;
    Ok(Json(response))
}

async fn delete_expense(
    State(state): State<AppState>,
    Extension(actor): Extension<Actor>,
    Path(id): Path<Uuid>,
) -> Result<Json<serde_json::Value>, AppError> {
    let controller = ExpenseController::new(state.pool.clone(), state.photos.clone());
    controller.delete(&actor, id).await?;
    Ok(Json(serde_json::json!({
        "success": true,
        "message": "Despesa eliminada exitosamente"
    })))
}
