use axum::{
    extract::{Path, State},
    routing::{delete, get, post, put},
    Extension, Json, Router,
};
use uuid::Uuid;

use crate::controllers::cycle_controller::{CycleController, CycleDetailsResponse};
use crate::models::{
    actor::Actor,
    cycle::{CreateCycleRequest, Cycle, UpdateCycleRequest},
    ApiResponse,
};
use crate::routes::{expense_routes, freight_routes, fueling_routes};
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_cycle_router() -> Router<AppState> {
    Router::new()
        .route("/", post(create_cycle))
        .route("/", get(list_cycles))
        .route("/:id", get(get_cycle))
        .route("/:id", put(update_cycle))
        .route("/:id", delete(delete_cycle))
        .route("/:id/close", post(close_cycle))
        // Registros hijos del ciclo
        .route("/:id/freights", post(freight_routes::create_freight))
        .route("/:id/freights", get(freight_routes::list_freights))
        .route("/:id/fuelings", post(fueling_routes::create_fueling))
        .route("/:id/fuelings", get(fueling_routes::list_fuelings))
        .route("/:id/expenses", post(expense_routes::create_expense))
        .route("/:id/expenses", get(expense_routes::list_expenses))
}

async fn create_cycle(
    State(state): State<AppState>,
    Extension(actor): Extension<Actor>,
    Json(request): Json<CreateCycleRequest>,
) -> Result<Json<ApiResponse<Cycle>>, AppError> {
    let controller = CycleController::new(state.pool.clone(), state.photos.clone());
    let response = controller.create(&actor, request).await?;
    Ok(Json(response))
}

async fn list_cycles(
    State(state): State<AppState>,
    Extension(actor): Extension<Actor>,
) -> Result<Json<Vec<Cycle>>, AppError> {
    let controller = CycleController::new(state.pool.clone(), state.photos.clone());
    let response = controller.list(&actor).await?;
    Ok(Json(response))
}

async fn get_cycle(
    State(state): State<AppState>,
    Extension(actor): Extension<Actor>,
    Path(id): Path<Uuid>,
) -> Result<Json<CycleDetailsResponse>, AppError> {
    let controller = CycleController::new(state.pool.clone(), state.photos.clone());
    let response = controller.details(&actor, id).await?;
    Ok(Json(response))
}

async fn update_cycle(
    State(state): State<AppState>,
    Extension(actor): Extension<Actor>,
    Path(id): Path<Uuid>,
    Json(request): Json<UpdateCycleRequest>,
) -> Result<Json<ApiResponse<Cycle>>, AppError> {
    let controller = CycleController::new(state.pool.clone(), state.photos.clone());
    let response = controller.update(&actor, id, request).await?;
    Ok(Json(response))
}

async fn close_cycle(
    State(state): State<AppState>,
    Extension(actor): Extension<Actor>,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<Cycle>>, AppError> {
    let controller = CycleController::new(state.pool.clone(), state.photos.clone());
    let response = controller.close(&actor, id).await?;
    Ok(Json(response))
}

async fn delete_cycle(
    State(state): State<AppState>,
    Extension(actor): Extension<Actor>,
    Path(id): Path<Uuid>,
) -> Result<Json<serde_json::Value>, AppError> {
    let controller = CycleController::new(state.pool.clone(), state.photos.clone());
    controller.delete(&actor, id).await?;
    Ok(Json(serde_json::json!({
        "success": true,
        "message": "Ciclo eliminado exitosamente"
    })))
}
