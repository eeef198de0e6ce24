use axum::{
    extract::{Path, State},
    routing::{delete, put},
    Extension, Json, Router,
};
use uuid::Uuid;

use crate::controllers::fueling_controller::FuelingController;
use crate::models::{
    actor::Actor,
    fueling::{CreateFuelingRequest, Fueling, UpdateFuelingRequest},
    ApiResponse,
};
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_fueling_router() -> Router<AppState> {
    Router::new()
        .route("/:id", put(update_fueling))
        .route("/:id", delete(delete_fueling))
}

pub async fn create_fueling(
    State(state): State<AppState>,
    Extension(actor): Extension<Actor>,
    Path(cycle_id): Path<Uuid>,
    Json(request): Json<CreateFuelingRequest>,
) -> Result<Json<ApiResponse<Fueling>>, AppError> {
    let controller = FuelingController::new(state.pool.clone(), state.photos.clone());
    let response = controller.create(&actor, cycle_id, request).await?;
    Ok(Json(response))
}

pub async fn list_fuelings(
    State(state): State<AppState>,
    Extension(actor): Extension<Actor>,
    Path(cycle_id): Path<Uuid>,
) -> Result<Json<Vec<Fueling>>, AppError> {
    let controller = FuelingController::new(state.pool.clone(), state.photos.clone());
    let response = controller.list(&actor, cycle_id).await?;
    Ok(Json(response))
}

async fn update_fueling(
    State(state): State<AppState>,
    Extension(actor): Extension<Actor>,
    Path(id): Path<Uuid>,
    Json(request): Json<UpdateFuelingRequest>,
) -> Result<Json<ApiResponse<Fueling>>, AppError> {
    let controller = FuelingController::new(state.pool.clone(), state.photos.clone());
    let response = controller.update(&actor, id, request).await?;
    Ok(Json(response))
}

async fn delete_fueling(
    State(state): State<AppState>,
    Extension(actor): Extension<Actor>,
    Path(id): Path<Uuid>,
) -> Result<Json<serde_json::Value>, AppError> {
    let controller = FuelingController::new(state.pool.clone(), state.photos.clone());
    controller.delete(&actor, id).await?;
    Ok(Json(serde_json::json!({
        "success": true,
        "message": "Abastecimiento eliminado exitosamente"
    })))
}
