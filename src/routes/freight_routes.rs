use axum::{
    extract::{Path, State},
    routing::{delete, put},
    Extension, Json, Router,
};
use uuid::Uuid;

use crate::controllers::freight_controller::FreightController;
use crate::models::{
    actor::Actor,
    freight::{CreateFreightRequest, Freight, UpdateFreightRequest},
    ApiResponse,
};
use crate::state::AppState;
use crate::utils::errors::AppError;

/// Rutas por frete individual; el alta y el listado cuelgan del ciclo
pub fn create_freight_router() -> Router<AppState> {
    Router::new()
        .route("/:id", put(update_freight))
        .route("/:id", delete(delete_freight))
}

pub async fn create_freight(
    State(state): State<AppState>,
    Extension(actor): Extension<Actor>,
    Path(cycle_id): Path<Uuid>,
    Json(request): Json<CreateFreightRequest>,
) -> Result<Json<ApiResponse<Freight>>, AppError> {
    let controller = FreightController::new(state.pool.clone(), state.photos.clone());
    let response = controller.create(&actor, cycle_id, request).await?;
    Ok(Json(response))
}

pub async fn list_freights(
    State(state): State<AppState>,
    Extension(actor): Extension<Actor>,
    Path(cycle_id): Path<Uuid>,
) -> Result<Json<Vec<Freight>>, AppError> {
    let controller = FreightController::new(state.pool.clone(), state.photos.clone());
    let response = controller.list(&actor, cycle_id).await?;
    Ok(Json(response))
}

async fn update_freight(
    State(state): State<AppState>,
    Extension(actor): Extension<Actor>,
    Path(id): Path<Uuid>,
    Json(request): Json<UpdateFreightRequest>,
) -> Result<Json<ApiResponse<Freight>>, AppError> {
    let controller = FreightController::new(state.pool.clone(), state.photos.clone());
    let response = controller.update(&actor, id, request).await?;
    Ok(Json(response))
}

async fn delete_freight(
    State(state): State<AppState>,
    Extension(actor): Extension<Actor>,
    Path(id): Path<Uuid>,
) -> Result<Json<serde_json::Value>, AppError> {
    let controller = FreightController::new(state.pool.clone(), state.photos.clone());
    controller.delete(&actor, id).await?;
    Ok(Json(serde_json::json!({
        "success": true,
        "message": "Frete eliminado exitosamente"
    })))
}
