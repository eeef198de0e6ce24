use axum::{
    extract::{Path, State},
    routing::{delete, get, post},
    Extension, Json, Router,
};
use uuid::Uuid;

use crate::controllers::car_controller::CarController;
use crate::models::{actor::Actor, car::{Car, CreateCarRequest}, ApiResponse};
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_car_router() -> Router<AppState> {
    Router::new()
        .route("/", post(create_car))
        .route("/", get(list_cars))
        .route("/:id", delete(delete_car))
}

async fn create_car(
    State(state): State<AppState>,
    Extension(actor): Extension<Actor>,
    Json(request): Json<CreateCarRequest>,
) -> Result<Json<ApiResponse<Car>>, AppError> {
    let controller = CarController::new(state.pool.clone());
    let response = controller.create(&actor, request).await?;
    Ok(Json(response))
}

async fn list_cars(
    State(state): State<AppState>,
    Extension(actor): Extension<Actor>,
) -> Result<Json<Vec<Car>>, AppError> {
    let controller = CarController::new(state.pool.clone());
    let response = controller.list(&actor).await?;
    Ok(Json(response))
}

async fn delete_car(
    State(state): State<AppState>,
    Extension(actor): Extension<Actor>,
    Path(id): Path<Uuid>,
) -> Result<Json<serde_json::Value>, AppError> {
    let controller = CarController::new(state.pool.clone());
    controller.delete(&actor, id).await?;
    Ok(Json(serde_json::json!({
        "success": true,
        "message": "Camión eliminado exitosamente"
    })))
}
