use axum::{
    extract::State,
    routing::{get, post},
    Extension, Json, Router,
};

use crate::controllers::tire_controller::TireController;
use crate::models::{
    actor::Actor,
    tire::{CreateTireBrandRequest, CreateTireChangeRequest, TireBrand, TireChange},
    ApiResponse,
};
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_tire_router() -> Router<AppState> {
    Router::new()
        .route("/brands", post(create_brand))
        .route("/brands", get(list_brands))
        .route("/changes", post(create_change))
        .route("/changes", get(list_changes))
}

async fn create_brand(
    State(state): State<AppState>,
    Extension(actor): Extension<Actor>,
    Json(request): Json<CreateTireBrandRequest>,
) -> Result<Json<ApiResponse<TireBrand>>, AppError> {
    let controller = TireController::new(state.pool.clone());
    let response = controller.create_brand(&actor, request).await?;
    Ok(Json(response))
}

async fn list_brands(
    State(state): State<AppState>,
    Extension(actor): Extension<Actor>,
) -> Result<Json<Vec<TireBrand>>, AppError> {
    let controller = TireController::new(state.pool.clone());
    let response = controller.list_brands(&actor).await?;
    Ok(Json(response))
}

async fn create_change(
    State(state): State<AppState>,
    Extension(actor): Extension<Actor>,
    Json(request): Json<CreateTireChangeRequest>,
) -> Result<Json<ApiResponse<TireChange>>, AppError> {
    let controller = TireController::new(state.pool.clone());
    let response = controller.create_change(&actor, request).await?;
    Ok(Json(response))
}

async fn list_changes(
    State(state): State<AppState>,
    Extension(actor): Extension<Actor>,
) -> Result<Json<Vec<TireChange>>, AppError> {
    let controller = TireController::new(state.pool.clone());
    let response = controller.list_changes(&actor).await?;
    Ok(Json(response))
}
