use axum::{
    extract::{Path, State},
    routing::{get, post},
    Extension, Json, Router,
};
use uuid::Uuid;

use crate::controllers::driver_controller::DriverController;
use crate::models::{
    actor::Actor,
    driver::{CreateDriverRequest, Driver, DriverInviteResponse},
    ApiResponse,
};
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_driver_router() -> Router<AppState> {
    Router::new()
        .route("/", post(create_driver))
        .route("/", get(list_drivers))
        .route("/:id/invite", post(invite_driver))
}

async fn create_driver(
    State(state): State<AppState>,
    Extension(actor): Extension<Actor>,
    Json(request): Json<CreateDriverRequest>,
) -> Result<Json<ApiResponse<Driver>>, AppError> {
    let controller = DriverController::new(state.pool.clone(), state.config.clone());
    let response = controller.create(&actor, request).await?;
    Ok(Json(response))
}

async fn list_drivers(
    State(state): State<AppState>,
    Extension(actor): Extension<Actor>,
) -> Result<Json<Vec<Driver>>, AppError> {
    let controller = DriverController::new(state.pool.clone(), state.config.clone());
    let response = controller.list(&actor).await?;
    Ok(Json(response))
}

async fn invite_driver(
    State(state): State<AppState>,
    Extension(actor): Extension<Actor>,
    Path(id): Path<Uuid>,
) -> Result<Json<ApiResponse<DriverInviteResponse>>, AppError> {
    let controller = DriverController::new(state.pool.clone(), state.config.clone());
    let response = controller.invite(&actor, id).await?;
    Ok(Json(response))
}
