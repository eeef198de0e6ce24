use axum::{
    extract::{Path, State},
    routing::{get, put},
    Extension, Json, Router,
};
use uuid::Uuid;

use crate::controllers::settings_controller::SettingsController;
use crate::models::{
    actor::Actor,
    settings::{
        CommissionSettings, DriverPermissions, UpdateCommissionRequest, UpdatePermissionsRequest,
    },
    ApiResponse,
};
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_settings_router() -> Router<AppState> {
    Router::new()
        .route("/commission", get(get_commission))
        .route("/commission", put(save_commission))
        .route("/permissions/:driver_id", get(get_permissions))
        .route("/permissions/:driver_id", put(save_permissions))
}

async fn get_commission(
    State(state): State<AppState>,
    Extension(actor): Extension<Actor>,
) -> Result<Json<CommissionSettings>, AppError> {
    let controller = SettingsController::new(state.pool.clone());
    let response = controller.get_commission(&actor).await?;
    Ok(Json(response))
}

async fn save_commission(
    State(state): State<AppState>,
    Extension(actor): Extension<Actor>,
    Json(request): Json<UpdateCommissionRequest>,
) -> Result<Json<ApiResponse<CommissionSettings>>, AppError> {
    let controller = SettingsController::new(state.pool.clone());
    let response = controller.save_commission(&actor, request).await?;
    Ok(Json(response))
}

async fn get_permissions(
    State(state): State<AppState>,
    Extension(actor): Extension<Actor>,
    Path(driver_id): Path<Uuid>,
) -> Result<Json<DriverPermissions>, AppError> {
    let controller = SettingsController::new(state.pool.clone());
    let response = controller.get_permissions(&actor, driver_id).await?;
    Ok(Json(response))
}

async fn save_permissions(
    State(state): State<AppState>,
    Extension(actor): Extension<Actor>,
    Path(driver_id): Path<Uuid>,
    Json(request): Json<UpdatePermissionsRequest>,
) -> Result<Json<ApiResponse<DriverPermissions>>, AppError> {
    let controller = SettingsController::new(state.pool.clone());
    let response = controller.save_permissions(&actor, driver_id, request).await?;
    Ok(Json(response))
}
