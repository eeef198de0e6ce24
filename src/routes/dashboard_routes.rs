use axum::{
    extract::{Query, State},
    routing::get,
    Extension, Json, Router,
};

use crate::controllers::dashboard_controller::{DashboardController, DashboardQuery, DashboardSummary};
use crate::models::actor::Actor;
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_dashboard_router() -> Router<AppState> {
    Router::new().route("/", get(get_summary))
}

async fn get_summary(
    State(state): State<AppState>,
    Extension(actor): Extension<Actor>,
    Query(query): Query<DashboardQuery>,
) -> Result<Json<DashboardSummary>, AppError> {
    let controller = DashboardController::new(state.pool.clone());
    let response = controller.build_summary(&actor, query).await?;
    Ok(Json(response))
}
