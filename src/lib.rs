//! Backend de gestión de ciclos de frete
//!
//! API para pequeñas empresas de transporte de carga: ciclos de viaje
//! (motorista + camión), fretes con comisión, abastecimientos, despesas
//! y el dashboard financiero agregado.

pub mod config;
pub mod controllers;
pub mod database;
pub mod middleware;
pub mod models;
pub mod repositories;
pub mod routes;
pub mod services;
pub mod state;
pub mod utils;

use axum::{middleware::from_fn_with_state, response::Json, routing::get, Router};
use serde_json::json;
use tower_http::services::ServeDir;

use crate::services::photo_storage::PUBLIC_PREFIX;
use crate::state::AppState;

/// Armar el router completo de la aplicación
///
/// Todo lo que cuelga de /api requiere token; el health check y las
/// fotos servidas desde el directorio de uploads son públicos.
pub fn build_app(state: AppState) -> Router {
    let api = Router::new()
        .nest("/cycles", routes::cycle_routes::create_cycle_router())
        .nest("/freights", routes::freight_routes::create_freight_router())
        .nest("/fuelings", routes::fueling_routes::create_fueling_router())
        .nest("/expenses", routes::expense_routes::create_expense_router())
        .nest("/cars", routes::car_routes::create_car_router())
        .nest("/tires", routes::tire_routes::create_tire_router())
        .nest("/drivers", routes::driver_routes::create_driver_router())
        .nest("/settings", routes::settings_routes::create_settings_router())
        .nest("/dashboard", routes::dashboard_routes::create_dashboard_router())
        .layer(from_fn_with_state(state.clone(), middleware::auth::auth_middleware));

    Router::new()
        .route("/health", get(health_check))
        .nest("/api", api)
        .nest_service(PUBLIC_PREFIX, ServeDir::new(&state.config.upload_dir))
        .layer(middleware::cors::cors_middleware_with_origins(&state.config.cors_origins))
        .with_state(state)
}

/// Health check simple
async fn health_check() -> Json<serde_json::Value> {
    Json(json!({
        "status": "ok",
        "service": "gerencial-fretes",
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}
