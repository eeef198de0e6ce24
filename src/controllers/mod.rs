//! Capa de controllers
//!
//! Orquestación por operación: validar el request, aplicar control de
//! acceso, subir fotos, calcular derivados y delegar en los
//! repositorios. Sin SQL aquí.

pub mod car_controller;
pub mod cycle_controller;
pub mod dashboard_controller;
pub mod driver_controller;
pub mod expense_controller;
pub mod freight_controller;
pub mod fueling_controller;
pub mod settings_controller;
pub mod tire_controller;

use crate::models::{actor::Actor, cycle::Cycle};
use crate::repositories::CycleRepository;
use crate::services::access_control;
use crate::utils::errors::{forbidden_error, not_found_error, AppError};
use uuid::Uuid;

/// Cargar un ciclo y verificar que el actor puede mutarlo
pub(crate) async fn mutable_cycle(
    cycles: &CycleRepository,
    actor: &Actor,
    cycle_id: Uuid,
) -> Result<Cycle, AppError> {
    let cycle = cycles
        .find_by_id(cycle_id)
        .await?
        .ok_or_else(|| not_found_error("Cycle", cycle_id))?;

    if !access_control::can_mutate(actor, &cycle) {
        return Err(forbidden_error(
            "modify cycle",
            "the cycle is closed or not assigned to you",
        ));
    }

    Ok(cycle)
}

/// Cargar un ciclo y verificar que el actor puede verlo
pub(crate) async fn visible_cycle(
    cycles: &CycleRepository,
    actor: &Actor,
    cycle_id: Uuid,
) -> Result<Cycle, AppError> {
    let cycle = cycles
        .find_by_id(cycle_id)
        .await?
        .ok_or_else(|| not_found_error("Cycle", cycle_id))?;

    if !access_control::can_view(actor, &cycle) {
        return Err(forbidden_error(
            "view cycle",
            "the cycle does not belong to your scope",
        ));
    }

    Ok(cycle)
}
