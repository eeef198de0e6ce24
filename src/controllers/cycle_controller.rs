//! Controller de ciclos
//!
//! Ciclo de vida completo: abrir, listar, detallar con totales, editar,
//! cerrar y borrar en cascada. Solo el administrador abre, cierra y
//! borra ciclos; el motorista asignado puede editar mientras el ciclo
//! siga abierto.

use serde::Serialize;
use sqlx::PgPool;
use uuid::Uuid;
use validator::Validate;

use crate::models::{
    actor::Actor,
    cycle::{CreateCycleRequest, Cycle, UpdateCycleRequest},
    expense::Expense,
    freight::Freight,
    fueling::Fueling,
    ApiResponse,
};
use crate::repositories::{
    CarRepository, CyclePatch, CycleRepository, DriverRepository, ExpenseRepository,
    FreightRepository, FuelingRepository, SettingsRepository,
};
use crate::services::{
    access_control::{self, ChildKind},
    finance::{self, CycleTotals},
    photo_storage::PhotoStorage,
};
use crate::utils::{
    errors::{forbidden_error, reference_error, AppError},
    validation::{non_negative_decimal, require_photo},
};

/// Detalle de un ciclo con sus registros hijos y totales
///
/// Las listas ocultas por permisos del motorista no se serializan; los
/// totales se calculan solo sobre lo que el actor puede ver.
#[derive(Debug, Serialize)]
pub struct CycleDetailsResponse {
    pub cycle: Cycle,
    pub freights: Vec<Freight>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fuelings: Option<Vec<Fueling>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub expenses: Option<Vec<Expense>>,
    pub totals: CycleTotals,
}

pub struct CycleController {
    cycles: CycleRepository,
    drivers: DriverRepository,
    cars: CarRepository,
    freights: FreightRepository,
    fuelings: FuelingRepository,
    expenses: ExpenseRepository,
    settings: SettingsRepository,
    photos: PhotoStorage,
}

impl CycleController {
    pub fn new(pool: PgPool, photos: PhotoStorage) -> Self {
        Self {
            cycles: CycleRepository::new(pool.clone()),
            drivers: DriverRepository::new(pool.clone()),
            cars: CarRepository::new(pool.clone()),
            freights: FreightRepository::new(pool.clone()),
            fuelings: FuelingRepository::new(pool.clone()),
            expenses: ExpenseRepository::new(pool.clone()),
            settings: SettingsRepository::new(pool),
            photos,
        }
    }

    pub async fn create(
        &self,
        actor: &Actor,
        request: CreateCycleRequest,
    ) -> Result<ApiResponse<Cycle>, AppError> {
        if !actor.is_admin() {
            return Err(forbidden_error("open cycle", "only an administrator can open cycles"));
        }
        request.validate()?;

        // Las referencias deben existir y pertenecer al administrador
        let driver = self
            .drivers
            .find_by_id(request.driver_id)
            .await?
            .filter(|d| d.admin_id == actor.id)
            .ok_or_else(|| reference_error("Driver", request.driver_id))?;

        let car = self
            .cars
            .find_by_id(request.car_id)
            .await?
            .filter(|c| c.admin_id == actor.id)
            .ok_or_else(|| reference_error("Car", request.car_id))?;

        let odometer = non_negative_decimal("departure_odometer", request.departure_odometer)?;
        let photo_payload = require_photo("departure_photo", request.departure_photo.as_ref())?;

        // La foto se sube antes del insert; un fallo aquí aborta la operación
        let photo_url = self.photos.save("cycles", photo_payload).await?;

        let cycle = self
            .cycles
            .create(
                actor.id,
                driver.id,
                car.id,
                request.description,
                request.departure_at,
                odometer,
                photo_url,
            )
            .await?;

        Ok(ApiResponse::success_with_message(
            cycle,
            "Ciclo abierto exitosamente".to_string(),
        ))
    }

    pub async fn list(&self, actor: &Actor) -> Result<Vec<Cycle>, AppError> {
        match actor.scope_admin_id() {
            Some(admin_id) if actor.is_admin() => self.cycles.find_by_admin(admin_id).await,
            Some(admin_id) => self.cycles.find_by_admin_and_driver(admin_id, actor.id).await,
            None => Err(AppError::Unauthorized(
                "El token no tiene un administrador asociado".to_string(),
            )),
        }
    }

    pub async fn details(
        &self,
        actor: &Actor,
        cycle_id: Uuid,
    ) -> Result<CycleDetailsResponse, AppError> {
        let cycle = super::visible_cycle(&self.cycles, actor, cycle_id).await?;

        let permissions = self.settings.get_permissions(actor.id).await?;
        let freights = self.freights.find_by_cycle(cycle.id).await?;

        let fuelings = if access_control::can_view_kind(actor, &permissions, ChildKind::Fuelings) {
            Some(self.fuelings.find_by_cycle(cycle.id).await?)
        } else {
            None
        };
        let expenses = if access_control::can_view_kind(actor, &permissions, ChildKind::Expenses) {
            Some(self.expenses.find_by_cycle(cycle.id).await?)
        } else {
            None
        };

        let totals = finance::aggregate_cycle(
            &freights,
            fuelings.as_deref().unwrap_or(&[]),
            expenses.as_deref().unwrap_or(&[]),
        );

        Ok(CycleDetailsResponse {
            cycle,
            freights,
            fuelings,
            expenses,
            totals,
        })
    }

    pub async fn update(
        &self,
        actor: &Actor,
        cycle_id: Uuid,
        request: UpdateCycleRequest,
    ) -> Result<ApiResponse<Cycle>, AppError> {
        request.validate()?;
        let cycle = super::mutable_cycle(&self.cycles, actor, cycle_id).await?;

        // Reasignaciones: las nuevas referencias también deben pertenecer
        // al administrador del ciclo
        if let Some(driver_id) = request.driver_id {
            self.drivers
                .find_by_id(driver_id)
                .await?
                .filter(|d| d.admin_id == cycle.admin_id)
                .ok_or_else(|| reference_error("Driver", driver_id))?;
        }
        if let Some(car_id) = request.car_id {
            self.cars
                .find_by_id(car_id)
                .await?
                .filter(|c| c.admin_id == cycle.admin_id)
                .ok_or_else(|| reference_error("Car", car_id))?;
        }

        let departure_odometer = match request.departure_odometer {
            Some(value) => Some(non_negative_decimal("departure_odometer", value)?),
            None => None,
        };

        // La foto solo se reemplaza si viene un payload nuevo
        let departure_photo_url = match request.departure_photo.as_deref() {
            Some(payload) if !payload.trim().is_empty() => {
                Some(self.photos.save("cycles", payload).await?)
            }
            _ => None,
        };

        let updated = self
            .cycles
            .update(
                cycle.id,
                CyclePatch {
                    description: request.description,
                    driver_id: request.driver_id,
                    car_id: request.car_id,
                    departure_at: request.departure_at,
                    departure_odometer,
                    departure_photo_url,
                },
            )
            .await?;

        Ok(ApiResponse::success_with_message(
            updated,
            "Ciclo actualizado exitosamente".to_string(),
        ))
    }

    /// Cerrar un ciclo. Transición única open -> closed; cerrar un ciclo
    /// ya cerrado es un error, no un no-op.
    pub async fn close(&self, actor: &Actor, cycle_id: Uuid) -> Result<ApiResponse<Cycle>, AppError> {
        if !actor.is_admin() {
            return Err(forbidden_error("close cycle", "only an administrator can close cycles"));
        }
        let cycle = super::mutable_cycle(&self.cycles, actor, cycle_id).await?;

        if !access_control::can_close(actor, &cycle) {
            return Err(forbidden_error("close cycle", "the cycle is already closed"));
        }

        let closed = self.cycles.close(cycle.id).await?;
        if !closed {
            // Carrera con otro cierre concurrente
            return Err(forbidden_error("close cycle", "the cycle is already closed"));
        }

        let cycle = self
            .cycles
            .find_by_id(cycle_id)
            .await?
            .ok_or_else(|| crate::utils::errors::not_found_error("Cycle", cycle_id))?;

        Ok(ApiResponse::success_with_message(
            cycle,
            "Ciclo cerrado exitosamente".to_string(),
        ))
    }

    /// Borrado en cascada: el ciclo y todos sus registros hijos
    pub async fn delete(&self, actor: &Actor, cycle_id: Uuid) -> Result<(), AppError> {
        if !actor.is_admin() {
            return Err(forbidden_error("delete cycle", "only an administrator can delete cycles"));
        }
        let cycle = super::mutable_cycle(&self.cycles, actor, cycle_id).await?;
        self.cycles.delete_cascade(cycle.id).await
    }
}
