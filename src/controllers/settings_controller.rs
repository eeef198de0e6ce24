//! Controller de configuraciones
//!
//! Porcentaje de comisión por administrador y permisos de vista por
//! motorista. Cambiar el porcentaje solo afecta fretes futuros: los ya
//! registrados conservan su porcentaje congelado.

use sqlx::PgPool;
use uuid::Uuid;
use validator::Validate;

use crate::models::{
    actor::Actor,
    settings::{
        CommissionSettings, DriverPermissions, UpdateCommissionRequest, UpdatePermissionsRequest,
    },
    ApiResponse,
};
use crate::repositories::{DriverRepository, SettingsRepository};
use crate::utils::{
    errors::{forbidden_error, not_found_error, AppError},
    validation::percentage_decimal,
};

pub struct SettingsController {
    settings: SettingsRepository,
    drivers: DriverRepository,
}

impl SettingsController {
    pub fn new(pool: PgPool) -> Self {
        Self {
            settings: SettingsRepository::new(pool.clone()),
            drivers: DriverRepository::new(pool),
        }
    }

    pub async fn get_commission(&self, actor: &Actor) -> Result<CommissionSettings, AppError> {
        if !actor.is_admin() {
            return Err(forbidden_error(
                "view commission settings",
                "only an administrator has commission settings",
            ));
        }
        self.settings.get_commission(actor.id).await
    }

    pub async fn save_commission(
        &self,
        actor: &Actor,
        request: UpdateCommissionRequest,
    ) -> Result<ApiResponse<CommissionSettings>, AppError> {
        if !actor.is_admin() {
            return Err(forbidden_error(
                "update commission settings",
                "only an administrator has commission settings",
            ));
        }
        request.validate()?;

        let percentage =
            percentage_decimal("commission_percentage", request.commission_percentage)?;
        let settings = self.settings.save_commission(actor.id, percentage).await?;

        Ok(ApiResponse::success_with_message(
            settings,
            "Porcentaje de comisión actualizado exitosamente".to_string(),
        ))
    }

    /// Permisos de un motorista. El admin consulta los de cualquiera de
    /// sus motoristas; el motorista solo los propios.
    pub async fn get_permissions(
        &self,
        actor: &Actor,
        driver_id: Uuid,
    ) -> Result<DriverPermissions, AppError> {
        self.ensure_permission_scope(actor, driver_id).await?;
        self.settings.get_permissions(driver_id).await
    }

    pub async fn save_permissions(
        &self,
        actor: &Actor,
        driver_id: Uuid,
        request: UpdatePermissionsRequest,
    ) -> Result<ApiResponse<DriverPermissions>, AppError> {
        if !actor.is_admin() {
            return Err(forbidden_error(
                "update driver permissions",
                "only an administrator can change permissions",
            ));
        }
        self.ensure_permission_scope(actor, driver_id).await?;

        let permissions = self
            .settings
            .save_permissions(
                driver_id,
                request.view_tire_changes,
                request.view_fuelings,
                request.view_expenses,
            )
            .await?;

        Ok(ApiResponse::success_with_message(
            permissions,
            "Permisos actualizados exitosamente".to_string(),
        ))
    }

    async fn ensure_permission_scope(&self, actor: &Actor, driver_id: Uuid) -> Result<(), AppError> {
        if actor.is_admin() {
            self.drivers
                .find_by_id(driver_id)
                .await?
                .filter(|d| d.admin_id == actor.id)
                .ok_or_else(|| not_found_error("Driver", driver_id))?;
            return Ok(());
        }

        if actor.id != driver_id {
            return Err(forbidden_error(
                "view driver permissions",
                "a driver can only read their own permissions",
            ));
        }
        Ok(())
    }
}
