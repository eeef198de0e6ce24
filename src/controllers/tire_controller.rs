//! Controller de neumáticos
//!
//! Marcas de referencia globales y el historial de cambios por
//! administrador. La vista del historial puede estar deshabilitada para
//! el motorista por sus permisos.

use sqlx::PgPool;
use validator::Validate;

use crate::models::{
    actor::Actor,
    tire::{CreateTireBrandRequest, CreateTireChangeRequest, TireBrand, TireChange},
    ApiResponse,
};
use crate::repositories::{CarRepository, SettingsRepository, TireRepository};
use crate::services::access_control::{self, ChildKind};
use crate::utils::{
    errors::{forbidden_error, reference_error, AppError},
    validation::non_negative_decimal,
};

pub struct TireController {
    tires: TireRepository,
    cars: CarRepository,
    settings: SettingsRepository,
}

impl TireController {
    pub fn new(pool: PgPool) -> Self {
        Self {
            tires: TireRepository::new(pool.clone()),
            cars: CarRepository::new(pool.clone()),
            settings: SettingsRepository::new(pool),
        }
    }

    pub async fn create_brand(
        &self,
        actor: &Actor,
        request: CreateTireBrandRequest,
    ) -> Result<ApiResponse<TireBrand>, AppError> {
        if !actor.is_admin() {
            return Err(forbidden_error(
                "register tire brand",
                "only an administrator can register brands",
            ));
        }
        request.validate()?;

        let brand = self.tires.create_brand(request.name).await?;
        Ok(ApiResponse::success_with_message(
            brand,
            "Marca registrada exitosamente".to_string(),
        ))
    }

    pub async fn list_brands(&self, _actor: &Actor) -> Result<Vec<TireBrand>, AppError> {
        self.tires.list_brands().await
    }

    pub async fn create_change(
        &self,
        actor: &Actor,
        request: CreateTireChangeRequest,
    ) -> Result<ApiResponse<TireChange>, AppError> {
        if !actor.is_admin() {
            return Err(forbidden_error(
                "register tire change",
                "only an administrator can register tire changes",
            ));
        }
        request.validate()?;

        // El camión debe pertenecer al administrador y la marca existir
        self.cars
            .find_by_id(request.car_id)
            .await?
            .filter(|c| c.admin_id == actor.id)
            .ok_or_else(|| reference_error("Car", request.car_id))?;
        self.tires
            .find_brand_by_id(request.brand_id)
            .await?
            .ok_or_else(|| reference_error("TireBrand", request.brand_id))?;

        let odometer = non_negative_decimal("odometer_at_change", request.odometer_at_change)?;

        let change = self
            .tires
            .create_change(
                actor.id,
                request.car_id,
                request.brand_id,
                request.position,
                odometer,
                request.change_date,
            )
            .await?;

        Ok(ApiResponse::success_with_message(
            change,
            "Cambio de neumático registrado exitosamente".to_string(),
        ))
    }

    pub async fn list_changes(&self, actor: &Actor) -> Result<Vec<TireChange>, AppError> {
        let admin_id = actor.scope_admin_id().ok_or_else(|| {
            AppError::Unauthorized("El token no tiene un administrador asociado".to_string())
        })?;

        let permissions = self.settings.get_permissions(actor.id).await?;
        if !access_control::can_view_kind(actor, &permissions, ChildKind::TireChanges) {
            return Err(forbidden_error(
                "view tire changes",
                "your administrator disabled this view",
            ));
        }

        self.tires.find_changes_by_admin(admin_id).await
    }
}
