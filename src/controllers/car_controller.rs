//! Controller de camiones

use sqlx::PgPool;
use uuid::Uuid;
use validator::Validate;

use crate::models::{
    actor::Actor,
    car::{Car, CreateCarRequest},
    ApiResponse,
};
use crate::repositories::CarRepository;
use crate::utils::errors::{forbidden_error, not_found_error, AppError};

pub struct CarController {
    repository: CarRepository,
}

impl CarController {
    pub fn new(pool: PgPool) -> Self {
        Self {
            repository: CarRepository::new(pool),
        }
    }

    pub async fn create(
        &self,
        actor: &Actor,
        request: CreateCarRequest,
    ) -> Result<ApiResponse<Car>, AppError> {
        if !actor.is_admin() {
            return Err(forbidden_error("register car", "only an administrator can register cars"));
        }
        request.validate()?;

        let car = self
            .repository
            .create(actor.id, request.plate, request.brand, request.model, request.year)
            .await?;

        Ok(ApiResponse::success_with_message(
            car,
            "Camión registrado exitosamente".to_string(),
        ))
    }

    pub async fn list(&self, actor: &Actor) -> Result<Vec<Car>, AppError> {
        let admin_id = actor.scope_admin_id().ok_or_else(|| {
            AppError::Unauthorized("El token no tiene un administrador asociado".to_string())
        })?;
        self.repository.find_by_admin(admin_id).await
    }

    pub async fn delete(&self, actor: &Actor, car_id: Uuid) -> Result<(), AppError> {
        if !actor.is_admin() {
            return Err(forbidden_error("delete car", "only an administrator can delete cars"));
        }

        let car = self
            .repository
            .find_by_id(car_id)
            .await?
            .ok_or_else(|| not_found_error("Car", car_id))?;

        if car.admin_id != actor.id {
            return Err(forbidden_error("delete car", "the car belongs to another administrator"));
        }

        self.repository.delete(car.id).await
    }
}
