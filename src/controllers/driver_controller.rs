//! Controller de motoristas
//!
//! Alta de perfiles y emisión de enlaces de invitación. El enlace lleva
//! un token de motorista de vigencia extendida que el front incrusta en
//! la URL de acceso.

use sqlx::PgPool;
use uuid::Uuid;
use validator::Validate;

use crate::config::EnvironmentConfig;
use crate::middleware::auth::generate_driver_invite_token;
use crate::models::{
    actor::Actor,
    driver::{CreateDriverRequest, Driver, DriverInviteResponse},
    ApiResponse,
};
use crate::repositories::DriverRepository;
use crate::utils::errors::{forbidden_error, not_found_error, AppError};

pub struct DriverController {
    repository: DriverRepository,
    config: EnvironmentConfig,
}

impl DriverController {
    pub fn new(pool: PgPool, config: EnvironmentConfig) -> Self {
        Self {
            repository: DriverRepository::new(pool),
            config,
        }
    }

    pub async fn create(
        &self,
        actor: &Actor,
        request: CreateDriverRequest,
    ) -> Result<ApiResponse<Driver>, AppError> {
        if !actor.is_admin() {
            return Err(forbidden_error(
                "register driver",
                "only an administrator can register drivers",
            ));
        }
        request.validate()?;

        let driver = self
            .repository
            .create(actor.id, request.name, request.email, request.phone)
            .await?;

        Ok(ApiResponse::success_with_message(
            driver,
            "Motorista registrado exitosamente".to_string(),
        ))
    }

    pub async fn list(&self, actor: &Actor) -> Result<Vec<Driver>, AppError> {
        if !actor.is_admin() {
            return Err(forbidden_error(
                "list drivers",
                "only an administrator can list drivers",
            ));
        }
        self.repository.find_by_admin(actor.id).await
    }

    /// Emitir un enlace de invitación para el motorista indicado
    pub async fn invite(
        &self,
        actor: &Actor,
        driver_id: Uuid,
    ) -> Result<ApiResponse<DriverInviteResponse>, AppError> {
        if !actor.is_admin() {
            return Err(forbidden_error(
                "invite driver",
                "only an administrator can emit invite links",
            ));
        }

        let driver = self
            .repository
            .find_by_id(driver_id)
            .await?
            .filter(|d| d.admin_id == actor.id)
            .ok_or_else(|| not_found_error("Driver", driver_id))?;

        let (token, expires_at) =
            generate_driver_invite_token(driver.id, driver.admin_id, &self.config)?;
        let invite_url = format!("{}/driver-access?token={}", self.config.app_base_url, token);

        Ok(ApiResponse::success_with_message(
            DriverInviteResponse {
                token,
                invite_url,
                expires_at,
            },
            "Enlace de invitación generado exitosamente".to_string(),
        ))
    }
}
