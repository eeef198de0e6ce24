//! Modelo de Driver
//!
//! Perfil de motorista vinculado a un administrador. Las credenciales
//! viven en el proveedor de identidad externo; aquí solo guardamos el
//! perfil y el vínculo admin -> motorista.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;
use validator::Validate;

#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Driver {
    pub id: Uuid,
    pub admin_id: Uuid,
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// Request para registrar el perfil de un motorista
#[derive(Debug, Deserialize, Validate)]
pub struct CreateDriverRequest {
    #[validate(length(min = 2, max = 150))]
    pub name: String,

    #[validate(email)]
    pub email: String,

    #[validate(length(min = 8, max = 30))]
    pub phone: Option<String>,
}

/// Response del enlace de invitación de motorista
#[derive(Debug, Serialize)]
pub struct DriverInviteResponse {
    pub token: String,
    pub invite_url: String,
    pub expires_at: DateTime<Utc>,
}
