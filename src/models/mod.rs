//! Modelos de datos
//!
//! Structs tipados por entidad con sus requests de creación/edición.
//! La validación de forma vive en los derives de validator; las reglas
//! de negocio (fotos requeridas, referencias, estado del ciclo) se
//! aplican en los controllers.

pub mod actor;
pub mod car;
pub mod cycle;
pub mod driver;
pub mod expense;
pub mod freight;
pub mod fueling;
pub mod settings;
pub mod tire;

use serde::Serialize;

/// Response genérica de la API
#[derive(Debug, Serialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    pub message: Option<String>,
    pub data: Option<T>,
}

impl<T> ApiResponse<T> {
    pub fn success(data: T) -> Self {
        Self {
            success: true,
            message: None,
            data: Some(data),
        }
    }

    pub fn success_with_message(data: T, message: String) -> Self {
        Self {
            success: true,
            message: Some(message),
            data: Some(data),
        }
    }
}
