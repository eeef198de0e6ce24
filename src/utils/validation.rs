//! Utilidades de validación
//!
//! Este módulo contiene funciones helper para validación de datos
//! y conversión de tipos numéricos a decimales de persistencia.

use rust_decimal::Decimal;

use crate::utils::errors::AppError;

/// Convertir un f64 del request a Decimal, rechazando NaN/infinito
pub fn decimal_from_f64(field: &str, value: f64) -> Result<Decimal, AppError> {
    Decimal::from_f64_retain(value)
        .ok_or_else(|| AppError::Validation(format!("El campo '{}' no es un número válido", field)))
}

/// Convertir validando que el valor no sea negativo
pub fn non_negative_decimal(field: &str, value: f64) -> Result<Decimal, AppError> {
    let decimal = decimal_from_f64(field, value)?;
    if decimal < Decimal::ZERO {
        return Err(AppError::Validation(format!(
            "El campo '{}' no puede ser negativo",
            field
        )));
    }
    Ok(decimal)
}

/// Validar que un porcentaje esté entre 0 y 100
pub fn percentage_decimal(field: &str, value: f64) -> Result<Decimal, AppError> {
    let decimal = non_negative_decimal(field, value)?;
    if decimal > Decimal::from(100) {
        return Err(AppError::Validation(format!(
            "El campo '{}' debe estar entre 0 y 100",
            field
        )));
    }
    Ok(decimal)
}

/// Validar que un string requerido no esté vacío
pub fn require_not_empty(field: &str, value: &str) -> Result<(), AppError> {
    if value.trim().is_empty() {
        return Err(AppError::Validation(format!(
            "El campo '{}' es requerido",
            field
        )));
    }
    Ok(())
}

/// Validar que un payload de foto requerido esté presente y no vacío
pub fn require_photo<'a>(field: &str, photo: Option<&'a String>) -> Result<&'a str, AppError> {
    match photo {
        Some(payload) if !payload.trim().is_empty() => Ok(payload),
        _ => Err(AppError::Validation(format!(
            "La foto '{}' es requerida",
            field
        ))),
    }
}

/// No se puede declarar un peso de llegada sin su evidencia: con
/// arrival_weight presente debe existir foto de llegada (un payload
/// nuevo o la URL ya guardada). Sin peso de llegada la foto no se exige.
pub fn check_arrival_evidence(
    arrival_weight: Option<Decimal>,
    arrival_photo: Option<&str>,
) -> Result<(), AppError> {
    if arrival_weight.is_none() {
        return Ok(());
    }
    match arrival_photo {
        Some(photo) if !photo.trim().is_empty() => Ok(()),
        _ => Err(AppError::Validation(
            "La foto 'arrival_photo' es requerida".to_string(),
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decimal_from_f64() {
        assert_eq!(decimal_from_f64("peso", 20000.0).unwrap(), Decimal::from(20000));
        assert!(decimal_from_f64("peso", f64::NAN).is_err());
        assert!(decimal_from_f64("peso", f64::INFINITY).is_err());
    }

    #[test]
    fn test_non_negative_decimal() {
        assert!(non_negative_decimal("valor", 0.0).is_ok());
        assert!(non_negative_decimal("valor", 150.5).is_ok());
        assert!(non_negative_decimal("valor", -0.01).is_err());
    }

    #[test]
    fn test_percentage_decimal() {
        assert!(percentage_decimal("comision", 0.0).is_ok());
        assert!(percentage_decimal("comision", 100.0).is_ok());
        assert!(percentage_decimal("comision", 100.01).is_err());
        assert!(percentage_decimal("comision", -1.0).is_err());
    }

    #[test]
    fn test_require_not_empty() {
        assert!(require_not_empty("descricao", "Viagem SP").is_ok());
        assert!(require_not_empty("descricao", "   ").is_err());
        assert!(require_not_empty("descricao", "").is_err());
    }

    #[test]
    fn test_require_photo() {
        let photo = Some("data:image/jpeg;base64,AAAA".to_string());
        assert!(require_photo("km_saida", photo.as_ref()).is_ok());
        assert!(require_photo("km_saida", None).is_err());

        let empty = Some(String::new());
        assert!(require_photo("km_saida", empty.as_ref()).is_err());
    }

    #[test]
    fn test_check_arrival_evidence() {
        // Sin peso de llegada la foto no se exige
        assert!(check_arrival_evidence(None, None).is_ok());

        // Con peso de llegada debe venir un payload nuevo o existir la
        // URL ya guardada del registro
        let weight = Some(Decimal::from(19500));
        assert!(check_arrival_evidence(weight, Some("data:image/jpeg;base64,AAAA")).is_ok());
        assert!(check_arrival_evidence(weight, Some("/uploads/freights/llegada.jpg")).is_ok());
        assert!(check_arrival_evidence(weight, None).is_err());
        assert!(check_arrival_evidence(weight, Some("   ")).is_err());
    }
}
