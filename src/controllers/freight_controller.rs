//! Controller de fretes
//!
//! El valor se deriva del peso de salida y la tarifa por tonelada. El
//! porcentaje de comisión se toma de la configuración del administrador
//! al crear el frete y queda congelado en el registro: las ediciones
//! posteriores recalculan con ese porcentaje, no con el vigente.

use sqlx::PgPool;
use uuid::Uuid;
use validator::Validate;

use crate::models::{
    actor::Actor,
    freight::{CreateFreightRequest, Freight, UpdateFreightRequest},
    ApiResponse,
};
use crate::repositories::{CycleRepository, FreightRepository, NewFreight, SettingsRepository};
use crate::services::{finance, photo_storage::PhotoStorage};
use crate::utils::{
    errors::{not_found_error, AppError},
    validation::{check_arrival_evidence, non_negative_decimal, require_photo},
};

pub struct FreightController {
    cycles: CycleRepository,
    freights: FreightRepository,
    settings: SettingsRepository,
    photos: PhotoStorage,
}

impl FreightController {
    pub fn new(pool: PgPool, photos: PhotoStorage) -> Self {
        Self {
            cycles: CycleRepository::new(pool.clone()),
            freights: FreightRepository::new(pool.clone()),
            settings: SettingsRepository::new(pool),
            photos,
        }
    }

    pub async fn create(
        &self,
        actor: &Actor,
        cycle_id: Uuid,
        request: CreateFreightRequest,
    ) -> Result<ApiResponse<Freight>, AppError> {
        request.validate()?;
        let cycle = super::mutable_cycle(&self.cycles, actor, cycle_id).await?;

        let departure_weight = non_negative_decimal("departure_weight", request.departure_weight)?;
        let rate_per_ton = non_negative_decimal("rate_per_ton", request.rate_per_ton)?;
        let loss_value = match request.loss_value {
            Some(value) => non_negative_decimal("loss_value", value)?,
            None => rust_decimal::Decimal::ZERO,
        };
        let arrival_weight = match request.arrival_weight {
            Some(value) => Some(non_negative_decimal("arrival_weight", value)?),
            None => None,
        };

        let departure_payload = require_photo("departure_photo", request.departure_photo.as_ref())?;
        // La foto de llegada solo es obligatoria cuando se registra peso de llegada
        check_arrival_evidence(arrival_weight, request.arrival_photo.as_deref())?;
        let arrival_payload = if arrival_weight.is_some() {
            request.arrival_photo.as_deref()
        } else {
            None
        };

        // Snapshot del porcentaje vigente del administrador dueño del ciclo
        let commission_percent = self
            .settings
            .get_commission(cycle.admin_id)
            .await?
            .commission_percentage;

        let value = finance::compute_freight_value(departure_weight, rate_per_ton);
        let commission_value = finance::compute_commission(value, commission_percent);

        let departure_photo_url = self.photos.save("freights", departure_payload).await?;
        let arrival_photo_url = match arrival_payload {
            Some(payload) => Some(self.photos.save("freights", payload).await?),
            None => None,
        };

        let freight = self
            .freights
            .create(NewFreight {
                cycle_id: cycle.id,
                date: request.date,
                origin: request.origin,
                destination: request.destination,
                departure_weight,
                arrival_weight,
                rate_per_ton,
                value,
                commission_percent,
                commission_value,
                loss_value,
                departure_photo_url,
                arrival_photo_url,
            })
            .await?;

        Ok(ApiResponse::success_with_message(
            freight,
            "Frete registrado exitosamente".to_string(),
        ))
    }

    pub async fn list(&self, actor: &Actor, cycle_id: Uuid) -> Result<Vec<Freight>, AppError> {
        let cycle = super::visible_cycle(&self.cycles, actor, cycle_id).await?;
        self.freights.find_by_cycle(cycle.id).await
    }

    pub async fn update(
        &self,
        actor: &Actor,
        freight_id: Uuid,
        request: UpdateFreightRequest,
    ) -> Result<ApiResponse<Freight>, AppError> {
        request.validate()?;

        let mut freight = self
            .freights
            .find_by_id(freight_id)
            .await?
            .ok_or_else(|| not_found_error("Freight", freight_id))?;
        super::mutable_cycle(&self.cycles, actor, freight.cycle_id).await?;

        apply_freight_update(&mut freight, &request)?;

        if let Some(payload) = request.departure_photo.as_deref() {
            if !payload.trim().is_empty() {
                freight.departure_photo_url = self.photos.save("freights", payload).await?;
            }
        }
        if let Some(payload) = request.arrival_photo.as_deref() {
            if !payload.trim().is_empty() {
                freight.arrival_photo_url = Some(self.photos.save("freights", payload).await?);
            }
        }

        // Con peso de llegada debe existir su foto, la ya guardada o una nueva
        check_arrival_evidence(freight.arrival_weight, freight.arrival_photo_url.as_deref())?;

        let updated = self.freights.update(freight).await?;

        Ok(ApiResponse::success_with_message(
            updated,
            "Frete actualizado exitosamente".to_string(),
        ))
    }

    pub async fn delete(&self, actor: &Actor, freight_id: Uuid) -> Result<(), AppError> {
        let freight = self
            .freights
            .find_by_id(freight_id)
            .await?
            .ok_or_else(|| not_found_error("Freight", freight_id))?;
        super::mutable_cycle(&self.cycles, actor, freight.cycle_id).await?;

        self.freights.delete(freight.id).await
    }
}

/// Aplicar las ediciones del request sobre el frete y recalcular valor y
/// comisión. El porcentaje usado es el congelado en el registro al
/// crearlo; la configuración vigente del administrador no participa.
fn apply_freight_update(
    freight: &mut Freight,
    request: &UpdateFreightRequest,
) -> Result<(), AppError> {
    if let Some(date) = request.date {
        freight.date = date;
    }
    if let Some(origin) = &request.origin {
        freight.origin = origin.clone();
    }
    if let Some(destination) = &request.destination {
        freight.destination = destination.clone();
    }
    if let Some(value) = request.departure_weight {
        freight.departure_weight = non_negative_decimal("departure_weight", value)?;
    }
    if let Some(value) = request.rate_per_ton {
        freight.rate_per_ton = non_negative_decimal("rate_per_ton", value)?;
    }
    if let Some(value) = request.loss_value {
        freight.loss_value = non_negative_decimal("loss_value", value)?;
    }
    // None conserva el peso de llegada guardado; el flujo de edición no
    // devuelve un frete a "en tránsito"
    if let Some(value) = request.arrival_weight {
        freight.arrival_weight = Some(non_negative_decimal("arrival_weight", value)?);
    }

    freight.value = finance::compute_freight_value(freight.departure_weight, freight.rate_per_ton);
    freight.commission_value = finance::compute_commission(freight.value, freight.commission_percent);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, Utc};
    use rust_decimal::Decimal;

    fn freight_with_percent(percent: i64) -> Freight {
        let value = Decimal::new(300000, 2);
        Freight {
            id: Uuid::new_v4(),
            cycle_id: Uuid::new_v4(),
            date: NaiveDate::from_ymd_opt(2024, 3, 10).unwrap(),
            origin: "Sorriso".to_string(),
            destination: "Santos".to_string(),
            departure_weight: Decimal::from(20000),
            arrival_weight: None,
            rate_per_ton: Decimal::from(150),
            value,
            commission_percent: Decimal::from(percent),
            commission_value: finance::compute_commission(value, Decimal::from(percent)),
            loss_value: Decimal::ZERO,
            departure_photo_url: "/uploads/freights/salida.jpg".to_string(),
            arrival_photo_url: None,
            created_at: Utc::now(),
        }
    }

    fn empty_update() -> UpdateFreightRequest {
        UpdateFreightRequest {
            date: None,
            origin: None,
            destination: None,
            departure_weight: None,
            arrival_weight: None,
            rate_per_ton: None,
            loss_value: None,
            departure_photo: None,
            arrival_photo: None,
        }
    }

    #[test]
    fn test_update_recalcula_con_porcentaje_congelado() {
        // Frete creado con 10%; la configuración del admin después pasó a
        // 20%, pero esa cifra no tiene cómo entrar al recálculo
        let mut freight = freight_with_percent(10);
        let request = UpdateFreightRequest {
            departure_weight: Some(30000.0),
            ..empty_update()
        };

        apply_freight_update(&mut freight, &request).unwrap();

        // 30000 kg a 150/t = 4500.00; comisión 10% = 450.00, no 900.00
        assert_eq!(freight.value, Decimal::new(450000, 2));
        assert_eq!(freight.commission_percent, Decimal::from(10));
        assert_eq!(freight.commission_value, Decimal::new(45000, 2));
    }

    #[test]
    fn test_update_conserva_peso_de_llegada_guardado() {
        let mut freight = freight_with_percent(10);
        freight.arrival_weight = Some(Decimal::from(19500));
        freight.arrival_photo_url = Some("/uploads/freights/llegada.jpg".to_string());

        apply_freight_update(&mut freight, &empty_update()).unwrap();

        assert_eq!(freight.arrival_weight, Some(Decimal::from(19500)));
        assert!(freight.arrival_photo_url.is_some());
    }

    #[test]
    fn test_update_rechaza_pesos_negativos() {
        let mut freight = freight_with_percent(10);
        let request = UpdateFreightRequest {
            departure_weight: Some(-1.0),
            ..empty_update()
        };

        assert!(apply_freight_update(&mut freight, &request).is_err());
    }
}
