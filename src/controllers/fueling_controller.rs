//! Controller de abastecimientos
//!
//! Arla y diésel S-10 se capturan con 4 decimales; el total es derivado
//! y se recalcula en cada edición. Las dos fotos (odómetro y nota
//! fiscal) son obligatorias al crear.

use sqlx::PgPool;
use uuid::Uuid;
use validator::Validate;

use crate::models::{
    actor::Actor,
    fueling::{CreateFuelingRequest, Fueling, UpdateFuelingRequest},
    ApiResponse,
};
use crate::repositories::{CycleRepository, FuelingRepository, NewFueling, SettingsRepository};
use crate::services::{
    access_control::{self, ChildKind},
    finance,
    photo_storage::PhotoStorage,
};
use crate::utils::{
    errors::{forbidden_error, not_found_error, AppError},
    validation::{non_negative_decimal, require_photo},
};

pub struct FuelingController {
    cycles: CycleRepository,
    fuelings: FuelingRepository,
    settings: SettingsRepository,
    photos: PhotoStorage,
}

impl FuelingController {
    pub fn new(pool: PgPool, photos: PhotoStorage) -> Self {
        Self {
            cycles: CycleRepository::new(pool.clone()),
            fuelings: FuelingRepository::new(pool.clone()),
            settings: SettingsRepository::new(pool),
            photos,
        }
    }

    pub async fn create(
        &self,
        actor: &Actor,
        cycle_id: Uuid,
        request: CreateFuelingRequest,
    ) -> Result<ApiResponse<Fueling>, AppError> {
        request.validate()?;
        let cycle = super::mutable_cycle(&self.cycles, actor, cycle_id).await?;

        let odometer = non_negative_decimal("odometer", request.odometer)?;
        let arla_liters = non_negative_decimal("arla_liters", request.arla_liters)?;
        let arla_price = non_negative_decimal("arla_price_per_liter", request.arla_price_per_liter)?;
        let diesel_liters = non_negative_decimal("diesel_liters", request.diesel_liters)?;
        let diesel_price =
            non_negative_decimal("diesel_price_per_liter", request.diesel_price_per_liter)?;

        let odometer_payload = require_photo("odometer_photo", request.odometer_photo.as_ref())?;
        let receipt_payload = require_photo("receipt_photo", request.receipt_photo.as_ref())?;

        let total = finance::compute_fueling_total(arla_liters, arla_price, diesel_liters, diesel_price);

        let odometer_photo_url = self.photos.save("fuelings", odometer_payload).await?;
        let receipt_photo_url = self.photos.save("fuelings", receipt_payload).await?;

        let fueling = self
            .fuelings
            .create(NewFueling {
                cycle_id: cycle.id,
                date: request.date,
                station: request.station,
                odometer,
                arla_liters,
                arla_price_per_liter: arla_price,
                diesel_liters,
                diesel_price_per_liter: diesel_price,
                total,
                odometer_photo_url,
                receipt_photo_url,
            })
            .await?;

        Ok(ApiResponse::success_with_message(
            fueling,
            "Abastecimiento registrado exitosamente".to_string(),
        ))
    }

    pub async fn list(&self, actor: &Actor, cycle_id: Uuid) -> Result<Vec<Fueling>, AppError> {
        let cycle = super::visible_cycle(&self.cycles, actor, cycle_id).await?;

        let permissions = self.settings.get_permissions(actor.id).await?;
        if !access_control::can_view_kind(actor, &permissions, ChildKind::Fuelings) {
            return Err(forbidden_error(
                "view fuelings",
                "your administrator disabled this view",
            ));
        }

        self.fuelings.find_by_cycle(cycle.id).await
    }

    pub async fn update(
        &self,
        actor: &Actor,
        fueling_id: Uuid,
        request: UpdateFuelingRequest,
    ) -> Result<ApiResponse<Fueling>, AppError> {
        request.validate()?;

        let mut fueling = self
            .fuelings
            .find_by_id(fueling_id)
            .await?
            .ok_or_else(|| not_found_error("Fueling", fueling_id))?;
        super::mutable_cycle(&self.cycles, actor, fueling.cycle_id).await?;

        if let Some(date) = request.date {
            fueling.date = date;
        }
        if let Some(station) = request.station {
            fueling.station = station;
        }
        if let Some(value) = request.odometer {
            fueling.odometer = non_negative_decimal("odometer", value)?;
        }
        if let Some(value) = request.arla_liters {
            fueling.arla_liters = non_negative_decimal("arla_liters", value)?;
        }
        if let Some(value) = request.arla_price_per_liter {
            fueling.arla_price_per_liter = non_negative_decimal("arla_price_per_liter", value)?;
        }
        if let Some(value) = request.diesel_liters {
            fueling.diesel_liters = non_negative_decimal("diesel_liters", value)?;
        }
        if let Some(value) = request.diesel_price_per_liter {
            fueling.diesel_price_per_liter =
                non_negative_decimal("diesel_price_per_liter", value)?;
        }

        if let Some(payload) = request.odometer_photo.as_deref() {
            if !payload.trim().is_empty() {
                fueling.odometer_photo_url = self.photos.save("fuelings", payload).await?;
            }
        }
        if let Some(payload) = request.receipt_photo.as_deref() {
            if !payload.trim().is_empty() {
                fueling.receipt_photo_url = self.photos.save("fuelings", payload).await?;
            }
        }

        fueling.total = finance::compute_fueling_total(
            fueling.arla_liters,
            fueling.arla_price_per_liter,
            fueling.diesel_liters,
            fueling.diesel_price_per_liter,
        );

        let updated = self.fuelings.update(fueling).await?;

        Ok(ApiResponse::success_with_message(
            updated,
            "Abastecimiento actualizado exitosamente".to_string(),
        ))
    }

    pub async fn delete(&self, actor: &Actor, fueling_id: Uuid) -> Result<(), AppError> {
        let fueling = self
            .fuelings
            .find_by_id(fueling_id)
            .await?
            .ok_or_else(|| not_found_error("Fueling", fueling_id))?;
        super::mutable_cycle(&self.cycles, actor, fueling.cycle_id).await?;

        self.fuelings.delete(fueling.id).await
    }
}
