//! Capa de acceso a datos
//!
//! Cada repositorio envuelve el pool de Postgres y expone operaciones
//! tipadas sobre una tabla. Sin lógica de negocio aquí.

pub mod car_repository;
pub mod cycle_repository;
pub mod driver_repository;
pub mod expense_repository;
pub mod freight_repository;
pub mod fueling_repository;
pub mod settings_repository;
pub mod tire_repository;

pub use car_repository::CarRepository;
pub use cycle_repository::{CyclePatch, CycleRepository};
pub use driver_repository::DriverRepository;
pub use expense_repository::ExpenseRepository;
pub use freight_repository::{FreightRepository, NewFreight};
pub use fueling_repository::{FuelingRepository, NewFueling};
pub use settings_repository::SettingsRepository;
pub use tire_repository::TireRepository;
