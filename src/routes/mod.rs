pub mod car_routes;
pub mod cycle_routes;
pub mod dashboard_routes;
pub mod driver_routes;
pub mod expense_routes;
pub mod freight_routes;
pub mod fueling_routes;
pub mod settings_routes;
pub mod tire_routes;
