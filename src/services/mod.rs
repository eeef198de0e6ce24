//! Servicios del core
//!
//! Lógica pura (control de acceso, calculadora financiera) y el
//! colaborador de almacenamiento de fotos.

pub mod access_control;
pub mod finance;
pub mod photo_storage;
