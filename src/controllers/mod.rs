//! Controllers de la API
//!
//! Cada controller orquesta validación, repositorios y auditoría para
//! un recurso; se construye por petición a partir del pool.

pub mod admin_controller;
pub mod audit_controller;
pub mod auth_controller;
pub mod booking_controller;
pub mod parking_controller;
pub mod partner_controller;
pub mod problem_controller;
pub mod user_controller;
