//! Repositorios de acceso a datos
//!
//! Un repositorio por tabla; queries en runtime con `sqlx::query_as`.

pub mod admin_repository;
pub mod audit_log_repository;
pub mod booking_repository;
pub mod parking_spot_repository;
pub mod partner_repository;
pub mod problem_report_repository;
pub mod settings_repository;
pub mod user_repository;
