//! Modelos del sistema
//!
//! Este módulo contiene todos los modelos de datos que mapean exactamente
//! al schema PostgreSQL con las convenciones estándar.

pub mod admin;
pub mod audit_log;
pub mod booking;
pub mod parking_spot;
pub mod partner;
pub mod problem_report;
pub mod settings;
pub mod user;
