//! Servicios de dominio
//!
//! Lógica pura que no toca la base de datos: cálculo de tarifas y
//! ranking de recomendaciones.

pub mod pricing;
pub mod recommendation;
