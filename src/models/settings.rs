//! Modelo de AppSettings
//!
//! Fila única de configuración de precios y recomendación. Los valores
//! que el negocio puede ajustar en caliente viven aquí, no en constantes.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// AppSettings - mapea exactamente a la fila única de app_settings
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct AppSettings {
    /// Minutos de cortesía tras end_time antes de cobrar overstay
    pub grace_period_minutes: i32,
    /// Multiplicador sobre price_per_hour de la plaza para la tarifa de overstay
    pub overstay_rate_multiplier: Decimal,
    /// Peso de la distancia en el score compuesto `price + distance * weight`
    pub best_score_distance_weight: Decimal,
    pub updated_at: DateTime<Utc>,
}

impl AppSettings {
    pub fn grace_period(&self) -> chrono::Duration {
        chrono::Duration::minutes(self.grace_period_minutes as i64)
    }
}
