use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::models::settings::AppSettings;

/// Request de actualización de configuración (campos opcionales)
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateSettingsRequest {
    #[validate(range(min = 0, max = 240))]
    pub grace_period_minutes: Option<i32>,

    /// Validado en el controller: debe ser >= 0
    pub overstay_rate_multiplier: Option<Decimal>,

    /// Validado en el controller: debe ser >= 0
    pub best_score_distance_weight: Option<Decimal>,
}

/// Response de configuración
#[derive(Debug, Serialize)]
pub struct SettingsResponse {
    pub grace_period_minutes: i32,
    pub overstay_rate_multiplier: Decimal,
    pub best_score_distance_weight: Decimal,
    pub updated_at: DateTime<Utc>,
}

impl From<AppSettings> for SettingsResponse {
    fn from(s: AppSettings) -> Self {
        Self {
            grace_period_minutes: s.grace_period_minutes,
            overstay_rate_multiplier: s.overstay_rate_multiplier,
            best_score_distance_weight: s.best_score_distance_weight,
            updated_at: s.updated_at,
        }
    }
}

/// Response del dashboard de estadísticas
#[derive(Debug, Serialize)]
pub struct StatsResponse {
    pub bookings_total: i64,
    pub bookings_pending: i64,
    pub bookings_active: i64,
    pub bookings_completed: i64,
    pub bookings_cancelled: i64,
    pub revenue: Decimal,
    pub parking_spots: i64,
    pub partners_pending_kyc: i64,
    pub problem_reports_open: i64,
}
