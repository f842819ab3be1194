//! Modelo de ParkingSpot
//!
//! Mapea exactamente a la tabla parking_spots del schema.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// ParkingSpot principal - mapea exactamente a la tabla parking_spots
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct ParkingSpot {
    pub id: Uuid,
    pub name: String,
    pub latitude: f64,
    pub longitude: f64,
    pub price_per_hour: Decimal,
    pub vehicle_type: String,
    pub is_available: bool,
    pub address: Option<String>,
    pub description: Option<String>,
    pub created_at: DateTime<Utc>,
}
