use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::models::parking_spot::ParkingSpot;

/// Request para registrar una plaza (solo admin)
#[derive(Debug, Deserialize, Validate)]
pub struct CreateParkingSpotRequest {
    #[validate(custom = "crate::utils::validation::validate_spot_name")]
    pub name: String,

    #[validate(range(min = -90.0, max = 90.0))]
    pub latitude: f64,

    #[validate(range(min = -180.0, max = 180.0))]
    pub longitude: f64,

    pub price_per_hour: Decimal,

    #[validate(length(min = 2, max = 30))]
    pub vehicle_type: String,

    #[validate(length(max = 200))]
    pub address: Option<String>,

    #[validate(length(max = 500))]
    pub description: Option<String>,
}

/// Filtros para búsqueda de plazas
#[derive(Debug, Deserialize)]
pub struct SpotFilters {
    /// Búsqueda de texto sobre nombre y dirección
    pub q: Option<String>,
    pub vehicle_type: Option<String>,
    pub available: Option<bool>,
    pub limit: Option<i64>,
    pub offset: Option<i64>,
}

/// Query de recomendación
#[derive(Debug, Deserialize)]
pub struct RecommendQuery {
    pub lat: f64,
    #[serde(alias = "long")]
    pub lon: f64,
    /// cheapest | nearest | best (por defecto best)
    pub preference: Option<String>,
    #[serde(alias = "type")]
    pub vehicle_type: Option<String>,
}

/// Response de plaza para la API
#[derive(Debug, Serialize)]
pub struct ParkingSpotResponse {
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

impl From<ParkingSpot> for ParkingSpotResponse {
    fn from(s: ParkingSpot) -> Self {
        Self {
            id: s.id,
            name: s.name,
            latitude: s.latitude,
            longitude: s.longitude,
            price_per_hour: s.price_per_hour,
            vehicle_type: s.vehicle_type,
            is_available: s.is_available,
            address: s.address,
            description: s.description,
            created_at: s.created_at,
        }
    }
}

/// Response de recomendación: plaza + métricas del ranking
#[derive(Debug, Serialize)]
pub struct RecommendedSpotResponse {
    #[serde(flatten)]
    pub spot: ParkingSpotResponse,
    pub distance: f64,
    pub score: f64,
    pub occupied: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_request_rejects_bad_coordinates() {
        let req = CreateParkingSpotRequest {
            name: "A1".to_string(),
            latitude: 95.0,
            longitude: 2.17,
            price_per_hour: Decimal::new(200, 2),
            vehicle_type: "car".to_string(),
            address: None,
            description: None,
        };
        assert!(req.validate().is_err());
    }

    #[test]
    fn test_recommend_query_aliases() {
        let q: RecommendQuery =
            serde_json::from_str(r#"{"lat": 41.4, "long": 2.17, "type": "car"}"#).unwrap();
        assert_eq!(q.lon, 2.17);
        assert_eq!(q.vehicle_type.as_deref(), Some("car"));
        assert!(q.preference.is_none());
    }
}
