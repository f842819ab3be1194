//! Ranking de plazas recomendadas
//!
//! Distancia euclídea plana sobre coordenadas (suficiente a escala de
//! barrio; no es geodésica). Las plazas libres ahora mismo van primero;
//! si todas están ocupadas se devuelve la lista completa igualmente.

use rust_decimal::prelude::ToPrimitive;
use std::collections::HashSet;
use uuid::Uuid;

use crate::models::parking_spot::ParkingSpot;

/// Criterio de ordenación pedido por el cliente
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Preference {
    Cheapest,
    Nearest,
    Best,
}

impl Preference {
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "cheapest" => Some(Preference::Cheapest),
            "nearest" => Some(Preference::Nearest),
            "best" => Some(Preference::Best),
            _ => None,
        }
    }
}

/// Plaza con las métricas calculadas para el ranking
#[derive(Debug, Clone)]
pub struct RankedSpot {
    pub spot: ParkingSpot,
    pub distance: f64,
    pub score: f64,
    pub occupied: bool,
}

/// Distancia euclídea plana entre dos coordenadas
pub fn planar_distance(lat_a: f64, lon_a: f64, lat_b: f64, lon_b: f64) -> f64 {
    let dx = lat_a - lat_b;
    let dy = lon_a - lon_b;
    (dx * dx + dy * dy).sqrt()
}

/// Ordenar las candidatas según la preferencia.
///
/// score compuesto = precio + distancia × peso; el peso viene de la
/// configuración (app_settings), no de una constante.
pub fn rank_spots(
    spots: Vec<ParkingSpot>,
    occupied_ids: &HashSet<Uuid>,
    lat: f64,
    lon: f64,
    preference: Preference,
    distance_weight: f64,
) -> Vec<RankedSpot> {
    let mut ranked: Vec<RankedSpot> = spots
        .into_iter()
        .map(|spot| {
            let distance = planar_distance(lat, lon, spot.latitude, spot.longitude);
            let price = spot.price_per_hour.to_f64().unwrap_or(0.0);
            let score = price + distance * distance_weight;
            let occupied = occupied_ids.contains(&spot.id);
            RankedSpot {
                spot,
                distance,
                score,
                occupied,
            }
        })
        .collect();

    // Preferir plazas libres; si no queda ninguna, usar todas
    if ranked.iter().any(|r| !r.occupied) {
        ranked.retain(|r| !r.occupied);
    }

    match preference {
        Preference::Cheapest => {
            ranked.sort_by(|a, b| a.spot.price_per_hour.cmp(&b.spot.price_per_hour))
        }
        Preference::Nearest => ranked.sort_by(|a, b| {
            a.distance
                .partial_cmp(&b.distance)
                .unwrap_or(std::cmp::Ordering::Equal)
        }),
        Preference::Best => ranked.sort_by(|a, b| {
            a.score
                .partial_cmp(&b.score)
                .unwrap_or(std::cmp::Ordering::Equal)
        }),
    }

    ranked
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use rust_decimal::Decimal;

    fn spot(name: &str, lat: f64, lon: f64, price: i64) -> ParkingSpot {
        ParkingSpot {
            id: Uuid::new_v4(),
            name: name.to_string(),
            latitude: lat,
            longitude: lon,
            price_per_hour: Decimal::new(price, 0),
            vehicle_type: "car".to_string(),
            is_available: true,
            address: None,
            description: None,
            created_at: Utc::now(),
        }
    }

    #[test]
    fn test_parse_preference() {
        assert_eq!(Preference::parse("cheapest"), Some(Preference::Cheapest));
        assert_eq!(Preference::parse("nearest"), Some(Preference::Nearest));
        assert_eq!(Preference::parse("best"), Some(Preference::Best));
        assert_eq!(Preference::parse("fastest"), None);
    }

    #[test]
    fn test_cheapest_is_nondecreasing_in_price() {
        let spots = vec![
            spot("A", 0.0, 0.0, 300),
            spot("B", 0.0, 0.0, 100),
            spot("C", 0.0, 0.0, 200),
        ];
        let ranked = rank_spots(spots, &HashSet::new(), 0.0, 0.0, Preference::Cheapest, 10.0);
        let prices: Vec<_> = ranked.iter().map(|r| r.spot.price_per_hour).collect();
        assert!(prices.windows(2).all(|w| w[0] <= w[1]));
    }

    #[test]
    fn test_nearest_is_nondecreasing_in_distance() {
        let spots = vec![
            spot("far", 10.0, 10.0, 100),
            spot("near", 0.1, 0.1, 500),
            spot("mid", 3.0, 3.0, 300),
        ];
        let ranked = rank_spots(spots, &HashSet::new(), 0.0, 0.0, Preference::Nearest, 10.0);
        assert_eq!(ranked[0].spot.name, "near");
        let dists: Vec<_> = ranked.iter().map(|r| r.distance).collect();
        assert!(dists.windows(2).all(|w| w[0] <= w[1]));
    }

    #[test]
    fn test_best_balances_price_and_distance() {
        // Barata pero lejos vs. cara pero al lado, con peso 10:
        // A: 100 + 5.0*10 = 150; B: 120 + 0.0*10 = 120 => gana B
        let spots = vec![spot("A", 3.0, 4.0, 100), spot("B", 0.0, 0.0, 120)];
        let ranked = rank_spots(spots, &HashSet::new(), 0.0, 0.0, Preference::Best, 10.0);
        assert_eq!(ranked[0].spot.name, "B");
    }

    #[test]
    fn test_occupied_spots_are_dropped_when_free_ones_exist() {
        let busy = spot("busy", 0.0, 0.0, 50);
        let free = spot("free", 1.0, 1.0, 500);
        let occupied: HashSet<Uuid> = [busy.id].into_iter().collect();

        let ranked = rank_spots(
            vec![busy, free],
            &occupied,
            0.0,
            0.0,
            Preference::Cheapest,
            10.0,
        );
        assert_eq!(ranked.len(), 1);
        assert_eq!(ranked[0].spot.name, "free");
    }

    #[test]
    fn test_all_occupied_falls_back_to_full_list() {
        let a = spot("A", 0.0, 0.0, 100);
        let b = spot("B", 1.0, 1.0, 200);
        let occupied: HashSet<Uuid> = [a.id, b.id].into_iter().collect();

        let ranked = rank_spots(vec![a, b], &occupied, 0.0, 0.0, Preference::Nearest, 10.0);
        assert_eq!(ranked.len(), 2);
        assert!(ranked.iter().all(|r| r.occupied));
    }
}
