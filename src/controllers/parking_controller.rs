use std::collections::HashSet;

use rust_decimal::prelude::ToPrimitive;
use sqlx::PgPool;
use uuid::Uuid;
use validator::Validate;

use crate::dto::common::ApiResponse;
use crate::dto::parking_dto::{
    CreateParkingSpotRequest, ParkingSpotResponse, RecommendQuery, RecommendedSpotResponse,
    SpotFilters,
};
use crate::models::audit_log::actions;
use crate::repositories::audit_log_repository::{AuditLogRepository, NewAuditLog};
use crate::repositories::booking_repository::BookingRepository;
use crate::repositories::parking_spot_repository::ParkingSpotRepository;
use crate::repositories::settings_repository::SettingsRepository;
use crate::services::recommendation::{rank_spots, Preference};
use crate::utils::errors::{conflict_error, AppError};
use crate::utils::validation::validate_coordinates;

pub struct ParkingController {
    spots: ParkingSpotRepository,
    bookings: BookingRepository,
    settings: SettingsRepository,
    audit: AuditLogRepository,
}

impl ParkingController {
    pub fn new(pool: PgPool) -> Self {
        Self {
            spots: ParkingSpotRepository::new(pool.clone()),
            bookings: BookingRepository::new(pool.clone()),
            settings: SettingsRepository::new(pool.clone()),
            audit: AuditLogRepository::new(pool),
        }
    }

    /// Registrar una plaza (operación de admin, auditada)
    pub async fn create(
        &self,
        actor_id: Uuid,
        request: CreateParkingSpotRequest,
    ) -> Result<ApiResponse<ParkingSpotResponse>, AppError> {
        request.validate()?;

        if request.price_per_hour <= rust_decimal::Decimal::ZERO {
            return Err(AppError::BadRequest(
                "price_per_hour debe ser mayor que cero".to_string(),
            ));
        }

        let name = request.name.trim().to_string();
        if self.spots.name_exists(&name).await? {
            return Err(conflict_error("Parking spot", "name", &name));
        }

        let spot = self
            .spots
            .create(
                name,
                request.latitude,
                request.longitude,
                request.price_per_hour,
                request.vehicle_type,
                request.address,
                request.description,
            )
            .await?;

        self.audit
            .append(NewAuditLog {
                actor_id,
                action: actions::PARKING_SPOT_CREATED.to_string(),
                target_type: "parking_spot".to_string(),
                target_id: spot.id.to_string(),
                before_value: None,
                after_value: Some(serde_json::json!({
                    "name": spot.name,
                    "price_per_hour": spot.price_per_hour,
                })),
                metadata: None,
            })
            .await?;

        Ok(ApiResponse::success_with_message(
            spot.into(),
            "Plaza registrada exitosamente".to_string(),
        ))
    }

    pub async fn get_by_id(&self, id: Uuid) -> Result<ParkingSpotResponse, AppError> {
        let spot = self
            .spots
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Plaza de aparcamiento no encontrada".to_string()))?;

        Ok(spot.into())
    }

    pub async fn list(&self, filters: SpotFilters) -> Result<Vec<ParkingSpotResponse>, AppError> {
        let limit = filters.limit.unwrap_or(50).clamp(1, 200);
        let offset = filters.offset.unwrap_or(0).max(0);

        let spots = self
            .spots
            .list(filters.q, filters.vehicle_type, filters.available, limit, offset)
            .await?;

        Ok(spots.into_iter().map(ParkingSpotResponse::from).collect())
    }

    /// Recomendar plazas para una coordenada según la preferencia
    pub async fn recommend(
        &self,
        query: RecommendQuery,
    ) -> Result<Vec<RecommendedSpotResponse>, AppError> {
        validate_coordinates(query.lat, query.lon)
            .map_err(|_| AppError::BadRequest("Coordenadas fuera de rango".to_string()))?;

        let preference = match query.preference.as_deref() {
            None => Preference::Best,
            Some(p) => Preference::parse(p).ok_or_else(|| {
                AppError::BadRequest(
                    "preference debe ser cheapest, nearest o best".to_string(),
                )
            })?,
        };

        let settings = self.settings.get().await?;
        let spots = self.spots.list_available(query.vehicle_type).await?;
        let occupied: HashSet<Uuid> = self
            .bookings
            .occupied_spot_ids(chrono::Utc::now())
            .await?
            .into_iter()
            .collect();

        let weight = settings.best_score_distance_weight.to_f64().unwrap_or(10.0);
        let ranked = rank_spots(spots, &occupied, query.lat, query.lon, preference, weight);

        Ok(ranked
            .into_iter()
            .map(|r| RecommendedSpotResponse {
                spot: r.spot.into(),
                distance: r.distance,
                score: r.score,
                occupied: r.occupied,
            })
            .collect())
    }
}
