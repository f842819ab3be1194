use chrono::Utc;
use rust_decimal::Decimal;
use sqlx::PgPool;
use uuid::Uuid;

use crate::models::parking_spot::ParkingSpot;
use crate::utils::errors::AppError;

pub struct ParkingSpotRepository {
    pool: PgPool,
}

impl ParkingSpotRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    #[allow(clippy::too_many_arguments)]
    pub async fn create(
        &self,
        name: String,
        latitude: f64,
        longitude: f64,
        price_per_hour: Decimal,
        vehicle_type: String,
        address: Option<String>,
        description: Option<String>,
    ) -> Result<ParkingSpot, AppError> {
        let spot = sqlx::query_as::<_, ParkingSpot>(
            r#"
            INSERT INTO parking_spots (
                id, name, latitude, longitude, price_per_hour,
                vehicle_type, is_available, address, description, created_at
            )
            VALUES ($1, $2, $3, $4, $5, $6, true, $7, $8, $9)
            RETURNING *
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(name)
        .bind(latitude)
        .bind(longitude)
        .bind(price_per_hour)
        .bind(vehicle_type)
        .bind(address)
        .bind(description)
        .bind(Utc::now())
        .fetch_one(&self.pool)
        .await?;

        Ok(spot)
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<ParkingSpot>, AppError> {
        let spot = sqlx::query_as::<_, ParkingSpot>("SELECT * FROM parking_spots WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(spot)
    }

    pub async fn find_by_name(&self, name: &str) -> Result<Option<ParkingSpot>, AppError> {
        let spot = sqlx::query_as::<_, ParkingSpot>("SELECT * FROM parking_spots WHERE name = $1")
            .bind(name)
            .fetch_optional(&self.pool)
            .await?;

        Ok(spot)
    }

    pub async fn name_exists(&self, name: &str) -> Result<bool, AppError> {
        let result: (bool,) =
            sqlx::query_as("SELECT EXISTS(SELECT 1 FROM parking_spots WHERE name = $1)")
                .bind(name)
                .fetch_one(&self.pool)
                .await?;

        Ok(result.0)
    }

    pub async fn list(
        &self,
        q: Option<String>,
        vehicle_type: Option<String>,
        available: Option<bool>,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<ParkingSpot>, AppError> {
        let spots = sqlx::query_as::<_, ParkingSpot>(
            r#"
            SELECT * FROM parking_spots
            WHERE ($1::text IS NULL OR name ILIKE '%' || $1 || '%' OR address ILIKE '%' || $1 || '%')
              AND ($2::text IS NULL OR vehicle_type = $2)
              AND ($3::boolean IS NULL OR is_available = $3)
            ORDER BY name ASC
            LIMIT $4 OFFSET $5
            "#,
        )
        .bind(q)
        .bind(vehicle_type)
        .bind(available)
        .bind(limit)
        .bind(offset)
        .fetch_all(&self.pool)
        .await?;

        Ok(spots)
    }

    /// Candidatas para recomendación: disponibles, opcionalmente por tipo
    pub async fn list_available(
        &self,
        vehicle_type: Option<String>,
    ) -> Result<Vec<ParkingSpot>, AppError> {
        let spots = sqlx::query_as::<_, ParkingSpot>(
            r#"
            SELECT * FROM parking_spots
            WHERE is_available = true
              AND ($1::text IS NULL OR vehicle_type = $1)
            "#,
        )
        .bind(vehicle_type)
        .fetch_all(&self.pool)
        .await?;

        Ok(spots)
    }

    pub async fn count(&self) -> Result<i64, AppError> {
        let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM parking_spots")
            .fetch_one(&self.pool)
            .await?;

        Ok(count)
    }
}
