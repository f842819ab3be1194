use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use sqlx::PgPool;
use uuid::Uuid;

use crate::models::booking::{Booking, BookingStatus};
use crate::utils::errors::{map_booking_insert_error, AppError};

pub struct BookingRepository {
    pool: PgPool,
}

impl BookingRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Crear una reserva comprobando solapamiento dentro de una transacción.
    ///
    /// Se bloquea la fila de la plaza (FOR UPDATE) para que dos peticiones
    /// concurrentes sobre la misma plaza serialicen el chequeo; la
    /// restricción de exclusión del schema actúa de red de seguridad.
    pub async fn create_checked(
        &self,
        user_id: Uuid,
        parking_spot_id: Uuid,
        start_time: DateTime<Utc>,
        end_time: DateTime<Utc>,
        total_price: Decimal,
    ) -> Result<Booking, AppError> {
        let mut tx = self.pool.begin().await?;

        let spot_row: Option<(Uuid,)> =
            sqlx::query_as("SELECT id FROM parking_spots WHERE id = $1 FOR UPDATE")
                .bind(parking_spot_id)
                .fetch_optional(&mut *tx)
                .await?;

        if spot_row.is_none() {
            return Err(AppError::NotFound("Plaza de aparcamiento no encontrada".to_string()));
        }

        // Solapamiento semiabierto sobre estados que ocupan la plaza
        let (overlaps,): (bool,) = sqlx::query_as(
            r#"
            SELECT EXISTS(
                SELECT 1 FROM bookings
                WHERE parking_spot_id = $1
                  AND status IN ('pending', 'active')
                  AND start_time < $3
                  AND end_time > $2
            )
            "#,
        )
        .bind(parking_spot_id)
        .bind(start_time)
        .bind(end_time)
        .fetch_one(&mut *tx)
        .await?;

        if overlaps {
            return Err(AppError::Conflict(
                "La plaza ya tiene una reserva en ese horario".to_string(),
            ));
        }

        let booking = sqlx::query_as::<_, Booking>(
            r#"
            INSERT INTO bookings (
                id, user_id, parking_spot_id, start_time, end_time,
                total_price, status, payment_status, created_at
            )
            VALUES ($1, $2, $3, $4, $5, $6, 'pending', 'paid', $7)
            RETURNING *
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(user_id)
        .bind(parking_spot_id)
        .bind(start_time)
        .bind(end_time)
        .bind(total_price)
        .bind(Utc::now())
        .fetch_one(&mut *tx)
        .await
        .map_err(map_booking_insert_error)?;

        tx.commit().await?;

        Ok(booking)
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<Booking>, AppError> {
        let booking = sqlx::query_as::<_, Booking>("SELECT * FROM bookings WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(booking)
    }

    pub async fn find_by_user(&self, user_id: Uuid) -> Result<Vec<Booking>, AppError> {
        let bookings = sqlx::query_as::<_, Booking>(
            "SELECT * FROM bookings WHERE user_id = $1 ORDER BY created_at DESC",
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await?;

        Ok(bookings)
    }

    /// Check-in: fija actual_check_in_time y pasa a active
    pub async fn check_in(&self, id: Uuid, at: DateTime<Utc>) -> Result<Booking, AppError> {
        let booking = sqlx::query_as::<_, Booking>(
            r#"
            UPDATE bookings
            SET actual_check_in_time = $2, status = 'active'
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(at)
        .fetch_one(&self.pool)
        .await?;

        Ok(booking)
    }

    /// Check-out: fija actual_check_out_time, recargo si lo hay, y cierra
    /// la reserva simulando el cobro automático.
    pub async fn check_out(
        &self,
        id: Uuid,
        at: DateTime<Utc>,
        extra_fee: Option<Decimal>,
    ) -> Result<Booking, AppError> {
        let booking = sqlx::query_as::<_, Booking>(
            r#"
            UPDATE bookings
            SET actual_check_out_time = $2,
                extra_fee = $3,
                status = 'completed',
                payment_status = 'paid'
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(at)
        .bind(extra_fee)
        .fetch_one(&self.pool)
        .await?;

        Ok(booking)
    }

    /// Extender una reserva con el mismo guard de solapamiento que la
    /// creación: FOR UPDATE sobre la plaza y chequeo del intervalo nuevo
    /// excluyendo la propia reserva, en una transacción.
    pub async fn extend_checked(
        &self,
        id: Uuid,
        parking_spot_id: Uuid,
        start_time: DateTime<Utc>,
        new_end_time: DateTime<Utc>,
        new_total_price: Decimal,
    ) -> Result<Booking, AppError> {
        let mut tx = self.pool.begin().await?;

        let spot_row: Option<(Uuid,)> =
            sqlx::query_as("SELECT id FROM parking_spots WHERE id = $1 FOR UPDATE")
                .bind(parking_spot_id)
                .fetch_optional(&mut *tx)
                .await?;

        if spot_row.is_none() {
            return Err(AppError::NotFound("Plaza de aparcamiento no encontrada".to_string()));
        }

        let (overlaps,): (bool,) = sqlx::query_as(
            r#"
            SELECT EXISTS(
                SELECT 1 FROM bookings
                WHERE parking_spot_id = $1
                  AND id <> $2
                  AND status IN ('pending', 'active')
                  AND start_time < $4
                  AND end_time > $3
            )
            "#,
        )
        .bind(parking_spot_id)
        .bind(id)
        .bind(start_time)
        .bind(new_end_time)
        .fetch_one(&mut *tx)
        .await?;

        if overlaps {
            return Err(AppError::Conflict(
                "La plaza ya tiene una reserva en ese horario".to_string(),
            ));
        }

        let booking = sqlx::query_as::<_, Booking>(
            r#"
            UPDATE bookings
            SET end_time = $2, total_price = $3
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(new_end_time)
        .bind(new_total_price)
        .fetch_one(&mut *tx)
        .await
        .map_err(map_booking_insert_error)?;

        tx.commit().await?;

        Ok(booking)
    }

    /// Plazas ocupadas ahora mismo por una reserva pending/active
    pub async fn occupied_spot_ids(&self, at: DateTime<Utc>) -> Result<Vec<Uuid>, AppError> {
        let rows: Vec<(Uuid,)> = sqlx::query_as(
            r#"
            SELECT DISTINCT parking_spot_id FROM bookings
            WHERE status IN ('pending', 'active')
              AND start_time <= $1
              AND end_time > $1
            "#,
        )
        .bind(at)
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(|(id,)| id).collect())
    }

    pub async fn count_by_status(&self) -> Result<Vec<(BookingStatus, i64)>, AppError> {
        let rows: Vec<(BookingStatus, i64)> =
            sqlx::query_as("SELECT status, COUNT(*) FROM bookings GROUP BY status")
                .fetch_all(&self.pool)
                .await?;

        Ok(rows)
    }

    /// Ingresos de reservas completadas (precio base + recargos)
    pub async fn completed_revenue(&self) -> Result<Decimal, AppError> {
        let (revenue,): (Decimal,) = sqlx::query_as(
            r#"
            SELECT COALESCE(SUM(total_price + COALESCE(extra_fee, 0)), 0)
            FROM bookings
            WHERE status = 'completed'
            "#,
        )
        .fetch_one(&self.pool)
        .await?;

        Ok(revenue)
    }
}
