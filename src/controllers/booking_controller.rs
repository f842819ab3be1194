use sqlx::PgPool;
use uuid::Uuid;
use validator::Validate;

use crate::dto::booking_dto::{
    BookingResponse, CreateBookingRequest, ExtendBookingRequest, ExtendBookingResponse,
    ScanRequest, ScanResponse,
};
use crate::dto::common::ApiResponse;
use crate::models::booking::Booking;
use crate::models::parking_spot::ParkingSpot;
use crate::repositories::booking_repository::BookingRepository;
use crate::repositories::parking_spot_repository::ParkingSpotRepository;
use crate::repositories::settings_repository::SettingsRepository;
use crate::repositories::user_repository::UserRepository;
use crate::services::pricing;
use crate::utils::errors::AppError;

/// Transición que corresponde al siguiente escaneo de una reserva
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScanTransition {
    CheckIn,
    CheckOut,
}

/// Decidir la transición del escaneo. Máquina de dos pasos estricta:
/// check-in, check-out, y a partir de ahí siempre error sin mutar nada.
pub fn next_scan_transition(booking: &Booking) -> Result<ScanTransition, AppError> {
    if booking.actual_check_in_time.is_none() {
        if booking.status.is_terminal() {
            return Err(AppError::BadRequest(
                "La reserva está completada o cancelada; no admite check-in".to_string(),
            ));
        }
        return Ok(ScanTransition::CheckIn);
    }

    if booking.actual_check_out_time.is_none() {
        return Ok(ScanTransition::CheckOut);
    }

    Err(AppError::BadRequest(
        "La reserva ya tiene check-out registrado".to_string(),
    ))
}

pub struct BookingController {
    bookings: BookingRepository,
    spots: ParkingSpotRepository,
    users: UserRepository,
    settings: SettingsRepository,
}

impl BookingController {
    pub fn new(pool: PgPool) -> Self {
        Self {
            bookings: BookingRepository::new(pool.clone()),
            spots: ParkingSpotRepository::new(pool.clone()),
            users: UserRepository::new(pool.clone()),
            settings: SettingsRepository::new(pool),
        }
    }

    /// Resolver el identificador de plaza: UUID directo o nombre registrado.
    /// Los nombres desconocidos se rechazan; las plazas no se crean al vuelo.
    async fn resolve_spot(&self, identifier: &str) -> Result<ParkingSpot, AppError> {
        if let Ok(id) = Uuid::parse_str(identifier) {
            return self
                .spots
                .find_by_id(id)
                .await?
                .ok_or_else(|| AppError::NotFound("Plaza de aparcamiento no encontrada".to_string()));
        }

        self.spots.find_by_name(identifier.trim()).await?.ok_or_else(|| {
            AppError::NotFound(format!(
                "La plaza '{}' no está registrada; regístrala antes de reservar",
                identifier
            ))
        })
    }

    pub async fn create(
        &self,
        request: CreateBookingRequest,
    ) -> Result<ApiResponse<BookingResponse>, AppError> {
        request.validate()?;

        if request.start_time >= request.end_time {
            return Err(AppError::BadRequest(
                "start_time debe ser anterior a end_time".to_string(),
            ));
        }

        if request.total_price < rust_decimal::Decimal::ZERO {
            return Err(AppError::BadRequest(
                "total_price no puede ser negativo".to_string(),
            ));
        }

        let spot = self.resolve_spot(&request.parking_spot_id).await?;

        if !spot.is_available {
            return Err(AppError::BadRequest(
                "La plaza no está disponible para reservas".to_string(),
            ));
        }

        if !self.users.exists(request.user_id).await? {
            return Err(AppError::NotFound("Usuario no encontrado".to_string()));
        }

        let booking = self
            .bookings
            .create_checked(
                request.user_id,
                spot.id,
                request.start_time,
                request.end_time,
                request.total_price,
            )
            .await?;

        tracing::info!(
            booking_id = %booking.id,
            spot = %spot.name,
            "Reserva creada"
        );

        Ok(ApiResponse::success_with_message(
            booking.into(),
            "Reserva creada exitosamente".to_string(),
        ))
    }

    pub async fn list_by_user(&self, user_id: Uuid) -> Result<Vec<BookingResponse>, AppError> {
        let bookings = self.bookings.find_by_user(user_id).await?;
        Ok(bookings.into_iter().map(BookingResponse::from).collect())
    }

    /// Procesar un escaneo QR: primer escaneo = check-in, segundo = check-out
    /// con cálculo de recargo, tercero en adelante = error.
    pub async fn scan(&self, request: ScanRequest) -> Result<ScanResponse, AppError> {
        let booking = self
            .bookings
            .find_by_id(request.booking_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Reserva no encontrada".to_string()))?;

        let now = chrono::Utc::now();

        match next_scan_transition(&booking)? {
            ScanTransition::CheckIn => {
                let updated = self.bookings.check_in(booking.id, now).await?;
                tracing::info!(booking_id = %booking.id, "Check-in registrado");

                Ok(ScanResponse {
                    message: "Check-in registrado".to_string(),
                    scan_type: "check-in".to_string(),
                    extra_fee: None,
                    overstay_hours: None,
                    booking: updated.into(),
                })
            }
            ScanTransition::CheckOut => {
                let spot = self
                    .spots
                    .find_by_id(booking.parking_spot_id)
                    .await?
                    .ok_or_else(|| {
                        AppError::Internal("La plaza de la reserva ya no existe".to_string())
                    })?;
                let settings = self.settings.get().await?;

                let charge = pricing::overstay_charge(
                    booking.end_time,
                    now,
                    settings.grace_period(),
                    spot.price_per_hour,
                    settings.overstay_rate_multiplier,
                );

                let (extra_fee, overstay_hours) = match &charge {
                    Some(c) => (Some(c.fee), Some(c.hours)),
                    None => (None, None),
                };

                let updated = self.bookings.check_out(booking.id, now, extra_fee).await?;
                tracing::info!(
                    booking_id = %booking.id,
                    extra_fee = ?extra_fee,
                    "Check-out registrado"
                );

                Ok(ScanResponse {
                    message: match extra_fee {
                        Some(_) => "Check-out registrado con recargo por exceso".to_string(),
                        None => "Check-out registrado".to_string(),
                    },
                    scan_type: "check-out".to_string(),
                    extra_fee,
                    overstay_hours,
                    booking: updated.into(),
                })
            }
        }
    }

    /// Extender una reserva pendiente o activa
    pub async fn extend(
        &self,
        booking_id: Uuid,
        request: ExtendBookingRequest,
    ) -> Result<ExtendBookingResponse, AppError> {
        request.validate()?;

        let booking = self
            .bookings
            .find_by_id(booking_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Reserva no encontrada".to_string()))?;

        if booking.status.is_terminal() {
            return Err(AppError::BadRequest(
                "Solo se pueden extender reservas pendientes o activas".to_string(),
            ));
        }

        let spot = self
            .spots
            .find_by_id(booking.parking_spot_id)
            .await?
            .ok_or_else(|| AppError::Internal("La plaza de la reserva ya no existe".to_string()))?;

        let additional_cost = pricing::extension_cost(request.extra_hours, spot.price_per_hour);
        let new_end_time = booking.end_time + chrono::Duration::hours(request.extra_hours);
        let new_total_price = booking.total_price + additional_cost;

        let updated = self
            .bookings
            .extend_checked(
                booking.id,
                booking.parking_spot_id,
                booking.start_time,
                new_end_time,
                new_total_price,
            )
            .await?;

        tracing::info!(
            booking_id = %booking.id,
            extra_hours = request.extra_hours,
            "Reserva extendida"
        );

        Ok(ExtendBookingResponse {
            message: "Reserva extendida exitosamente".to_string(),
            additional_cost,
            booking: updated.into(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::booking::{BookingStatus, PaymentStatus};
    use chrono::Utc;
    use rust_decimal::Decimal;

    fn booking(
        status: BookingStatus,
        check_in: Option<chrono::DateTime<Utc>>,
        check_out: Option<chrono::DateTime<Utc>>,
    ) -> Booking {
        let now = Utc::now();
        Booking {
            id: Uuid::new_v4(),
            user_id: Uuid::new_v4(),
            parking_spot_id: Uuid::new_v4(),
            start_time: now,
            end_time: now + chrono::Duration::hours(2),
            total_price: Decimal::new(400, 0),
            status,
            payment_status: PaymentStatus::Paid,
            actual_check_in_time: check_in,
            actual_check_out_time: check_out,
            extra_fee: None,
            created_at: now,
        }
    }

    #[test]
    fn test_first_scan_is_check_in() {
        let b = booking(BookingStatus::Pending, None, None);
        assert_eq!(next_scan_transition(&b).unwrap(), ScanTransition::CheckIn);
    }

    #[test]
    fn test_second_scan_is_check_out() {
        let b = booking(BookingStatus::Active, Some(Utc::now()), None);
        assert_eq!(next_scan_transition(&b).unwrap(), ScanTransition::CheckOut);
    }

    #[test]
    fn test_third_scan_is_rejected() {
        let b = booking(BookingStatus::Completed, Some(Utc::now()), Some(Utc::now()));
        assert!(next_scan_transition(&b).is_err());
    }

    #[test]
    fn test_check_in_rejected_on_cancelled_booking() {
        let b = booking(BookingStatus::Cancelled, None, None);
        assert!(next_scan_transition(&b).is_err());
    }

    #[test]
    fn test_check_in_rejected_on_completed_booking() {
        let b = booking(BookingStatus::Completed, None, None);
        assert!(next_scan_transition(&b).is_err());
    }
}
