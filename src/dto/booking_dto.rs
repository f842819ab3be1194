use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::models::booking::{Booking, BookingStatus, PaymentStatus};

/// Request para crear una reserva.
///
/// `parking_spot_id` acepta el UUID de la plaza o su nombre registrado
/// ("A1"). Los nombres desconocidos se rechazan: las plazas se registran
/// explícitamente, nunca se crean al vuelo desde una reserva.
#[derive(Debug, Deserialize, Validate)]
pub struct CreateBookingRequest {
    pub user_id: Uuid,

    #[validate(length(min = 1, max = 64))]
    pub parking_spot_id: String,

    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,

    pub total_price: Decimal,
}

/// Request del evento de escaneo (QR)
#[derive(Debug, Deserialize, Validate)]
pub struct ScanRequest {
    pub booking_id: Uuid,
}

/// Request para extender una reserva
#[derive(Debug, Deserialize, Validate)]
pub struct ExtendBookingRequest {
    #[validate(range(min = 1, max = 168))]
    pub extra_hours: i64,
}

/// Response de reserva para la API
#[derive(Debug, Serialize)]
pub struct BookingResponse {
    pub id: Uuid,
    pub user_id: Uuid,
    pub parking_spot_id: Uuid,
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
    pub total_price: Decimal,
    pub status: BookingStatus,
    pub payment_status: PaymentStatus,
    pub actual_check_in_time: Option<DateTime<Utc>>,
    pub actual_check_out_time: Option<DateTime<Utc>>,
    pub extra_fee: Option<Decimal>,
    pub created_at: DateTime<Utc>,
}

impl From<Booking> for BookingResponse {
    fn from(b: Booking) -> Self {
        Self {
            id: b.id,
            user_id: b.user_id,
            parking_spot_id: b.parking_spot_id,
            start_time: b.start_time,
            end_time: b.end_time,
            total_price: b.total_price,
            status: b.status,
            payment_status: b.payment_status,
            actual_check_in_time: b.actual_check_in_time,
            actual_check_out_time: b.actual_check_out_time,
            extra_fee: b.extra_fee,
            created_at: b.created_at,
        }
    }
}

/// Response del escaneo: check-in o check-out con desglose de recargo
#[derive(Debug, Serialize)]
pub struct ScanResponse {
    pub message: String,
    #[serde(rename = "type")]
    pub scan_type: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub extra_fee: Option<Decimal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub overstay_hours: Option<i64>,
    pub booking: BookingResponse,
}

/// Response de la extensión
#[derive(Debug, Serialize)]
pub struct ExtendBookingResponse {
    pub message: String,
    pub additional_cost: Decimal,
    pub booking: BookingResponse,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extend_request_rejects_zero_hours() {
        let req = ExtendBookingRequest { extra_hours: 0 };
        assert!(req.validate().is_err());

        let req = ExtendBookingRequest { extra_hours: 2 };
        assert!(req.validate().is_ok());
    }

    #[test]
    fn test_scan_response_type_field_name() {
        let now = Utc::now();
        let booking = Booking {
            id: Uuid::new_v4(),
            user_id: Uuid::new_v4(),
            parking_spot_id: Uuid::new_v4(),
            start_time: now,
            end_time: now,
            total_price: Decimal::new(400, 0),
            status: BookingStatus::Active,
            payment_status: PaymentStatus::Paid,
            actual_check_in_time: Some(now),
            actual_check_out_time: None,
            extra_fee: None,
            created_at: now,
        };
        let resp = ScanResponse {
            message: "ok".to_string(),
            scan_type: "check-in".to_string(),
            extra_fee: None,
            overstay_hours: None,
            booking: booking.into(),
        };
        let value = serde_json::to_value(&resp).unwrap();
        assert_eq!(value["type"], "check-in");
        assert!(value.get("extra_fee").is_none());
        assert_eq!(value["booking"]["status"], "active");
    }
}
