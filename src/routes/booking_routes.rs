use axum::{
    extract::{Path, State},
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use uuid::Uuid;

use crate::controllers::booking_controller::BookingController;
use crate::dto::booking_dto::{
    BookingResponse, CreateBookingRequest, ExtendBookingRequest, ExtendBookingResponse,
    ScanRequest, ScanResponse,
};
use crate::dto::common::ApiResponse;
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_booking_router() -> Router<AppState> {
    Router::new()
        .route("/", post(create_booking))
        .route("/scan", post(scan_booking))
        .route("/:id", get(list_user_bookings))
        .route("/:id/extend", post(extend_booking))
}

async fn create_booking(
    State(state): State<AppState>,
    Json(request): Json<CreateBookingRequest>,
) -> Result<(StatusCode, Json<ApiResponse<BookingResponse>>), AppError> {
    let controller = BookingController::new(state.pool.clone());
    let response = controller.create(request).await?;
    Ok((StatusCode::CREATED, Json(response)))
}

/// GET /api/bookings/:id - reservas del usuario (id = user_id)
async fn list_user_bookings(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<Vec<BookingResponse>>, AppError> {
    let controller = BookingController::new(state.pool.clone());
    let response = controller.list_by_user(id).await?;
    Ok(Json(response))
}

async fn scan_booking(
    State(state): State<AppState>,
    Json(request): Json<ScanRequest>,
) -> Result<Json<ScanResponse>, AppError> {
    let controller = BookingController::new(state.pool.clone());
    let response = controller.scan(request).await?;
    Ok(Json(response))
}

async fn extend_booking(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(request): Json<ExtendBookingRequest>,
) -> Result<Json<ExtendBookingResponse>, AppError> {
    let controller = BookingController::new(state.pool.clone());
    let response = controller.extend(id, request).await?;
    Ok(Json(response))
}
