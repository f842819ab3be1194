use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    middleware,
    routing::{get, post},
    Extension, Json, Router,
};
use uuid::Uuid;

use crate::controllers::parking_controller::ParkingController;
use crate::dto::common::ApiResponse;
use crate::dto::parking_dto::{
    CreateParkingSpotRequest, ParkingSpotResponse, RecommendQuery, RecommendedSpotResponse,
    SpotFilters,
};
use crate::middleware::auth::{admin_auth_middleware, AuthenticatedAdmin};
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_parking_router(state: AppState) -> Router<AppState> {
    // El alta de plazas es una operación de admin; lectura y recomendación
    // son públicas para la app móvil.
    let admin_only = Router::new()
        .route("/", post(create_spot))
        .route_layer(middleware::from_fn_with_state(state, admin_auth_middleware));

    Router::new()
        .route("/", get(list_spots))
        .route("/recommend", get(recommend_spots))
        .route("/:id", get(get_spot))
        .merge(admin_only)
}

async fn create_spot(
    State(state): State<AppState>,
    Extension(admin): Extension<AuthenticatedAdmin>,
    Json(request): Json<CreateParkingSpotRequest>,
) -> Result<(StatusCode, Json<ApiResponse<ParkingSpotResponse>>), AppError> {
    let controller = ParkingController::new(state.pool.clone());
    let response = controller.create(admin.admin_id, request).await?;
    Ok((StatusCode::CREATED, Json(response)))
}

async fn get_spot(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<ParkingSpotResponse>, AppError> {
    let controller = ParkingController::new(state.pool.clone());
    let response = controller.get_by_id(id).await?;
    Ok(Json(response))
}

async fn list_spots(
    State(state): State<AppState>,
    Query(filters): Query<SpotFilters>,
) -> Result<Json<Vec<ParkingSpotResponse>>, AppError> {
    let controller = ParkingController::new(state.pool.clone());
    let response = controller.list(filters).await?;
    Ok(Json(response))
}

async fn recommend_spots(
    State(state): State<AppState>,
    Query(query): Query<RecommendQuery>,
) -> Result<Json<Vec<RecommendedSpotResponse>>, AppError> {
    let controller = ParkingController::new(state.pool.clone());
    let response = controller.recommend(query).await?;
    Ok(Json(response))
}
