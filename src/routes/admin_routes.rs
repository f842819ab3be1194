use axum::{
    extract::{Path, Query, State},
    middleware,
    routing::{get, put},
    Extension, Json, Router,
};
use uuid::Uuid;

use crate::controllers::admin_controller::AdminController;
use crate::controllers::auth_controller::AuthController;
use crate::controllers::partner_controller::PartnerController;
use crate::dto::auth_dto::{AdminResponse, LoginRequest, LoginResponse};
use crate::dto::common::ApiResponse;
use crate::dto::partner_dto::{PartnerFilters, PartnerResponse, UpdateKycRequest};
use crate::dto::settings_dto::{SettingsResponse, StatsResponse, UpdateSettingsRequest};
use crate::middleware::auth::{admin_auth_middleware, require_super_admin, AuthenticatedAdmin};
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_admin_router(state: AppState) -> Router<AppState> {
    // Solo el login queda fuera del middleware de autenticación
    let protected = Router::new()
        .route("/auth/me", get(me))
        .route("/partners", get(list_partners))
        .route("/partners/:id", get(get_partner))
        .route("/partners/:id/kyc", put(update_partner_kyc))
        .route("/config", get(get_settings).put(update_settings))
        .route("/stats", get(get_stats))
        .route_layer(middleware::from_fn_with_state(state, admin_auth_middleware));

    Router::new()
        .route("/auth/login", axum::routing::post(login))
        .merge(protected)
}

async fn login(
    State(state): State<AppState>,
    Json(request): Json<LoginRequest>,
) -> Result<Json<LoginResponse>, AppError> {
    let controller = AuthController::new(state.pool.clone(), state.config.clone());
    let response = controller.login(request).await?;
    Ok(Json(response))
}

async fn me(
    State(state): State<AppState>,
    Extension(admin): Extension<AuthenticatedAdmin>,
) -> Result<Json<AdminResponse>, AppError> {
    let controller = AuthController::new(state.pool.clone(), state.config.clone());
    let response = controller.me(admin.admin_id).await?;
    Ok(Json(response))
}

async fn list_partners(
    State(state): State<AppState>,
    Query(filters): Query<PartnerFilters>,
) -> Result<Json<Vec<PartnerResponse>>, AppError> {
    let controller = PartnerController::new(state.pool.clone());
    let response = controller.list(filters).await?;
    Ok(Json(response))
}

async fn get_partner(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<PartnerResponse>, AppError> {
    let controller = PartnerController::new(state.pool.clone());
    let response = controller.get_by_id(id).await?;
    Ok(Json(response))
}

async fn update_partner_kyc(
    State(state): State<AppState>,
    Extension(admin): Extension<AuthenticatedAdmin>,
    Path(id): Path<Uuid>,
    Json(request): Json<UpdateKycRequest>,
) -> Result<Json<ApiResponse<PartnerResponse>>, AppError> {
    let controller = PartnerController::new(state.pool.clone());
    let response = controller.update_kyc(admin.admin_id, id, request).await?;
    Ok(Json(response))
}

async fn get_settings(
    State(state): State<AppState>,
) -> Result<Json<SettingsResponse>, AppError> {
    let controller = AdminController::new(state.pool.clone());
    let response = controller.get_settings().await?;
    Ok(Json(response))
}

async fn update_settings(
    State(state): State<AppState>,
    Extension(admin): Extension<AuthenticatedAdmin>,
    Json(request): Json<UpdateSettingsRequest>,
) -> Result<Json<ApiResponse<SettingsResponse>>, AppError> {
    // Cambiar tarifas y periodo de gracia afecta a cobros en curso
    require_super_admin(&admin)?;

    let controller = AdminController::new(state.pool.clone());
    let response = controller.update_settings(admin.admin_id, request).await?;
    Ok(Json(response))
}

async fn get_stats(
    State(state): State<AppState>,
) -> Result<Json<StatsResponse>, AppError> {
    let controller = AdminController::new(state.pool.clone());
    let response = controller.stats().await?;
    Ok(Json(response))
}
