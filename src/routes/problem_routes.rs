use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    middleware,
    routing::{get, patch, post},
    Extension, Json, Router,
};
use uuid::Uuid;

use crate::controllers::problem_controller::ProblemController;
use crate::dto::common::ApiResponse;
use crate::dto::problem_dto::{
    AddNoteRequest, CreateProblemReportRequest, ProblemFilters, ProblemNoteResponse,
    ProblemReportResponse, UpdateReportStatusRequest,
};
use crate::middleware::auth::{admin_auth_middleware, AuthenticatedAdmin};
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_problem_router(state: AppState) -> Router<AppState> {
    // Crear reporte es público (app móvil); la moderación es de admins
    let moderation = Router::new()
        .route("/", get(list_reports))
        .route("/:id", get(get_report))
        .route("/:id/status", patch(update_report_status))
        .route("/:id/notes", post(add_note))
        .route("/:id/notes", get(list_notes))
        .route_layer(middleware::from_fn_with_state(state, admin_auth_middleware));

    Router::new().route("/", post(create_report)).merge(moderation)
}

async fn create_report(
    State(state): State<AppState>,
    Json(request): Json<CreateProblemReportRequest>,
) -> Result<(StatusCode, Json<ApiResponse<ProblemReportResponse>>), AppError> {
    let controller = ProblemController::new(state.pool.clone());
    let response = controller.create(request).await?;
    Ok((StatusCode::CREATED, Json(response)))
}

async fn get_report(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<ProblemReportResponse>, AppError> {
    let controller = ProblemController::new(state.pool.clone());
    let response = controller.get_by_id(id).await?;
    Ok(Json(response))
}

async fn list_reports(
    State(state): State<AppState>,
    Query(filters): Query<ProblemFilters>,
) -> Result<Json<Vec<ProblemReportResponse>>, AppError> {
    let controller = ProblemController::new(state.pool.clone());
    let response = controller.list(filters).await?;
    Ok(Json(response))
}

async fn update_report_status(
    State(state): State<AppState>,
    Extension(admin): Extension<AuthenticatedAdmin>,
    Path(id): Path<Uuid>,
    Json(request): Json<UpdateReportStatusRequest>,
) -> Result<Json<ApiResponse<ProblemReportResponse>>, AppError> {
    let controller = ProblemController::new(state.pool.clone());
    let response = controller.update_status(admin.admin_id, id, request).await?;
    Ok(Json(response))
}

async fn add_note(
    State(state): State<AppState>,
    Extension(admin): Extension<AuthenticatedAdmin>,
    Path(id): Path<Uuid>,
    Json(request): Json<AddNoteRequest>,
) -> Result<(StatusCode, Json<ApiResponse<ProblemNoteResponse>>), AppError> {
    let controller = ProblemController::new(state.pool.clone());
    let response = controller.add_note(admin.admin_id, id, request).await?;
    Ok((StatusCode::CREATED, Json(response)))
}

async fn list_notes(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<Vec<ProblemNoteResponse>>, AppError> {
    let controller = ProblemController::new(state.pool.clone());
    let response = controller.list_notes(id).await?;
    Ok(Json(response))
}
