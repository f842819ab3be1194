use axum::{
    extract::{Query, State},
    middleware,
    routing::get,
    Json, Router,
};

use crate::controllers::audit_controller::AuditController;
use crate::dto::audit_dto::{AuditLogFilters, AuditLogResponse};
use crate::middleware::auth::admin_auth_middleware;
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_audit_router(state: AppState) -> Router<AppState> {
    Router::new()
        .route("/", get(list_audit_logs))
        .route_layer(middleware::from_fn_with_state(state, admin_auth_middleware))
}

async fn list_audit_logs(
    State(state): State<AppState>,
    Query(filters): Query<AuditLogFilters>,
) -> Result<Json<Vec<AuditLogResponse>>, AppError> {
    let controller = AuditController::new(state.pool.clone());
    let response = controller.list(filters).await?;
    Ok(Json(response))
}
