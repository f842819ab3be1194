use axum::{extract::State, http::StatusCode, routing::post, Json, Router};

use crate::controllers::partner_controller::PartnerController;
use crate::dto::common::ApiResponse;
use crate::dto::partner_dto::{OnboardPartnerRequest, PartnerResponse};
use crate::state::AppState;
use crate::utils::errors::AppError;

pub fn create_partner_router() -> Router<AppState> {
    Router::new().route("/onboard", post(onboard_partner))
}

async fn onboard_partner(
    State(state): State<AppState>,
    Json(request): Json<OnboardPartnerRequest>,
) -> Result<(StatusCode, Json<ApiResponse<PartnerResponse>>), AppError> {
    let controller = PartnerController::new(state.pool.clone());
    let response = controller.onboard(request).await?;
    Ok((StatusCode::CREATED, Json(response)))
}
