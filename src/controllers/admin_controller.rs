use rust_decimal::Decimal;
use sqlx::PgPool;
use uuid::Uuid;
use validator::Validate;

use crate::dto::common::ApiResponse;
use crate::dto::settings_dto::{SettingsResponse, StatsResponse, UpdateSettingsRequest};
use crate::models::audit_log::actions;
use crate::models::booking::BookingStatus;
use crate::repositories::audit_log_repository::{AuditLogRepository, NewAuditLog};
use crate::repositories::booking_repository::BookingRepository;
use crate::repositories::parking_spot_repository::ParkingSpotRepository;
use crate::repositories::partner_repository::PartnerRepository;
use crate::repositories::problem_report_repository::ProblemReportRepository;
use crate::repositories::settings_repository::SettingsRepository;
use crate::utils::errors::AppError;

/// Operaciones del panel: configuración en caliente y estadísticas.
pub struct AdminController {
    settings: SettingsRepository,
    bookings: BookingRepository,
    spots: ParkingSpotRepository,
    partners: PartnerRepository,
    reports: ProblemReportRepository,
    audit: AuditLogRepository,
}

impl AdminController {
    pub fn new(pool: PgPool) -> Self {
        Self {
            settings: SettingsRepository::new(pool.clone()),
            bookings: BookingRepository::new(pool.clone()),
            spots: ParkingSpotRepository::new(pool.clone()),
            partners: PartnerRepository::new(pool.clone()),
            reports: ProblemReportRepository::new(pool.clone()),
            audit: AuditLogRepository::new(pool),
        }
    }

    pub async fn get_settings(&self) -> Result<SettingsResponse, AppError> {
        let settings = self.settings.get().await?;
        Ok(settings.into())
    }

    /// Actualización parcial de configuración, auditada con before/after
    pub async fn update_settings(
        &self,
        actor_id: Uuid,
        request: UpdateSettingsRequest,
    ) -> Result<ApiResponse<SettingsResponse>, AppError> {
        request.validate()?;

        if let Some(m) = request.overstay_rate_multiplier {
            if m < Decimal::ZERO {
                return Err(AppError::BadRequest(
                    "overstay_rate_multiplier no puede ser negativo".to_string(),
                ));
            }
        }
        if let Some(w) = request.best_score_distance_weight {
            if w < Decimal::ZERO {
                return Err(AppError::BadRequest(
                    "best_score_distance_weight no puede ser negativo".to_string(),
                ));
            }
        }

        let before = self.settings.get().await?;

        let updated = self
            .settings
            .update(
                request.grace_period_minutes,
                request.overstay_rate_multiplier,
                request.best_score_distance_weight,
            )
            .await?;

        self.audit
            .append(NewAuditLog {
                actor_id,
                action: actions::SETTINGS_UPDATED.to_string(),
                target_type: "app_settings".to_string(),
                target_id: "singleton".to_string(),
                before_value: Some(serde_json::json!({
                    "grace_period_minutes": before.grace_period_minutes,
                    "overstay_rate_multiplier": before.overstay_rate_multiplier,
                    "best_score_distance_weight": before.best_score_distance_weight,
                })),
                after_value: Some(serde_json::json!({
                    "grace_period_minutes": updated.grace_period_minutes,
                    "overstay_rate_multiplier": updated.overstay_rate_multiplier,
                    "best_score_distance_weight": updated.best_score_distance_weight,
                })),
                metadata: None,
            })
            .await?;

        tracing::info!(actor_id = %actor_id, "Configuración actualizada");

        Ok(ApiResponse::success_with_message(
            updated.into(),
            "Configuración actualizada exitosamente".to_string(),
        ))
    }

    pub async fn stats(&self) -> Result<StatsResponse, AppError> {
        let by_status = self.bookings.count_by_status().await?;

        let mut stats = StatsResponse {
            bookings_total: 0,
            bookings_pending: 0,
            bookings_active: 0,
            bookings_completed: 0,
            bookings_cancelled: 0,
            revenue: Decimal::ZERO,
            parking_spots: 0,
            partners_pending_kyc: 0,
            problem_reports_open: 0,
        };

        for (status, count) in by_status {
            stats.bookings_total += count;
            match status {
                BookingStatus::Pending => stats.bookings_pending = count,
                BookingStatus::Active => stats.bookings_active = count,
                BookingStatus::Completed => stats.bookings_completed = count,
                BookingStatus::Cancelled => stats.bookings_cancelled = count,
            }
        }

        stats.revenue = self.bookings.completed_revenue().await?;
        stats.parking_spots = self.spots.count().await?;
        stats.partners_pending_kyc = self.partners.count_pending_kyc().await?;
        stats.problem_reports_open = self.reports.count_open().await?;

        Ok(stats)
    }
}
