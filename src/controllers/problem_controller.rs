use sqlx::PgPool;
use uuid::Uuid;
use validator::Validate;

use crate::dto::common::ApiResponse;
use crate::dto::problem_dto::{
    AddNoteRequest, CreateProblemReportRequest, ProblemFilters, ProblemNoteResponse,
    ProblemReportResponse, UpdateReportStatusRequest,
};
use crate::models::audit_log::actions;
use crate::models::problem_report::ReportStatus;
use crate::repositories::audit_log_repository::{AuditLogRepository, NewAuditLog};
use crate::repositories::problem_report_repository::ProblemReportRepository;
use crate::repositories::user_repository::UserRepository;
use crate::utils::errors::AppError;

pub struct ProblemController {
    reports: ProblemReportRepository,
    users: UserRepository,
    audit: AuditLogRepository,
}

impl ProblemController {
    pub fn new(pool: PgPool) -> Self {
        Self {
            reports: ProblemReportRepository::new(pool.clone()),
            users: UserRepository::new(pool.clone()),
            audit: AuditLogRepository::new(pool),
        }
    }

    pub async fn create(
        &self,
        request: CreateProblemReportRequest,
    ) -> Result<ApiResponse<ProblemReportResponse>, AppError> {
        request.validate()?;

        if !self.users.exists(request.reporter_id).await? {
            return Err(AppError::NotFound("Usuario no encontrado".to_string()));
        }

        let report = self
            .reports
            .create(
                request.reporter_id,
                request.category,
                request.description,
                request.target_type,
                request.target_id,
            )
            .await?;

        tracing::info!(report_id = %report.id, "Reporte de problema creado");

        Ok(ApiResponse::success_with_message(
            report.into(),
            "Reporte creado exitosamente".to_string(),
        ))
    }

    pub async fn get_by_id(&self, id: Uuid) -> Result<ProblemReportResponse, AppError> {
        let report = self
            .reports
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Reporte no encontrado".to_string()))?;

        Ok(report.into())
    }

    pub async fn list(
        &self,
        filters: ProblemFilters,
    ) -> Result<Vec<ProblemReportResponse>, AppError> {
        let status = match filters.status.as_deref() {
            None => None,
            Some(raw) => Some(ReportStatus::parse(raw).ok_or_else(|| {
                AppError::BadRequest(format!("Estado de reporte desconocido: '{}'", raw))
            })?),
        };
        let limit = filters.limit.unwrap_or(50).clamp(1, 200);
        let offset = filters.offset.unwrap_or(0).max(0);

        let reports = self.reports.list(status, filters.category, limit, offset).await?;
        Ok(reports.into_iter().map(ProblemReportResponse::from).collect())
    }

    /// Cambiar el estado de un reporte; la mutación queda auditada
    pub async fn update_status(
        &self,
        actor_id: Uuid,
        report_id: Uuid,
        request: UpdateReportStatusRequest,
    ) -> Result<ApiResponse<ProblemReportResponse>, AppError> {
        request.validate()?;

        let new_status = ReportStatus::parse(&request.status).ok_or_else(|| {
            AppError::BadRequest(format!("Estado de reporte desconocido: '{}'", request.status))
        })?;

        let report = self
            .reports
            .find_by_id(report_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Reporte no encontrado".to_string()))?;

        if report.status.is_closed() {
            return Err(AppError::BadRequest(
                "El reporte ya está cerrado; no admite cambios de estado".to_string(),
            ));
        }

        let previous_status = report.status;
        let updated = self.reports.update_status(report_id, new_status).await?;

        self.audit
            .append(NewAuditLog {
                actor_id,
                action: actions::PROBLEM_STATUS_UPDATED.to_string(),
                target_type: "problem_report".to_string(),
                target_id: report_id.to_string(),
                before_value: Some(serde_json::json!({ "status": previous_status.as_str() })),
                after_value: Some(serde_json::json!({ "status": new_status.as_str() })),
                metadata: None,
            })
            .await?;

        Ok(ApiResponse::success_with_message(
            updated.into(),
            "Estado del reporte actualizado".to_string(),
        ))
    }

    pub async fn add_note(
        &self,
        author_id: Uuid,
        report_id: Uuid,
        request: AddNoteRequest,
    ) -> Result<ApiResponse<ProblemNoteResponse>, AppError> {
        request.validate()?;

        if self.reports.find_by_id(report_id).await?.is_none() {
            return Err(AppError::NotFound("Reporte no encontrado".to_string()));
        }

        let note = self.reports.add_note(report_id, author_id, request.body).await?;

        Ok(ApiResponse::success_with_message(
            note.into(),
            "Nota añadida exitosamente".to_string(),
        ))
    }

    pub async fn list_notes(&self, report_id: Uuid) -> Result<Vec<ProblemNoteResponse>, AppError> {
        if self.reports.find_by_id(report_id).await?.is_none() {
            return Err(AppError::NotFound("Reporte no encontrado".to_string()));
        }

        let notes = self.reports.list_notes(report_id).await?;
        Ok(notes.into_iter().map(ProblemNoteResponse::from).collect())
    }
}
