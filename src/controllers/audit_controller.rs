use sqlx::PgPool;

use crate::dto::audit_dto::{AuditLogFilters, AuditLogResponse};
use crate::repositories::audit_log_repository::{AuditLogRepository, DEFAULT_AUDIT_LIMIT};
use crate::utils::errors::AppError;

pub struct AuditController {
    audit: AuditLogRepository,
}

impl AuditController {
    pub fn new(pool: PgPool) -> Self {
        Self {
            audit: AuditLogRepository::new(pool),
        }
    }

    pub async fn list(&self, filters: AuditLogFilters) -> Result<Vec<AuditLogResponse>, AppError> {
        if let (Some(from), Some(to)) = (filters.from, filters.to) {
            if from > to {
                return Err(AppError::BadRequest(
                    "'from' debe ser anterior a 'to'".to_string(),
                ));
            }
        }

        let limit = filters.limit.unwrap_or(DEFAULT_AUDIT_LIMIT).clamp(1, 1000);

        let logs = self
            .audit
            .list(filters.action, filters.target_type, filters.from, filters.to, limit)
            .await?;

        Ok(logs.into_iter().map(AuditLogResponse::from).collect())
    }
}
