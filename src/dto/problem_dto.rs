use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::models::problem_report::{ProblemNote, ProblemReport, ReportStatus};

/// Request para crear un reporte de problema
#[derive(Debug, Deserialize, Validate)]
pub struct CreateProblemReportRequest {
    pub reporter_id: Uuid,

    #[validate(length(min = 2, max = 50))]
    pub category: String,

    #[validate(length(min = 10, max = 2000))]
    pub description: String,

    #[validate(length(max = 50))]
    pub target_type: Option<String>,

    #[validate(length(max = 64))]
    pub target_id: Option<String>,
}

/// Request de cambio de estado de un reporte
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateReportStatusRequest {
    #[validate(length(min = 1))]
    pub status: String,
}

/// Request para añadir una nota de moderación
#[derive(Debug, Deserialize, Validate)]
pub struct AddNoteRequest {
    #[validate(length(min = 1, max = 2000))]
    pub body: String,
}

/// Filtros del listado de reportes
#[derive(Debug, Deserialize)]
pub struct ProblemFilters {
    pub status: Option<String>,
    pub category: Option<String>,
    pub limit: Option<i64>,
    pub offset: Option<i64>,
}

/// Response de reporte para la API
#[derive(Debug, Serialize)]
pub struct ProblemReportResponse {
    pub id: Uuid,
    pub reporter_id: Uuid,
    pub category: String,
    pub description: String,
    pub status: ReportStatus,
    pub target_type: Option<String>,
    pub target_id: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl From<ProblemReport> for ProblemReportResponse {
    fn from(r: ProblemReport) -> Self {
        Self {
            id: r.id,
            reporter_id: r.reporter_id,
            category: r.category,
            description: r.description,
            status: r.status,
            target_type: r.target_type,
            target_id: r.target_id,
            created_at: r.created_at,
            updated_at: r.updated_at,
        }
    }
}

/// Response de nota de moderación
#[derive(Debug, Serialize)]
pub struct ProblemNoteResponse {
    pub id: Uuid,
    pub report_id: Uuid,
    pub author_id: Uuid,
    pub body: String,
    pub created_at: DateTime<Utc>,
}

impl From<ProblemNote> for ProblemNoteResponse {
    fn from(n: ProblemNote) -> Self {
        Self {
            id: n.id,
            report_id: n.report_id,
            author_id: n.author_id,
            body: n.body,
            created_at: n.created_at,
        }
    }
}
