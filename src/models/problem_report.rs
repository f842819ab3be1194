//! Modelo de ProblemReport
//!
//! Reportes de moderación y sus notas de seguimiento.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::{FromRow, Type};
use uuid::Uuid;

/// Estado del reporte - mapea al ENUM report_status
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Type, PartialEq, Eq)]
#[sqlx(type_name = "report_status", rename_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum ReportStatus {
    Open,
    InReview,
    Resolved,
    Dismissed,
}

impl ReportStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ReportStatus::Open => "open",
            ReportStatus::InReview => "in_review",
            ReportStatus::Resolved => "resolved",
            ReportStatus::Dismissed => "dismissed",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "open" => Some(ReportStatus::Open),
            "in_review" => Some(ReportStatus::InReview),
            "resolved" => Some(ReportStatus::Resolved),
            "dismissed" => Some(ReportStatus::Dismissed),
            _ => None,
        }
    }

    /// resolved/dismissed cierran el reporte; desde ahí no hay vuelta
    pub fn is_closed(&self) -> bool {
        matches!(self, ReportStatus::Resolved | ReportStatus::Dismissed)
    }
}

/// ProblemReport principal - mapea exactamente a la tabla problem_reports
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct ProblemReport {
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

/// Nota de moderación - mapea exactamente a la tabla problem_notes
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct ProblemNote {
    pub id: Uuid,
    pub report_id: Uuid,
    pub author_id: Uuid,
    pub body: String,
    pub created_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_parse_roundtrip() {
        for s in ["open", "in_review", "resolved", "dismissed"] {
            assert_eq!(ReportStatus::parse(s).unwrap().as_str(), s);
        }
        assert_eq!(ReportStatus::parse("closed"), None);
    }

    #[test]
    fn test_closed_states() {
        assert!(ReportStatus::Resolved.is_closed());
        assert!(ReportStatus::Dismissed.is_closed());
        assert!(!ReportStatus::Open.is_closed());
        assert!(!ReportStatus::InReview.is_closed());
    }
}
