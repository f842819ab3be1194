//! Modelo de AuditLog
//!
//! Registro inmutable de mutaciones administrativas. Solo existe el
//! camino de escritura (append) y el de lectura; nunca update/delete.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// Entrada del audit log - mapea exactamente a la tabla audit_logs
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct AuditLog {
    pub id: Uuid,
    pub actor_id: Uuid,
    pub action: String,
    pub target_type: String,
    pub target_id: String,
    pub before_value: Option<serde_json::Value>,
    pub after_value: Option<serde_json::Value>,
    pub metadata: Option<serde_json::Value>,
    pub created_at: DateTime<Utc>,
}

/// Acciones auditadas conocidas
pub mod actions {
    pub const PARTNER_KYC_APPROVED: &str = "PARTNER_KYC_APPROVED";
    pub const PARTNER_KYC_REJECTED: &str = "PARTNER_KYC_REJECTED";
    pub const PROBLEM_STATUS_UPDATED: &str = "PROBLEM_STATUS_UPDATED";
    pub const SETTINGS_UPDATED: &str = "SETTINGS_UPDATED";
    pub const PARKING_SPOT_CREATED: &str = "PARKING_SPOT_CREATED";
}
