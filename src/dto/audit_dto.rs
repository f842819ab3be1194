use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::audit_log::AuditLog;

/// Filtros de lectura del audit log
#[derive(Debug, Deserialize)]
pub struct AuditLogFilters {
    pub action: Option<String>,
    pub target_type: Option<String>,
    pub from: Option<DateTime<Utc>>,
    pub to: Option<DateTime<Utc>>,
    /// Máximo de entradas devueltas (por defecto 100)
    pub limit: Option<i64>,
}

/// Response de entrada de auditoría
#[derive(Debug, Serialize)]
pub struct AuditLogResponse {
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

impl From<AuditLog> for AuditLogResponse {
    fn from(l: AuditLog) -> Self {
        Self {
            id: l.id,
            actor_id: l.actor_id,
            action: l.action,
            target_type: l.target_type,
            target_id: l.target_id,
            before_value: l.before_value,
            after_value: l.after_value,
            metadata: l.metadata,
            created_at: l.created_at,
        }
    }
}
