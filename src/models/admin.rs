//! Modelo de Admin
//!
//! Cuentas del panel de administración.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::{FromRow, Type};
use uuid::Uuid;

/// Rol del administrador - mapea al ENUM admin_role
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Type, PartialEq, Eq)]
#[sqlx(type_name = "admin_role")]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AdminRole {
    #[sqlx(rename = "SUPER_ADMIN")]
    SuperAdmin,
    #[sqlx(rename = "SUB_ADMIN")]
    SubAdmin,
}

impl AdminRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            AdminRole::SuperAdmin => "SUPER_ADMIN",
            AdminRole::SubAdmin => "SUB_ADMIN",
        }
    }

}

/// Admin principal - mapea exactamente a la tabla admins
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Admin {
    pub id: Uuid,
    pub email: String,
    pub password_hash: String,
    pub full_name: String,
    pub role: AdminRole,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_wire_names() {
        assert_eq!(AdminRole::SuperAdmin.as_str(), "SUPER_ADMIN");
        assert_eq!(AdminRole::SubAdmin.as_str(), "SUB_ADMIN");
        let value = serde_json::to_value(AdminRole::SuperAdmin).unwrap();
        assert_eq!(value, "SUPER_ADMIN");
    }
}
