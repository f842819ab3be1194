use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::models::admin::{Admin, AdminRole};

/// Request de login de administrador
#[derive(Debug, Deserialize, Validate)]
pub struct LoginRequest {
    #[validate(email)]
    pub email: String,

    #[validate(length(min = 8, max = 128))]
    pub password: String,
}

/// Response de admin (sin password_hash)
#[derive(Debug, Serialize)]
pub struct AdminResponse {
    pub id: Uuid,
    pub email: String,
    pub full_name: String,
    pub role: AdminRole,
    pub is_active: bool,
    pub created_at: DateTime<Utc>,
}

impl From<Admin> for AdminResponse {
    fn from(a: Admin) -> Self {
        Self {
            id: a.id,
            email: a.email,
            full_name: a.full_name,
            role: a.role,
            is_active: a.is_active,
            created_at: a.created_at,
        }
    }
}

/// Response de login
#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub token: String,
    pub admin: AdminResponse,
}
