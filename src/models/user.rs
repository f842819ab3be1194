//! Modelo de User
//!
//! Perfiles de usuario final referenciados por reservas y reportes.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// User principal - mapea exactamente a la tabla users
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct User {
    pub id: Uuid,
    pub full_name: String,
    pub email: String,
    pub phone: Option<String>,
    pub vehicle_type: Option<String>,
    pub created_at: DateTime<Utc>,
}
