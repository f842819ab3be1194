//! Modelo de Partner
//!
//! Socios del marketplace (garajes/mecánicos) con su flujo de KYC.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::{FromRow, Type};
use uuid::Uuid;

/// Estado del KYC - mapea al ENUM kyc_status
#[derive(Debug, Clone, Copy, Serialize, Deserialize, Type, PartialEq, Eq)]
#[sqlx(type_name = "kyc_status")]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum KycStatus {
    #[sqlx(rename = "PENDING")]
    Pending,
    #[sqlx(rename = "APPROVED")]
    Approved,
    #[sqlx(rename = "REJECTED")]
    Rejected,
}

impl KycStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            KycStatus::Pending => "PENDING",
            KycStatus::Approved => "APPROVED",
            KycStatus::Rejected => "REJECTED",
        }
    }
}

/// Documento KYC adjunto al partner (almacenado como jsonb)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct KycDocument {
    pub doc_type: String,
    pub url: String,
    pub status: String,
}

/// Partner principal - mapea exactamente a la tabla partners
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Partner {
    pub id: Uuid,
    pub business_name: String,
    pub contact_email: String,
    pub phone: Option<String>,
    pub kyc_status: KycStatus,
    pub is_active: bool,
    pub documents: sqlx::types::Json<Vec<KycDocument>>,
    pub created_at: DateTime<Utc>,
}
