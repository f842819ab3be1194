use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

use crate::models::partner::{KycDocument, KycStatus, Partner};

/// Documento aportado durante el onboarding
#[derive(Debug, Deserialize, Validate)]
pub struct KycDocumentRequest {
    #[validate(length(min = 2, max = 50))]
    pub doc_type: String,

    #[validate(url)]
    pub url: String,
}

/// Request de onboarding de partner
#[derive(Debug, Deserialize, Validate)]
pub struct OnboardPartnerRequest {
    #[validate(length(min = 2, max = 150))]
    pub business_name: String,

    #[validate(email)]
    pub contact_email: String,

    #[validate(length(min = 6, max = 20))]
    pub phone: Option<String>,

    #[validate]
    pub documents: Vec<KycDocumentRequest>,
}

/// Request de decisión KYC (solo APPROVED o REJECTED)
#[derive(Debug, Deserialize, Validate)]
pub struct UpdateKycRequest {
    #[validate(length(min = 1))]
    pub status: String,
}

/// Filtros del listado de partners
#[derive(Debug, Deserialize)]
pub struct PartnerFilters {
    pub kyc_status: Option<String>,
    pub limit: Option<i64>,
    pub offset: Option<i64>,
}

/// Response de partner para la API
#[derive(Debug, Serialize)]
pub struct PartnerResponse {
    pub id: Uuid,
    pub business_name: String,
    pub contact_email: String,
    pub phone: Option<String>,
    pub kyc_status: KycStatus,
    pub is_active: bool,
    pub documents: Vec<KycDocument>,
    pub created_at: DateTime<Utc>,
}

impl From<Partner> for PartnerResponse {
    fn from(p: Partner) -> Self {
        Self {
            id: p.id,
            business_name: p.business_name,
            contact_email: p.contact_email,
            phone: p.phone,
            kyc_status: p.kyc_status,
            is_active: p.is_active,
            documents: p.documents.0,
            created_at: p.created_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_onboard_request_validates_nested_documents() {
        let req = OnboardPartnerRequest {
            business_name: "Garage Central".to_string(),
            contact_email: "owner@garage.example".to_string(),
            phone: None,
            documents: vec![KycDocumentRequest {
                doc_type: "business_license".to_string(),
                url: "not-a-url".to_string(),
            }],
        };
        assert!(req.validate().is_err());
    }

    #[test]
    fn test_kyc_status_serializes_screaming_case() {
        let value = serde_json::to_value(KycStatus::Approved).unwrap();
        assert_eq!(value, "APPROVED");
    }
}
