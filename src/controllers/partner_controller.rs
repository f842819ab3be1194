use sqlx::PgPool;
use uuid::Uuid;
use validator::Validate;

use crate::dto::common::ApiResponse;
use crate::dto::partner_dto::{
    OnboardPartnerRequest, PartnerFilters, PartnerResponse, UpdateKycRequest,
};
use crate::models::audit_log::actions;
use crate::models::partner::{KycDocument, KycStatus};
use crate::repositories::audit_log_repository::{AuditLogRepository, NewAuditLog};
use crate::repositories::partner_repository::PartnerRepository;
use crate::utils::errors::{conflict_error, AppError};

pub struct PartnerController {
    partners: PartnerRepository,
    audit: AuditLogRepository,
}

impl PartnerController {
    pub fn new(pool: PgPool) -> Self {
        Self {
            partners: PartnerRepository::new(pool.clone()),
            audit: AuditLogRepository::new(pool),
        }
    }

    /// Onboarding público de partner: entra con KYC pendiente e inactivo
    pub async fn onboard(
        &self,
        request: OnboardPartnerRequest,
    ) -> Result<ApiResponse<PartnerResponse>, AppError> {
        request.validate()?;

        if self.partners.email_exists(&request.contact_email).await? {
            return Err(conflict_error("Partner", "email", &request.contact_email));
        }

        let documents: Vec<KycDocument> = request
            .documents
            .into_iter()
            .map(|d| KycDocument {
                doc_type: d.doc_type,
                url: d.url,
                status: "PENDING".to_string(),
            })
            .collect();

        let partner = self
            .partners
            .create(request.business_name, request.contact_email, request.phone, documents)
            .await?;

        tracing::info!(partner_id = %partner.id, "Partner registrado, KYC pendiente");

        Ok(ApiResponse::success_with_message(
            partner.into(),
            "Partner registrado; documentación pendiente de revisión".to_string(),
        ))
    }

    pub async fn get_by_id(&self, id: Uuid) -> Result<PartnerResponse, AppError> {
        let partner = self
            .partners
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Partner no encontrado".to_string()))?;

        Ok(partner.into())
    }

    pub async fn list(&self, filters: PartnerFilters) -> Result<Vec<PartnerResponse>, AppError> {
        let kyc_status = match filters.kyc_status.as_deref() {
            None => None,
            Some(raw) => Some(parse_kyc_status(raw)?),
        };
        let limit = filters.limit.unwrap_or(50).clamp(1, 200);
        let offset = filters.offset.unwrap_or(0).max(0);

        let partners = self.partners.list(kyc_status, limit, offset).await?;
        Ok(partners.into_iter().map(PartnerResponse::from).collect())
    }

    /// Decisión de KYC: APPROVED activa al partner; ambas decisiones dejan
    /// exactamente una entrada de auditoría con el before/after explícito.
    pub async fn update_kyc(
        &self,
        actor_id: Uuid,
        partner_id: Uuid,
        request: UpdateKycRequest,
    ) -> Result<ApiResponse<PartnerResponse>, AppError> {
        request.validate()?;

        let new_status = parse_kyc_status(&request.status)?;
        if new_status == KycStatus::Pending {
            return Err(AppError::BadRequest(
                "La decisión de KYC debe ser APPROVED o REJECTED".to_string(),
            ));
        }

        let partner = self
            .partners
            .find_by_id(partner_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Partner no encontrado".to_string()))?;

        let previous_status = partner.kyc_status;
        let previous_active = partner.is_active;
        let is_active = new_status == KycStatus::Approved;

        let updated = self.partners.update_kyc(partner_id, new_status, is_active).await?;

        let action = match new_status {
            KycStatus::Approved => actions::PARTNER_KYC_APPROVED,
            KycStatus::Rejected => actions::PARTNER_KYC_REJECTED,
            KycStatus::Pending => unreachable!(),
        };

        self.audit
            .append(NewAuditLog {
                actor_id,
                action: action.to_string(),
                target_type: "partner".to_string(),
                target_id: partner_id.to_string(),
                before_value: Some(serde_json::json!({
                    "kyc_status": previous_status.as_str(),
                    "is_active": previous_active,
                })),
                after_value: Some(serde_json::json!({
                    "kyc_status": new_status.as_str(),
                    "is_active": is_active,
                })),
                metadata: None,
            })
            .await?;

        tracing::info!(
            partner_id = %partner_id,
            status = new_status.as_str(),
            "KYC actualizado"
        );

        Ok(ApiResponse::success_with_message(
            updated.into(),
            "KYC actualizado exitosamente".to_string(),
        ))
    }
}

fn parse_kyc_status(raw: &str) -> Result<KycStatus, AppError> {
    match raw {
        "PENDING" => Ok(KycStatus::Pending),
        "APPROVED" => Ok(KycStatus::Approved),
        "REJECTED" => Ok(KycStatus::Rejected),
        other => Err(AppError::BadRequest(format!(
            "Estado de KYC desconocido: '{}'",
            other
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_kyc_status() {
        assert_eq!(parse_kyc_status("APPROVED").unwrap(), KycStatus::Approved);
        assert_eq!(parse_kyc_status("REJECTED").unwrap(), KycStatus::Rejected);
        assert!(parse_kyc_status("approved").is_err());
        assert!(parse_kyc_status("").is_err());
    }
}
