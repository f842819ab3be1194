use chrono::Utc;
use sqlx::types::Json;
use sqlx::PgPool;
use uuid::Uuid;

use crate::models::partner::{KycDocument, KycStatus, Partner};
use crate::utils::errors::AppError;

pub struct PartnerRepository {
    pool: PgPool,
}

impl PartnerRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn create(
        &self,
        business_name: String,
        contact_email: String,
        phone: Option<String>,
        documents: Vec<KycDocument>,
    ) -> Result<Partner, AppError> {
        let partner = sqlx::query_as::<_, Partner>(
            r#"
            INSERT INTO partners (
                id, business_name, contact_email, phone,
                kyc_status, is_active, documents, created_at
            )
            VALUES ($1, $2, $3, $4, 'PENDING', false, $5, $6)
            RETURNING *
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(business_name)
        .bind(contact_email)
        .bind(phone)
        .bind(Json(documents))
        .bind(Utc::now())
        .fetch_one(&self.pool)
        .await?;

        Ok(partner)
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<Partner>, AppError> {
        let partner = sqlx::query_as::<_, Partner>("SELECT * FROM partners WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;

        Ok(partner)
    }

    pub async fn email_exists(&self, email: &str) -> Result<bool, AppError> {
        let result: (bool,) =
            sqlx::query_as("SELECT EXISTS(SELECT 1 FROM partners WHERE contact_email = $1)")
                .bind(email)
                .fetch_one(&self.pool)
                .await?;

        Ok(result.0)
    }

    pub async fn list(
        &self,
        kyc_status: Option<KycStatus>,
        limit: i64,
        offset: i64,
    ) -> Result<Vec<Partner>, AppError> {
        let partners = sqlx::query_as::<_, Partner>(
            r#"
            SELECT * FROM partners
            WHERE ($1::kyc_status IS NULL OR kyc_status = $1)
            ORDER BY created_at DESC
            LIMIT $2 OFFSET $3
            "#,
        )
        .bind(kyc_status)
        .bind(limit)
        .bind(offset)
        .fetch_all(&self.pool)
        .await?;

        Ok(partners)
    }

    /// Cambiar el resultado del KYC; la aprobación activa al partner
    pub async fn update_kyc(
        &self,
        id: Uuid,
        kyc_status: KycStatus,
        is_active: bool,
    ) -> Result<Partner, AppError> {
        let partner = sqlx::query_as::<_, Partner>(
            r#"
            UPDATE partners
            SET kyc_status = $2, is_active = $3
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(kyc_status)
        .bind(is_active)
        .fetch_one(&self.pool)
        .await?;

        Ok(partner)
    }

    pub async fn count_pending_kyc(&self) -> Result<i64, AppError> {
        let (count,): (i64,) =
            sqlx::query_as("SELECT COUNT(*) FROM partners WHERE kyc_status = 'PENDING'")
                .fetch_one(&self.pool)
                .await?;

        Ok(count)
    }
}
