use chrono::Utc;
use rust_decimal::Decimal;
use sqlx::PgPool;

use crate::models::settings::AppSettings;
use crate::utils::errors::AppError;

/// Repositorio de la fila única de configuración.
pub struct SettingsRepository {
    pool: PgPool,
}

impl SettingsRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn get(&self) -> Result<AppSettings, AppError> {
        let settings = sqlx::query_as::<_, AppSettings>(
            r#"
            SELECT grace_period_minutes, overstay_rate_multiplier,
                   best_score_distance_weight, updated_at
            FROM app_settings
            WHERE singleton = true
            "#,
        )
        .fetch_one(&self.pool)
        .await?;

        Ok(settings)
    }

    /// Actualización parcial; los campos ausentes se conservan
    pub async fn update(
        &self,
        grace_period_minutes: Option<i32>,
        overstay_rate_multiplier: Option<Decimal>,
        best_score_distance_weight: Option<Decimal>,
    ) -> Result<AppSettings, AppError> {
        let settings = sqlx::query_as::<_, AppSettings>(
            r#"
            UPDATE app_settings
            SET grace_period_minutes = COALESCE($1, grace_period_minutes),
                overstay_rate_multiplier = COALESCE($2, overstay_rate_multiplier),
                best_score_distance_weight = COALESCE($3, best_score_distance_weight),
                updated_at = $4
            WHERE singleton = true
            RETURNING grace_period_minutes, overstay_rate_multiplier,
                      best_score_distance_weight, updated_at
            "#,
        )
        .bind(grace_period_minutes)
        .bind(overstay_rate_multiplier)
        .bind(best_score_distance_weight)
        .bind(Utc::now())
        .fetch_one(&self.pool)
        .await?;

        Ok(settings)
    }
}
