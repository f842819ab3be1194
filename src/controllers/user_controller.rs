use sqlx::PgPool;
use uuid::Uuid;
use validator::Validate;

use crate::dto::common::ApiResponse;
use crate::dto::user_dto::{UpdateUserRequest, UserResponse};
use crate::repositories::user_repository::UserRepository;
use crate::utils::errors::AppError;

pub struct UserController {
    users: UserRepository,
}

impl UserController {
    pub fn new(pool: PgPool) -> Self {
        Self {
            users: UserRepository::new(pool),
        }
    }

    pub async fn get_by_id(&self, id: Uuid) -> Result<UserResponse, AppError> {
        let user = self
            .users
            .find_by_id(id)
            .await?
            .ok_or_else(|| AppError::NotFound("Usuario no encontrado".to_string()))?;

        Ok(user.into())
    }

    pub async fn update_profile(
        &self,
        id: Uuid,
        request: UpdateUserRequest,
    ) -> Result<ApiResponse<UserResponse>, AppError> {
        request.validate()?;

        if self.users.find_by_id(id).await?.is_none() {
            return Err(AppError::NotFound("Usuario no encontrado".to_string()));
        }

        let user = self
            .users
            .update_profile(id, request.full_name, request.phone, request.vehicle_type)
            .await?;

        Ok(ApiResponse::success_with_message(
            user.into(),
            "Perfil actualizado exitosamente".to_string(),
        ))
    }
}
