//! Middleware de autenticación JWT
//!
//! Verifica el bearer token de administrador, comprueba la cuenta en la
//! base de datos e inyecta la identidad autenticada en la request.

use axum::{
    extract::{Request, State},
    http::header,
    middleware::Next,
    response::Response,
};
use uuid::Uuid;

use crate::models::admin::AdminRole;
use crate::repositories::admin_repository::AdminRepository;
use crate::state::AppState;
use crate::utils::errors::AppError;
use crate::utils::jwt::{extract_token_from_header, verify_token, JwtConfig};

/// Administrador autenticado que se inyecta en las requests
#[derive(Debug, Clone)]
pub struct AuthenticatedAdmin {
    pub admin_id: Uuid,
    pub role: AdminRole,
}

/// Middleware de autenticación de administrador
pub async fn admin_auth_middleware(
    State(state): State<AppState>,
    mut request: Request,
    next: Next,
) -> Result<Response, AppError> {
    let auth_header = request
        .headers()
        .get(header::AUTHORIZATION)
        .and_then(|h| h.to_str().ok())
        .ok_or_else(|| AppError::Unauthorized("Token de autorización requerido".to_string()))?;

    let token = extract_token_from_header(auth_header)?;

    let jwt_config = JwtConfig::from(&state.config);
    let claims = verify_token(token, &jwt_config)?;

    let admin_id = Uuid::parse_str(&claims.sub)
        .map_err(|_| AppError::Unauthorized("ID de administrador inválido".to_string()))?;

    // Identidad sintética de desarrollo: sin respaldo en BD, solo con el
    // login de desarrollo habilitado explícitamente.
    if admin_id.is_nil() {
        if !state.config.dev_login_enabled() {
            return Err(AppError::Unauthorized("Token inválido".to_string()));
        }
        request.extensions_mut().insert(AuthenticatedAdmin {
            admin_id,
            role: AdminRole::SuperAdmin,
        });
        return Ok(next.run(request).await);
    }

    // El rol autoritativo es el de la BD, no el del claim
    let admin = AdminRepository::new(state.pool.clone())
        .find_by_id(admin_id)
        .await?
        .ok_or_else(|| AppError::Unauthorized("Administrador no encontrado".to_string()))?;

    if !admin.is_active {
        return Err(AppError::Forbidden("La cuenta está desactivada".to_string()));
    }

    request.extensions_mut().insert(AuthenticatedAdmin {
        admin_id: admin.id,
        role: admin.role,
    });

    Ok(next.run(request).await)
}

/// Guard de rol para operaciones reservadas al super admin
pub fn require_super_admin(admin: &AuthenticatedAdmin) -> Result<(), AppError> {
    if admin.role != AdminRole::SuperAdmin {
        return Err(AppError::Forbidden(
            "Operación reservada al super admin".to_string(),
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_require_super_admin() {
        let sup = AuthenticatedAdmin {
            admin_id: Uuid::new_v4(),
            role: AdminRole::SuperAdmin,
        };
        let sub = AuthenticatedAdmin {
            admin_id: Uuid::new_v4(),
            role: AdminRole::SubAdmin,
        };
        assert!(require_super_admin(&sup).is_ok());
        assert!(require_super_admin(&sub).is_err());
    }
}
