mod config;
mod controllers;
mod database;
mod dto;
mod middleware;
mod models;
mod repositories;
mod routes;
mod services;
mod state;
mod utils;

use anyhow::Result;
use axum::{response::Json, routing::get, Router};
use dotenvy::dotenv;
use serde_json::json;
use std::net::SocketAddr;
use tokio::signal;
use tracing::{error, info};

use config::environment::EnvironmentConfig;
use database::DatabaseConnection;
use middleware::cors::{cors_middleware, cors_middleware_with_origins};
use state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Cargar variables de entorno
    dotenv().ok();

    // Configurar logging
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    info!("🅿️  Parking Marketplace - API de reservas y partners");
    info!("====================================================");

    let env_config = EnvironmentConfig::default();

    // Inicializar base de datos
    let db_connection = match DatabaseConnection::new_default().await {
        Ok(conn) => conn,
        Err(e) => {
            error!("❌ Error conectando a la base de datos: {}", e);
            return Err(anyhow::anyhow!("Error de base de datos: {}", e));
        }
    };

    let pool = db_connection.pool().clone();
    let app_state = AppState::new(pool, env_config.clone());

    // En producción CORS se restringe a los orígenes configurados
    let cors = if env_config.is_production() {
        cors_middleware_with_origins(env_config.cors_origins.clone())
    } else {
        cors_middleware()
    };

    let app = Router::new()
        .route("/health", get(health_endpoint))
        .nest("/api/bookings", routes::booking_routes::create_booking_router())
        .nest(
            "/api/parking",
            routes::parking_routes::create_parking_router(app_state.clone()),
        )
        .nest("/api/users", routes::user_routes::create_user_router())
        .nest("/api/partners", routes::partner_routes::create_partner_router())
        .nest(
            "/api/problems",
            routes::problem_routes::create_problem_router(app_state.clone()),
        )
        .nest(
            "/api/audit",
            routes::audit_routes::create_audit_router(app_state.clone()),
        )
        .nest(
            "/api/admin",
            routes::admin_routes::create_admin_router(app_state.clone()),
        )
        .layer(cors)
        .with_state(app_state);

    let addr: SocketAddr = env_config.server_url().parse()?;

    info!("🌐 Servidor iniciando en http://{}", addr);
    info!("🔍 Endpoints disponibles:");
    info!("   GET  /health - Health check");
    info!("📅 Endpoints - Bookings:");
    info!("   POST /api/bookings - Crear reserva");
    info!("   POST /api/bookings/scan - Check-in / check-out por QR");
    info!("   GET  /api/bookings/:id - Reservas de un usuario");
    info!("   POST /api/bookings/:id/extend - Extender reserva");
    info!("🅿️  Endpoints - Parking:");
    info!("   POST /api/parking - Crear plaza (admin)");
    info!("   GET  /api/parking - Listar plazas");
    info!("   GET  /api/parking/recommend - Recomendaciones por ubicación");
    info!("   GET  /api/parking/:id - Obtener plaza");
    info!("👤 Endpoints - Users:");
    info!("   GET  /api/users/:id - Perfil de usuario");
    info!("   PUT  /api/users/:id - Actualizar perfil");
    info!("🤝 Endpoints - Partners:");
    info!("   POST /api/partners/onboard - Alta de partner con KYC");
    info!("🛠️  Endpoints - Problems:");
    info!("   POST  /api/problems - Reportar problema");
    info!("   GET   /api/problems - Listar reportes (admin)");
    info!("   PATCH /api/problems/:id/status - Cambiar estado (admin)");
    info!("🔐 Endpoints - Admin:");
    info!("   POST /api/admin/auth/login - Login de admin");
    info!("   GET  /api/admin/auth/me - Perfil del admin autenticado");
    info!("   GET  /api/admin/partners - Listar partners");
    info!("   PUT  /api/admin/partners/:id/kyc - Decisión de KYC");
    info!("   GET  /api/admin/config - Configuración");
    info!("   PUT  /api/admin/config - Actualizar configuración (super admin)");
    info!("   GET  /api/admin/stats - Estadísticas del panel");
    info!("   GET  /api/audit - Log de auditoría (admin)");

    if env_config.dev_login_enabled() {
        info!("🧪 Login de desarrollo habilitado (DEV_ADMIN_EMAIL)");
    }

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .map_err(|e| {
            error!("❌ Error del servidor: {}", e);
            anyhow::anyhow!(e)
        })?;

    info!("👋 Servidor terminado");
    Ok(())
}

/// Health check simple
async fn health_endpoint() -> Json<serde_json::Value> {
    Json(json!({
        "status": "ok",
        "service": "parking-marketplace",
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}

/// Señal de apagado graceful
async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("🛑 Señal Ctrl+C recibida, apagando servidor...");
        },
        _ = terminate => {
            info!("🛑 Señal SIGTERM recibida, apagando servidor...");
        },
    }
}
