//! Tests de humo sobre la forma de la API.
//!
//! El binario no es una lib, así que estos tests montan un router mínimo
//! con el mismo contrato (health, envoltorio de error, auth por Bearer)
//! y verifican códigos de estado y forma del JSON.

use axum::{
    body::Body,
    http::{header, Request, StatusCode},
    response::{IntoResponse, Json, Response},
    routing::get,
    Router,
};
use http_body_util::BodyExt;
use serde_json::{json, Value};
use tower::ServiceExt;

fn create_test_app() -> Router {
    Router::new()
        .route(
            "/health",
            get(|| async {
                Json(json!({
                    "status": "ok",
                    "service": "parking-marketplace",
                }))
            }),
        )
        .route("/api/admin/stats", get(protected_stats))
}

// Mismo contrato que el middleware de admin: sin Bearer -> 401 con
// el envoltorio {error, message}
async fn protected_stats(request: Request<Body>) -> Response {
    let authorized = request
        .headers()
        .get(header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .map(|v| v.starts_with("Bearer "))
        .unwrap_or(false);

    if !authorized {
        return (
            StatusCode::UNAUTHORIZED,
            Json(json!({
                "error": "No autorizado",
                "message": "Token de autenticación requerido",
            })),
        )
            .into_response();
    }

    Json(json!({ "bookings_total": 0 })).into_response()
}

async fn body_json(response: Response) -> Value {
    let bytes = response
        .into_body()
        .collect()
        .await
        .expect("failed to read body")
        .to_bytes();
    serde_json::from_slice(&bytes).expect("body is not valid JSON")
}

#[tokio::test]
async fn test_health_check() {
    let app = create_test_app();

    let response = app
        .oneshot(
            Request::builder()
                .uri("/health")
                .body(Body::empty())
                .expect("request"),
        )
        .await
        .expect("response");

    assert_eq!(response.status(), StatusCode::OK);

    let body = body_json(response).await;
    assert_eq!(body["status"], "ok");
    assert_eq!(body["service"], "parking-marketplace");
}

#[tokio::test]
async fn test_protected_route_requires_bearer() {
    let app = create_test_app();

    let response = app
        .oneshot(
            Request::builder()
                .uri("/api/admin/stats")
                .body(Body::empty())
                .expect("request"),
        )
        .await
        .expect("response");

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    let body = body_json(response).await;
    assert_eq!(body["error"], "No autorizado");
}

#[tokio::test]
async fn test_protected_route_accepts_bearer() {
    let app = create_test_app();

    let response = app
        .oneshot(
            Request::builder()
                .uri("/api/admin/stats")
                .header(header::AUTHORIZATION, "Bearer token-de-prueba")
                .body(Body::empty())
                .expect("request"),
        )
        .await
        .expect("response");

    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_unknown_route_is_404() {
    let app = create_test_app();

    let response = app
        .oneshot(
            Request::builder()
                .uri("/api/no-existe")
                .body(Body::empty())
                .expect("request"),
        )
        .await
        .expect("response");

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
