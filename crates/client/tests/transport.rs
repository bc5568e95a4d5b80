//! Transport-level behavior: bearer attach, 401 session invalidation, error
//! body extraction, enum coercion on ingress and decimal round-trips.

use std::sync::{
    Arc,
    atomic::{AtomicUsize, Ordering},
};

use axum::{
    Json, Router,
    extract::Query,
    http::{HeaderMap, StatusCode},
    routing::{get, post},
};
use serde_json::{Value, json};

use api_types::{Money, ProductStatus, Role, product::ProductoNuevo};
use client::{Api, ApiError, MemoryStorage, Session, User};

async fn list_users(headers: HeaderMap) -> Result<Json<Value>, (StatusCode, Json<Value>)> {
    let authorized = headers
        .get("authorization")
        .and_then(|v| v.to_str().ok())
        .is_some_and(|v| v == "Bearer tok-123");
    if !authorized {
        return Err((
            StatusCode::UNAUTHORIZED,
            Json(json!({"error": "no autorizado"})),
        ));
    }
    Ok(Json(json!([
        {"id": 1, "username": "ana", "rol": "admin"},
        {"id": 2, "username": "rosa", "rol": "gerente"}
    ])))
}

async fn create_product(Json(mut body): Json<Value>) -> (StatusCode, Json<Value>) {
    // Echo the submitted fields back, as the backend does.
    body["id"] = json!(41);
    (StatusCode::CREATED, Json(body))
}

async fn reject_product() -> (StatusCode, Json<Value>) {
    (
        StatusCode::UNPROCESSABLE_ENTITY,
        Json(json!({"error": "monto inválido"})),
    )
}

async fn login(Json(body): Json<Value>) -> Result<Json<Value>, (StatusCode, Json<Value>)> {
    if body["password"].as_str() != Some("secreta") {
        return Err((
            StatusCode::UNAUTHORIZED,
            Json(json!({"error": "credenciales inválidas"})),
        ));
    }
    Ok(Json(json!({
        "token": "tok-123",
        "usuario": {"id": 1, "username": body["username"], "rol": "admin"}
    })))
}

async fn report(Query(params): Query<std::collections::HashMap<String, String>>) -> Json<Value> {
    Json(json!({
        "desde": params["desde"],
        "hasta": params["hasta"],
        "total_ventas": "1200.50",
        "total_consultas": "800.00",
        "total_pagos_cotizaciones": "350.00",
        "total_gastos": "420.75",
        "neto": "1929.75"
    }))
}

fn router() -> Router {
    Router::new()
        .route("/auth/login", post(login))
        .route("/usuarios", get(list_users))
        .route("/productos", post(create_product))
        .route("/productos/{id}", axum::routing::put(reject_product))
        .route("/reportes/resumen", get(report))
}

async fn spawn_server() -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router()).await.unwrap();
    });
    format!("http://{addr}")
}

fn session() -> Session {
    Session {
        token: "tok-123".to_string(),
        user: User {
            id: 1,
            username: "ana".to_string(),
            role: Role::Admin,
        },
    }
}

#[tokio::test]
async fn bearer_token_is_attached_and_unknown_roles_coerce() {
    let base = spawn_server().await;
    let api = Api::builder().base_url(base).build();
    api.session().set(session());

    let users = api.users().await.unwrap();
    assert_eq!(users[0].role, Role::Admin);
    // "gerente" is not a known role; it falls back to assistant.
    assert_eq!(users[1].role, Role::Asistente);
}

#[tokio::test]
async fn a_401_clears_the_session_and_fires_the_hook_once() {
    let base = spawn_server().await;
    let fired = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&fired);
    let api = Api::builder()
        .base_url(base)
        .storage(MemoryStorage::default())
        .on_unauthorized(move || {
            counter.fetch_add(1, Ordering::SeqCst);
        })
        .build();
    api.session().set(Session {
        token: "stale".to_string(),
        ..session()
    });

    let err = api.users().await.unwrap_err();
    assert!(matches!(err, ApiError::Unauthorized));
    assert!(api.session().get().is_none());
    assert_eq!(fired.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn backend_error_messages_are_surfaced_verbatim() {
    let base = spawn_server().await;
    let api = Api::builder().base_url(base).build();

    let req = ProductoNuevo {
        codigo: "POL-01".to_string(),
        nombre: "Polera".to_string(),
        precio_venta: Money::new(1_999),
        precio_costo: Money::new(1_200),
        stock: 10,
        estado: ProductStatus::Activo,
    };
    let err = api.update_product(41, &req).await.unwrap_err();
    match err {
        ApiError::Api { status, message } => {
            assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
            assert_eq!(message, "monto inválido");
        }
        other => panic!("expected Api error, got {other:?}"),
    }
}

#[tokio::test]
async fn connectivity_failures_become_network_errors() {
    // Nothing listens on port 9; the request cannot get a response.
    let api = Api::builder().base_url("http://127.0.0.1:9").build();
    let err = api.users().await.unwrap_err();
    assert!(matches!(err, ApiError::Network(_)));
}

#[tokio::test]
async fn created_entities_round_trip_their_decimal_fields() {
    let base = spawn_server().await;
    let api = Api::builder().base_url(base).build();

    let req = ProductoNuevo {
        codigo: "POL-01".to_string(),
        nombre: "Polera".to_string(),
        precio_venta: "19.99".parse().unwrap(),
        precio_costo: "12.40".parse().unwrap(),
        stock: 10,
        estado: ProductStatus::Activo,
    };
    let product = api.create_product(&req).await.unwrap();
    assert_eq!(product.sale_price, Money::new(1_999));
    assert_eq!(product.cost_price, Money::new(1_240));
    assert_eq!(product.sale_price.to_string(), "19.99");
    assert_eq!(product.status, ProductStatus::Activo);
}

#[tokio::test]
async fn login_persists_the_session() {
    let base = spawn_server().await;
    let api = Api::builder()
        .base_url(base)
        .storage(MemoryStorage::default())
        .build();

    let logged_in = api.login("ana", "secreta").await.unwrap();
    assert_eq!(logged_in.user.role, Role::Admin);
    assert_eq!(api.session().token().as_deref(), Some("tok-123"));

    // Bad credentials surface the backend message and leave no session…
    api.session().clear();
    let err = api.login("ana", "mala").await.unwrap_err();
    assert!(matches!(err, ApiError::Unauthorized));
    assert!(api.session().get().is_none());
}

#[tokio::test]
async fn report_summary_parses_string_decimal_totals() {
    let base = spawn_server().await;
    let api = Api::builder().base_url(base).build();

    let from = chrono::NaiveDate::from_ymd_opt(2026, 3, 1).unwrap();
    let to = chrono::NaiveDate::from_ymd_opt(2026, 3, 31).unwrap();
    let summary = api.report_summary(from, to).await.unwrap();
    assert_eq!(summary.from, from);
    assert_eq!(summary.sales_income, Money::new(120_050));
    assert_eq!(summary.net, Money::new(192_975));
}
