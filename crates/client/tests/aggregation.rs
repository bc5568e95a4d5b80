//! Aggregation behavior against a real HTTP backend: best-effort dependent
//! fetches, merge-by-id commission enrichment and the re-fetch-after-mutation
//! payment flow.

use std::sync::{Arc, Mutex};

use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    routing::{get, patch},
};
use serde_json::{Value, json};

use api_types::{Money, PaymentMethod, Status, quotation::{PagoComisionNueva, PagoNuevo}};
use client::{Api, ApiError};

#[derive(Clone)]
struct Backend {
    state: Arc<Mutex<BackendState>>,
}

struct BackendState {
    estado: String,
    pending_cents: i64,
    payments_posted: usize,
}

impl Backend {
    fn new() -> Self {
        Self {
            state: Arc::new(Mutex::new(BackendState {
                estado: "pendiente".to_string(),
                pending_cents: 35_000,
                payments_posted: 0,
            })),
        }
    }
}

fn money(cents: i64) -> String {
    format!("{}.{:02}", cents / 100, cents % 100)
}

fn quotation_json(id: i64, estado: &str, pending_cents: i64) -> Value {
    json!({
        "id": id,
        "fecha": "2026-03-02",
        "nombre_cliente": if id == 1 { "Ana Rojas" } else { "Luis Mamani" },
        "telefono": null,
        "estado": estado,
        "total": "350.00",
        "monto_pendiente": money(pending_cents),
        "usuario_id": 3
    })
}

async fn list_quotations(State(backend): State<Backend>) -> Json<Value> {
    let state = backend.state.lock().unwrap();
    Json(json!([
        quotation_json(1, &state.estado, state.pending_cents),
        quotation_json(2, "pendiente", 10_000),
    ]))
}

async fn get_quotation(
    State(backend): State<Backend>,
    Path(id): Path<i64>,
) -> Result<Json<Value>, (StatusCode, Json<Value>)> {
    let state = backend.state.lock().unwrap();
    match id {
        1 => Ok(Json(quotation_json(1, &state.estado, state.pending_cents))),
        2 => Ok(Json(quotation_json(2, "pendiente", 10_000))),
        _ => Err((
            StatusCode::NOT_FOUND,
            Json(json!({"error": "cotización no encontrada"})),
        )),
    }
}

/// Quotation 1 has two services; service 12 already carries an inline
/// commission list. Quotation 2's services endpoint is broken.
async fn get_services(Path(id): Path<i64>) -> Result<Json<Value>, (StatusCode, Json<Value>)> {
    match id {
        1 => Ok(Json(json!([
            {
                "id": 11,
                "servicio_id": 5,
                "especialidad_id": 2,
                "precio": "200.00",
                "comisiones": []
            },
            {
                "id": 12,
                "servicio_id": 6,
                "especialidad_id": 2,
                "precio": "150.00",
                "comisiones": [
                    {"doctor_id": 8, "porcentaje": "40.00", "monto": "60.00", "monto_pendiente": "60.00"}
                ]
            }
        ]))),
        _ => Err((
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({"error": "error interno"})),
        )),
    }
}

async fn get_payments(Path(id): Path<i64>) -> Result<Json<Value>, (StatusCode, Json<Value>)> {
    match id {
        1 => Ok(Json(json!([
            {
                "id": 91,
                "fecha": "2026-03-02T10:00:00",
                "monto": "50.00",
                "metodo_pago": "Mixto",
                "monto_efectivo": "30.00",
                "monto_qr": "20.00",
                "comisiones": [{"doctor_id": 7, "monto": "25.00"}]
            }
        ]))),
        _ => Err((
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({"error": "error interno"})),
        )),
    }
}

/// Commissions resolve for service 11 and fail for service 12.
async fn get_commissions(Path(id): Path<i64>) -> Result<Json<Value>, (StatusCode, Json<Value>)> {
    match id {
        11 => Ok(Json(json!([
            {"doctor_id": 7, "porcentaje": "50.00", "monto": "100.00", "monto_pendiente": "75.00"}
        ]))),
        _ => Err((
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(json!({"error": "error interno"})),
        )),
    }
}

async fn post_payment(
    State(backend): State<Backend>,
    Path(_id): Path<i64>,
    Json(body): Json<Value>,
) -> (StatusCode, Json<Value>) {
    let mut state = backend.state.lock().unwrap();
    let amount: Money = body["monto"].as_str().unwrap_or("0").parse().unwrap();
    state.pending_cents -= amount.cents();
    state.payments_posted += 1;
    (StatusCode::CREATED, Json(json!({"id": 92})))
}

async fn patch_status(
    State(backend): State<Backend>,
    Path(_id): Path<i64>,
    Json(body): Json<Value>,
) -> Json<Value> {
    let mut state = backend.state.lock().unwrap();
    state.estado = body["estado"].as_str().unwrap_or("pendiente").to_string();
    Json(json!({}))
}

async fn spawn_backend(backend: Backend) -> Api {
    let app = Router::new()
        .route("/cotizaciones", get(list_quotations))
        .route("/cotizaciones/{id}", get(get_quotation))
        .route("/cotizaciones/{id}/estado", patch(patch_status))
        .route("/cotizaciones/{id}/servicios", get(get_services))
        .route("/cotizaciones/{id}/pagos", get(get_payments).post(post_payment))
        .route("/cotizaciones/servicios/{id}/comisiones", get(get_commissions))
        .with_state(backend);

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    Api::builder().base_url(format!("http://{addr}")).build()
}

#[tokio::test]
async fn listing_survives_one_parent_with_broken_dependents() {
    let api = spawn_backend(Backend::new()).await;

    let full = api.quotations_full().await.unwrap();
    assert_eq!(full.len(), 2);

    let first = &full[0];
    assert_eq!(first.quotation.id, 1);
    assert_eq!(first.services.len(), 2);
    assert_eq!(first.payments.len(), 1);

    // The broken parent degrades to itself with empty dependents.
    let second = &full[1];
    assert_eq!(second.quotation.id, 2);
    assert_eq!(second.quotation.client_name, "Luis Mamani");
    assert!(second.services.is_empty());
    assert!(second.payments.is_empty());
}

#[tokio::test]
async fn commission_enrichment_merges_by_id_and_is_non_destructive() {
    let api = spawn_backend(Backend::new()).await;

    let full = api.quotation_full(1).await.unwrap();
    let services = &full.services;
    assert_eq!(services[0].id, 11);
    assert_eq!(services[1].id, 12);

    // Service 11: commissions fetched and merged in.
    let fetched = &services[0].commissions;
    assert_eq!(fetched.len(), 1);
    assert_eq!(fetched[0].doctor_id, 7);
    assert_eq!(fetched[0].pending, Money::new(7_500));
    // amount == price × percentage / 100, rounded half-up to the cent.
    assert_eq!(
        fetched[0].amount,
        services[0].price.percent(fetched[0].percentage)
    );

    // Service 12: the commissions fetch failed, the inline list survives.
    let kept = &services[1].commissions;
    assert_eq!(kept.len(), 1);
    assert_eq!(kept[0].doctor_id, 8);
    assert_eq!(kept[0].amount, Money::new(6_000));
    assert_eq!(
        kept[0].amount,
        services[1].price.percent(kept[0].percentage)
    );
}

#[tokio::test]
async fn assemble_never_raises_for_broken_dependents() {
    let api = spawn_backend(Backend::new()).await;

    let full = api.quotation_full(2).await.unwrap();
    assert_eq!(full.quotation.total, Money::new(35_000));
    assert_eq!(full.quotation.status, Status::Pendiente);
    assert!(full.services.is_empty());
    assert!(full.payments.is_empty());
}

#[tokio::test]
async fn mixto_payment_parts_sum_to_the_amount() {
    let api = spawn_backend(Backend::new()).await;

    let payment = &api.quotation_full(1).await.unwrap().payments[0];
    assert_eq!(payment.method, PaymentMethod::Mixto);
    assert_eq!(
        payment.cash.unwrap() + payment.qr.unwrap(),
        payment.amount
    );
    assert_eq!(payment.amount, Money::new(5_000));
    assert_eq!(payment.commissions.get(&7), Some(&Money::new(2_500)));
}

#[tokio::test]
async fn register_payment_validates_then_refetches() {
    let backend = Backend::new();
    let api = spawn_backend(backend.clone()).await;

    let payment = PagoNuevo {
        monto: Money::new(5_000),
        metodo_pago: PaymentMethod::Mixto,
        monto_efectivo: Some(Money::new(3_000)),
        monto_qr: Some(Money::new(2_000)),
        comisiones: vec![PagoComisionNueva {
            doctor_id: 7,
            monto: Money::new(2_500),
        }],
    };
    let full = api.register_payment(1, &payment).await.unwrap();

    // The pending amount is the backend's post-mutation value, re-fetched.
    assert_eq!(full.quotation.pending, Money::new(30_000));
    assert_eq!(backend.state.lock().unwrap().payments_posted, 1);
}

#[tokio::test]
async fn mismatched_mixto_split_is_rejected_before_submission() {
    let backend = Backend::new();
    let api = spawn_backend(backend.clone()).await;

    let payment = PagoNuevo {
        monto: Money::new(5_000),
        metodo_pago: PaymentMethod::Mixto,
        monto_efectivo: Some(Money::new(3_000)),
        monto_qr: Some(Money::new(1_000)),
        comisiones: Vec::new(),
    };
    let err = api.register_payment(1, &payment).await.unwrap_err();
    assert!(matches!(err, ApiError::Validation(_)));
    assert_eq!(backend.state.lock().unwrap().payments_posted, 0);
}

#[tokio::test]
async fn payments_over_the_pending_balance_are_rejected() {
    let backend = Backend::new();
    let api = spawn_backend(backend.clone()).await;

    let payment = PagoNuevo {
        monto: Money::new(99_900),
        metodo_pago: PaymentMethod::Efectivo,
        monto_efectivo: None,
        monto_qr: None,
        comisiones: Vec::new(),
    };
    let err = api.register_payment(1, &payment).await.unwrap_err();
    assert!(matches!(err, ApiError::Validation(_)));
    assert_eq!(backend.state.lock().unwrap().payments_posted, 0);
}

#[tokio::test]
async fn soft_delete_transitions_status_and_keeps_the_row() {
    let api = spawn_backend(Backend::new()).await;

    api.delete_quotation(1).await.unwrap();

    let quotation = api.quotation(1).await.unwrap();
    assert_eq!(quotation.status, Status::Eliminado);
    // No other field mutates.
    assert_eq!(quotation.client_name, "Ana Rojas");
    assert_eq!(quotation.total, Money::new(35_000));
}
