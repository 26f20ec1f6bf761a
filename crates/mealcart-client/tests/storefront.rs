//! End-to-end tests against an in-process fake of the remote JSON store.

use std::sync::{Arc, Mutex};
use std::time::Duration;

use axum::body::Bytes;
use axum::extract::State;
use axum::http::{header, HeaderMap, StatusCode};
use axum::response::IntoResponse;
use axum::routing::{get, post};
use axum::Router;
use mealcart_client::{
    CartStore, Checkout, CheckoutOutcome, LoadError, LoadState, MealCatalog, OrderSubmitter,
    StorefrontConfig, SubmissionStatus, SubmitError,
};
use mealcart_core::{ContactForm, ContactInfo, LineItem, Money};
use serde_json::{json, Value};

// =============================================================================
// Fake Store
// =============================================================================

#[derive(Clone)]
struct FakeStore {
    meals_status: StatusCode,
    meals_body: &'static str,
    orders_status: StatusCode,
    received: Arc<Mutex<Vec<ReceivedOrder>>>,
}

#[derive(Debug, Clone)]
struct ReceivedOrder {
    content_type: Option<String>,
    body: Value,
}

impl FakeStore {
    fn new(meals_body: &'static str) -> Self {
        FakeStore {
            meals_status: StatusCode::OK,
            meals_body,
            orders_status: StatusCode::OK,
            received: Arc::new(Mutex::new(Vec::new())),
        }
    }

    fn received(&self) -> Vec<ReceivedOrder> {
        self.received.lock().unwrap().clone()
    }
}

const MEALS: &str = r#"{
    "m2": { "name": "Schnitzel", "description": "A german specialty!", "price": 16.5 },
    "m1": { "name": "Sushi", "description": "Finest fish and veggies", "price": 22.99 },
    "m3": { "name": "Barbecue Burger", "description": "American, raw, meaty", "price": 12.99 }
}"#;

async fn meals(State(store): State<FakeStore>) -> impl IntoResponse {
    (
        store.meals_status,
        [(header::CONTENT_TYPE, "application/json")],
        store.meals_body,
    )
}

async fn orders(State(store): State<FakeStore>, headers: HeaderMap, body: Bytes) -> StatusCode {
    let content_type = headers
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .map(str::to_string);
    let body = serde_json::from_slice(&body).unwrap_or(Value::Null);

    store
        .received
        .lock()
        .unwrap()
        .push(ReceivedOrder { content_type, body });
    store.orders_status
}

/// Serves `store` on an ephemeral port and returns a config pointing at it.
async fn serve(store: FakeStore) -> StorefrontConfig {
    let app = Router::new()
        .route("/meals.json", get(meals))
        .route("/orders.json", post(orders))
        .with_state(store);

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    let mut config = StorefrontConfig::with_base_url(format!("http://{addr}"));
    config.endpoint.timeout_secs = Some(5);
    config
}

/// A config pointing at a port nothing listens on.
async fn unreachable() -> StorefrontConfig {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    StorefrontConfig::with_base_url(format!("http://{addr}"))
}

fn contact() -> ContactInfo {
    ContactInfo {
        name: "Ada".to_string(),
        street: "1 Main St".to_string(),
        city: "Springfield".to_string(),
        postal_code: "12345".to_string(),
    }
}

fn valid_form() -> ContactForm {
    ContactForm::new("Ada", "1 Main St", "Springfield", "12345")
}

// =============================================================================
// Catalog
// =============================================================================

#[tokio::test]
async fn test_load_meals_flattens_by_id() {
    let config = serve(FakeStore::new(MEALS)).await;
    let catalog = MealCatalog::from_config(&config).unwrap();

    let meals = catalog.load_meals().await.unwrap();

    let ids: Vec<&str> = meals.iter().map(|m| m.id.as_str()).collect();
    assert_eq!(ids, vec!["m1", "m2", "m3"]);
    assert_eq!(meals[0].name, "Sushi");
    assert_eq!(meals[0].price, Money::from_cents(2299));
    assert_eq!(meals[1].price, Money::from_cents(1650));
}

#[tokio::test]
async fn test_load_meals_null_is_empty_menu() {
    let config = serve(FakeStore::new("null")).await;
    let catalog = MealCatalog::from_config(&config).unwrap();

    assert!(catalog.load_meals().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_load_meals_error_status() {
    let mut store = FakeStore::new(MEALS);
    store.meals_status = StatusCode::INTERNAL_SERVER_ERROR;
    let config = serve(store).await;
    let catalog = MealCatalog::from_config(&config).unwrap();

    let err = catalog.load_meals().await.unwrap_err();
    assert!(matches!(err, LoadError::Status { status: 500 }));
    assert!(err.is_retryable());
}

#[tokio::test]
async fn test_load_meals_bad_json() {
    let config = serve(FakeStore::new("{\"m1\": {\"name\": 3}}")).await;
    let catalog = MealCatalog::from_config(&config).unwrap();

    let err = catalog.load_meals().await.unwrap_err();
    assert!(matches!(err, LoadError::Decode(_)));
}

#[tokio::test]
async fn test_load_meals_unreachable() {
    let config = unreachable().await;
    let catalog = MealCatalog::from_config(&config).unwrap();

    let err = catalog.load_meals().await.unwrap_err();
    assert!(matches!(err, LoadError::Transport(_)));
}

#[tokio::test]
async fn test_spawn_load_reports_ready() {
    let config = serve(FakeStore::new(MEALS)).await;
    let catalog = MealCatalog::from_config(&config).unwrap();

    let mut rx = catalog.spawn_load();
    assert_eq!(*rx.borrow(), LoadState::Loading);

    let state = tokio::time::timeout(Duration::from_secs(5), rx.wait_for(LoadState::is_terminal))
        .await
        .unwrap()
        .unwrap()
        .clone();

    match state {
        LoadState::Ready(meals) => assert_eq!(meals.len(), 3),
        other => panic!("expected Ready, got {other:?}"),
    }
}

#[tokio::test]
async fn test_spawn_load_reports_error() {
    let config = unreachable().await;
    let catalog = MealCatalog::from_config(&config).unwrap();

    let mut rx = catalog.spawn_load();
    let state = tokio::time::timeout(Duration::from_secs(5), rx.wait_for(LoadState::is_terminal))
        .await
        .unwrap()
        .unwrap()
        .clone();

    assert!(matches!(state, LoadState::Error(_)));
}

// =============================================================================
// Orders
// =============================================================================

#[tokio::test]
async fn test_submit_order_payload_shape() {
    let store = FakeStore::new(MEALS);
    let config = serve(store.clone()).await;
    let submitter = OrderSubmitter::from_config(&config).unwrap();

    let items = vec![
        LineItem::new("m1", "Sushi", Money::from_cents(2299), 2),
        LineItem::new("m3", "Barbecue Burger", Money::from_cents(1299), 1),
    ];
    submitter.submit_order(&contact(), &items).await.unwrap();

    let received = store.received();
    assert_eq!(received.len(), 1);
    assert_eq!(received[0].content_type.as_deref(), Some("application/json"));
    assert_eq!(
        received[0].body,
        json!({
            "user": {
                "name": "Ada",
                "street": "1 Main St",
                "city": "Springfield",
                "postalCode": "12345"
            },
            "orderedItems": [
                { "id": "m1", "name": "Sushi", "amount": 2, "price": 22.99 },
                { "id": "m3", "name": "Barbecue Burger", "amount": 1, "price": 12.99 }
            ]
        })
    );
}

#[tokio::test]
async fn test_submit_order_rejected_status() {
    let mut store = FakeStore::new(MEALS);
    store.orders_status = StatusCode::UNAUTHORIZED;
    let config = serve(store).await;
    let submitter = OrderSubmitter::from_config(&config).unwrap();

    let items = vec![LineItem::new("m1", "Sushi", Money::from_cents(2299), 1)];
    let err = submitter.submit_order(&contact(), &items).await.unwrap_err();

    assert!(matches!(err, SubmitError::Status { status: 401 }));
    assert!(!err.is_retryable());
}

#[tokio::test]
async fn test_submit_order_status_ignored_when_unchecked() {
    let mut store = FakeStore::new(MEALS);
    store.orders_status = StatusCode::INTERNAL_SERVER_ERROR;
    let mut config = serve(store).await;
    config.orders.check_status = false;
    let submitter = OrderSubmitter::from_config(&config).unwrap();

    let items = vec![LineItem::new("m1", "Sushi", Money::from_cents(2299), 1)];
    assert!(submitter.submit_order(&contact(), &items).await.is_ok());
}

#[tokio::test]
async fn test_submit_order_unreachable() {
    let config = unreachable().await;
    let submitter = OrderSubmitter::from_config(&config).unwrap();

    let items = vec![LineItem::new("m1", "Sushi", Money::from_cents(2299), 1)];
    let err = submitter.submit_order(&contact(), &items).await.unwrap_err();
    assert!(matches!(err, SubmitError::Transport(_)));
}

// =============================================================================
// Checkout
// =============================================================================

#[tokio::test]
async fn test_checkout_success_clears_cart() {
    let store = FakeStore::new(MEALS);
    let config = serve(store.clone()).await;

    let catalog = MealCatalog::from_config(&config).unwrap();
    let meals = catalog.load_meals().await.unwrap();

    let cart = CartStore::new();
    cart.add_item(LineItem::from_meal(&meals[0], 1)).unwrap();
    cart.add_item(LineItem::from_meal(&meals[0], 2)).unwrap();
    cart.add_item(LineItem::from_meal(&meals[1], 1)).unwrap();

    let checkout = Checkout::new(cart.clone(), OrderSubmitter::from_config(&config).unwrap());
    let status = checkout.subscribe();

    let outcome = checkout.confirm(valid_form()).await.unwrap();
    match outcome {
        CheckoutOutcome::Submitted { items, total } => {
            assert_eq!(items.len(), 2);
            assert_eq!(items[0].amount, 3);
            assert_eq!(total, Money::from_cents(2299 * 3 + 1650));
        }
        other => panic!("expected Submitted, got {other:?}"),
    }

    assert!(cart.snapshot().is_empty());
    assert_eq!(*status.borrow(), SubmissionStatus::Submitted);

    let received = store.received();
    assert_eq!(received.len(), 1);
    assert_eq!(received[0].body["orderedItems"][0]["amount"], json!(3));
}

#[tokio::test]
async fn test_checkout_failure_keeps_cart() {
    let mut store = FakeStore::new(MEALS);
    store.orders_status = StatusCode::SERVICE_UNAVAILABLE;
    let config = serve(store).await;

    let cart = CartStore::new();
    cart.add_item(LineItem::new("m1", "Sushi", Money::from_cents(2299), 2)).unwrap();
    let before = cart.snapshot();

    let checkout = Checkout::new(cart.clone(), OrderSubmitter::from_config(&config).unwrap());
    let err = checkout.confirm(valid_form()).await.unwrap_err();

    assert!(matches!(err, SubmitError::Status { status: 503 }));
    assert_eq!(cart.snapshot(), before);
    assert!(matches!(checkout.status(), SubmissionStatus::Failed(_)));
}

#[tokio::test]
async fn test_checkout_invalid_form_sends_nothing() {
    let store = FakeStore::new(MEALS);
    let config = serve(store.clone()).await;

    let cart = CartStore::new();
    cart.add_item(LineItem::new("m1", "Sushi", Money::from_cents(2299), 1)).unwrap();

    let checkout = Checkout::new(cart.clone(), OrderSubmitter::from_config(&config).unwrap());
    let outcome = checkout
        .confirm(ContactForm::new("Ada", "1 Main St", "  ", "12345"))
        .await
        .unwrap();

    assert!(matches!(outcome, CheckoutOutcome::Invalid(v) if !v.city));
    assert!(store.received().is_empty());
    assert_eq!(cart.snapshot().item_count(), 1);
}
