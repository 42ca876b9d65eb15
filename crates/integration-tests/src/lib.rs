//! Integration test harness for Pie Orders.
//!
//! Spins up two real listeners per test, both on ephemeral ports: a stub
//! order-intake endpoint that records every JSON payload it receives, and
//! the storefront itself pointed at that stub. Tests drive the storefront
//! with `reqwest` exactly as a browser client would.

#![allow(clippy::unwrap_used)]

use std::sync::Arc;

use axum::{Json, Router, extract::State, http::StatusCode, routing::post};
use tokio::net::TcpListener;
use tokio::sync::Mutex;

use pie_orders_core::catalog::Catalog;
use pie_orders_core::payment::PaymentHandles;
use pie_orders_storefront::config::StorefrontConfig;
use pie_orders_storefront::routes;
use pie_orders_storefront::state::AppState;

/// Payloads recorded by the stub intake endpoint.
type ReceivedOrders = Arc<Mutex<Vec<serde_json::Value>>>;

/// A stub order-intake endpoint bound to an ephemeral port.
pub struct IntakeStub {
    /// Full URL to hand to the storefront configuration.
    pub url: String,
    received: ReceivedOrders,
}

impl IntakeStub {
    /// Start the stub and begin recording payloads.
    pub async fn spawn() -> Self {
        let received: ReceivedOrders = Arc::new(Mutex::new(Vec::new()));
        let app = Router::new()
            .route("/intake", post(record))
            .with_state(Arc::clone(&received));

        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .expect("bind stub listener");
        let addr = listener.local_addr().expect("stub addr");
        tokio::spawn(async move {
            axum::serve(listener, app).await.expect("serve stub");
        });

        Self {
            url: format!("http://{addr}/intake"),
            received,
        }
    }

    /// A URL nothing listens on: bind an ephemeral port, then drop it.
    pub async fn unreachable_url() -> String {
        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .expect("bind probe listener");
        let addr = listener.local_addr().expect("probe addr");
        drop(listener);
        format!("http://{addr}/intake")
    }

    /// Everything the stub has received so far.
    pub async fn received(&self) -> Vec<serde_json::Value> {
        self.received.lock().await.clone()
    }
}

async fn record(
    State(received): State<ReceivedOrders>,
    Json(body): Json<serde_json::Value>,
) -> StatusCode {
    received.lock().await.push(body);
    StatusCode::OK
}

/// A storefront instance serving on an ephemeral port.
pub struct TestContext {
    pub client: reqwest::Client,
    pub base_url: String,
}

impl TestContext {
    /// Start the storefront against the given intake URL.
    pub async fn spawn(intake_url: &str) -> Self {
        let config = StorefrontConfig {
            host: "127.0.0.1".parse().expect("loopback"),
            port: 0,
            intake_url: intake_url.parse().expect("intake url"),
            payment: PaymentHandles {
                venmo: "Pie-Stand".to_string(),
                cashapp: "$piestand".to_string(),
            },
        };
        let state = AppState::new(config, Catalog::builtin()).expect("app state");
        let app = routes::routes().with_state(state);

        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .expect("bind app listener");
        let addr = listener.local_addr().expect("app addr");
        tokio::spawn(async move {
            axum::serve(listener, app).await.expect("serve app");
        });

        Self {
            client: reqwest::Client::new(),
            base_url: format!("http://{addr}"),
        }
    }

    /// Absolute URL for a route path.
    #[must_use]
    pub fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }
}
