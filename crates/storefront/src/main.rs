//! Pie Orders Storefront - order-capture service.
//!
//! Serves the fixed product catalog and a single order session over a
//! small JSON API, and delivers submitted orders to the configured
//! intake endpoint.
//!
//! # Architecture
//!
//! - Axum web framework over the session operations in `pie-orders-core`
//! - One in-memory order session; no database, nothing persisted
//! - One outbound POST per submission, via the intake client
//! - Payment deep-links generated per submitted order, never invoked

#![cfg_attr(not(test), forbid(unsafe_code))]

use tower_http::{cors::CorsLayer, trace::TraceLayer};

use pie_orders_core::catalog::Catalog;
use pie_orders_storefront::config::StorefrontConfig;
use pie_orders_storefront::routes;
use pie_orders_storefront::state::AppState;

#[tokio::main]
async fn main() {
    // Load configuration from environment
    let config = StorefrontConfig::from_env().expect("Failed to load configuration");

    // Initialize tracing with EnvFilter
    // Defaults to info level for our crate if RUST_LOG is not set
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "pie_orders_storefront=info,tower_http=debug".into());
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    // Build application state around the built-in catalog
    let state = AppState::new(config.clone(), Catalog::builtin())
        .expect("Failed to initialize application state");
    tracing::info!(
        items = state.catalog().len(),
        intake = %state.intake().endpoint(),
        "catalog loaded"
    );

    // Build router
    let app = routes::routes()
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state);

    // Start server
    let addr = config.socket_addr();
    tracing::info!("storefront listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("Failed to bind to address");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .expect("Server error");
}

/// Wait for shutdown signal (Ctrl+C or SIGTERM).
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }

    tracing::info!("Shutdown signal received, starting graceful shutdown");
}
