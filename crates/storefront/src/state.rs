//! Application state shared across handlers.

use std::sync::Arc;

use tokio::sync::Mutex;

use pie_orders_core::catalog::Catalog;
use pie_orders_core::session::OrderSession;

use crate::config::StorefrontConfig;
use crate::services::{IntakeClient, IntakeError};

/// Application state shared across all handlers.
///
/// This struct is cheaply cloneable via `Arc` and provides access to the
/// configuration, the read-only catalog, the intake client, and the one
/// mutable order session.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    config: StorefrontConfig,
    catalog: Catalog,
    intake: IntakeClient,
    session: Mutex<OrderSession>,
}

impl AppState {
    /// Create a new application state.
    ///
    /// # Errors
    ///
    /// Returns an error if the intake HTTP client fails to build.
    pub fn new(config: StorefrontConfig, catalog: Catalog) -> Result<Self, IntakeError> {
        let intake = IntakeClient::new(config.intake_url.clone())?;

        Ok(Self {
            inner: Arc::new(AppStateInner {
                config,
                catalog,
                intake,
                session: Mutex::new(OrderSession::new()),
            }),
        })
    }

    /// Get a reference to the storefront configuration.
    #[must_use]
    pub fn config(&self) -> &StorefrontConfig {
        &self.inner.config
    }

    /// Get a reference to the product catalog.
    #[must_use]
    pub fn catalog(&self) -> &Catalog {
        &self.inner.catalog
    }

    /// Get a reference to the order-intake client.
    #[must_use]
    pub fn intake(&self) -> &IntakeClient {
        &self.inner.intake
    }

    /// The single order session.
    ///
    /// The submit handler holds this lock across its outbound request,
    /// which is what keeps submissions single-flight and excludes edits
    /// while one is in progress.
    #[must_use]
    pub fn session(&self) -> &Mutex<OrderSession> {
        &self.inner.session
    }
}
