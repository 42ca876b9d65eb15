//! Order-session snapshot route handler.

use axum::{Json, extract::State};
use serde::Serialize;
use tracing::instrument;

use pie_orders_core::catalog::Catalog;
use pie_orders_core::contact::ContactForm;
use pie_orders_core::payment::{PaymentHandles, PaymentLinks, order_note};
use pie_orders_core::session::{OrderSession, SubmissionState};

use crate::routes::cart::CartView;
use crate::state::AppState;

/// Submission status display data.
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "state", rename_all = "camelCase", rename_all_fields = "camelCase")]
pub enum StatusView {
    Idle,
    Submitting,
    Submitted { order_ref: String },
}

impl From<&SubmissionState> for StatusView {
    fn from(state: &SubmissionState) -> Self {
        match state {
            SubmissionState::Idle => Self::Idle,
            SubmissionState::Submitting => Self::Submitting,
            SubmissionState::Submitted { order_ref, .. } => Self::Submitted {
                order_ref: order_ref.to_string(),
            },
        }
    }
}

/// Full session snapshot for the client.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionView {
    pub cart: CartView,
    pub form: ContactForm,
    pub status: StatusView,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    /// Present once the order is submitted, built from the total captured
    /// at submission (the live cart is empty by then).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment_links: Option<PaymentLinks>,
}

impl SessionView {
    /// Render a session snapshot.
    #[must_use]
    pub fn build(session: &OrderSession, catalog: &Catalog, handles: &PaymentHandles) -> Self {
        let payment_links = match session.state() {
            SubmissionState::Submitted { order_ref, total } => Some(PaymentLinks::build(
                handles,
                *total,
                &order_note(order_ref, &session.form().customer),
            )),
            SubmissionState::Idle | SubmissionState::Submitting => None,
        };

        Self {
            cart: CartView::build(session.cart(), catalog),
            form: session.form().clone(),
            status: session.state().into(),
            error: session.error().map(String::from),
            payment_links,
        }
    }
}

/// Current order-session snapshot.
#[instrument(skip(state))]
pub async fn show(State(state): State<AppState>) -> Json<SessionView> {
    let session = state.session().lock().await;
    Json(SessionView::build(
        &session,
        state.catalog(),
        &state.config().payment,
    ))
}
