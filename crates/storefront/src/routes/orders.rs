//! Order submission route handlers.

use axum::{Json, extract::State};
use chrono::Utc;
use rust_decimal::Decimal;
use serde::Serialize;
use tracing::instrument;

use pie_orders_core::payment::{PaymentLinks, order_note};

use crate::error::{AppError, Result};
use crate::routes::session::SessionView;
use crate::state::AppState;

/// Response for a delivered order.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SubmitResponse {
    pub success: bool,
    pub order_ref: String,
    #[serde(with = "rust_decimal::serde::float")]
    pub total: Decimal,
    pub payment_links: PaymentLinks,
}

/// Submit the current order.
///
/// POST /orders
///
/// The session lock is held across the outbound request: exactly one
/// submission can be in flight, and cart or form edits wait until it
/// settles. On transport failure the session keeps its cart and form so
/// the customer can simply retry.
#[instrument(skip(state))]
pub async fn submit(State(state): State<AppState>) -> Result<Json<SubmitResponse>> {
    let mut session = state.session().lock().await;
    let payload = session.begin_submission(state.catalog(), Utc::now())?;

    match state.intake().submit(&payload).await {
        Ok(()) => {
            session.complete_submission(payload.order_ref.clone(), payload.total);
            let note = order_note(&payload.order_ref, &payload.customer);
            let payment_links = PaymentLinks::build(&state.config().payment, payload.total, &note);

            tracing::info!(
                order_ref = %payload.order_ref,
                total = %payload.total,
                items = payload.items.len(),
                "order submitted"
            );

            Ok(Json(SubmitResponse {
                success: true,
                order_ref: payload.order_ref.to_string(),
                total: payload.total,
                payment_links,
            }))
        }
        Err(err) => {
            session.fail_submission();
            Err(AppError::Intake(err))
        }
    }
}

/// Start a new order after a submitted one.
///
/// POST /orders/reset
///
/// Empties the cart and returns to Idle; contact fields keep their
/// previous values.
#[instrument(skip(state))]
pub async fn reset(State(state): State<AppState>) -> Json<SessionView> {
    let mut session = state.session().lock().await;
    session.reset();
    Json(SessionView::build(
        &session,
        state.catalog(),
        &state.config().payment,
    ))
}
