//! Contact form route handlers.

use axum::{Json, extract::State};
use serde::Deserialize;
use tracing::instrument;

use pie_orders_core::contact::{ContactField, ContactForm};

use crate::error::Result;
use crate::state::AppState;

/// Field-edit form data.
#[derive(Debug, Deserialize)]
pub struct SetFieldForm {
    pub field: ContactField,
    pub value: String,
}

/// Overwrite one contact-form field.
///
/// POST /contact
///
/// Nothing is validated here beyond the payment-method enum; required
/// fields are only checked at submission time.
#[instrument(skip(state, form), fields(field = ?form.field))]
pub async fn set_field(
    State(state): State<AppState>,
    Json(form): Json<SetFieldForm>,
) -> Result<Json<ContactForm>> {
    let mut session = state.session().lock().await;
    session.set_field(form.field, &form.value)?;
    Ok(Json(session.form().clone()))
}
