//! The order-session state machine.
//!
//! One session owns the cart, the contact form, and the submission
//! status. The storefront drives it in three steps: `begin_submission`
//! validates and produces the wire payload, then either
//! `complete_submission` or `fail_submission` records the outcome of the
//! network call. The session itself performs no I/O.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;

use crate::cart::Cart;
use crate::catalog::Catalog;
use crate::contact::{ContactError, ContactField, ContactForm};
use crate::order::{OrderPayload, OrderRef};
use crate::types::ItemId;

/// Message shown when a submission fails in transit.
pub const SUBMISSION_FAILED_MESSAGE: &str = "Submission failed. Try again or contact us.";

/// Message shown when required contact fields are missing.
pub const MISSING_CONTACT_MESSAGE: &str = "Please fill name, phone, and email.";

/// Message shown when the cart is empty at submission.
pub const EMPTY_CART_MESSAGE: &str = "Add at least one item.";

/// Why a submission attempt was not started.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SubmitError {
    #[error("{MISSING_CONTACT_MESSAGE}")]
    MissingContact,
    #[error("{EMPTY_CART_MESSAGE}")]
    EmptyCart,
    /// A request is already in flight.
    #[error("a submission is already in progress")]
    InFlight,
    /// The session already holds a submitted order; reset it first.
    #[error("this order was already submitted")]
    AlreadySubmitted,
}

/// Where the session is in the submission flow.
///
/// A failed network attempt returns the session to `Idle` with an error
/// message recorded, so failure is not a distinct variant: it guards
/// nothing that `Idle` plus the message does not.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SubmissionState {
    /// Editing; no request has been accepted yet.
    #[default]
    Idle,
    /// One request is in flight for this payload.
    Submitting,
    /// The order went out; terminal until an explicit reset.
    Submitted {
        order_ref: OrderRef,
        /// Total captured at submission, for the payment links. The cart
        /// itself is cleared on completion and would total zero.
        total: Decimal,
    },
}

/// One customer's in-progress order.
#[derive(Debug, Clone, Default)]
pub struct OrderSession {
    cart: Cart,
    form: ContactForm,
    state: SubmissionState,
    error: Option<String>,
}

impl OrderSession {
    /// Create a fresh session.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// The current cart.
    #[must_use]
    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    /// The contact form as last edited.
    #[must_use]
    pub fn form(&self) -> &ContactForm {
        &self.form
    }

    /// The submission state.
    #[must_use]
    pub fn state(&self) -> &SubmissionState {
        &self.state
    }

    /// The user-facing error message, if one is recorded.
    #[must_use]
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Derived total of the current cart.
    #[must_use]
    pub fn total(&self, catalog: &Catalog) -> Decimal {
        self.cart.total(catalog)
    }

    /// Add a delta to one item's quantity.
    pub fn change_qty(&mut self, id: ItemId, delta: i32) {
        self.cart.change_qty(id, delta);
    }

    /// Set one item's quantity from raw input.
    pub fn set_qty(&mut self, id: ItemId, raw: &str) {
        self.cart.set_qty(id, raw);
    }

    /// Overwrite one contact-form field.
    ///
    /// # Errors
    ///
    /// Propagates [`ContactError`] for unrecognized payment methods.
    pub fn set_field(&mut self, field: ContactField, value: &str) -> Result<(), ContactError> {
        self.form.set_field(field, value)
    }

    /// Validate and start a submission attempt.
    ///
    /// On success the session moves to `Submitting` and the returned
    /// payload must be delivered exactly once, followed by a call to
    /// [`complete_submission`](Self::complete_submission) or
    /// [`fail_submission`](Self::fail_submission).
    ///
    /// # Errors
    ///
    /// Returns [`SubmitError`] without any state change to the cart or
    /// form when the contact fields are incomplete, the cart is empty, or
    /// the session is not idle. Validation failures record their message
    /// on the session.
    pub fn begin_submission(
        &mut self,
        catalog: &Catalog,
        now: DateTime<Utc>,
    ) -> Result<OrderPayload, SubmitError> {
        match self.state {
            SubmissionState::Submitting => return Err(SubmitError::InFlight),
            SubmissionState::Submitted { .. } => return Err(SubmitError::AlreadySubmitted),
            SubmissionState::Idle => {}
        }

        self.error = None;
        if !self.form.has_required_fields() {
            self.error = Some(MISSING_CONTACT_MESSAGE.to_string());
            return Err(SubmitError::MissingContact);
        }
        if self.cart.is_empty() {
            self.error = Some(EMPTY_CART_MESSAGE.to_string());
            return Err(SubmitError::EmptyCart);
        }

        let order_ref = OrderRef::from_timestamp(now);
        let payload = OrderPayload::new(&self.form, &self.cart, catalog, order_ref, now);
        self.state = SubmissionState::Submitting;
        Ok(payload)
    }

    /// Record a delivered submission: clears the cart and any error.
    pub fn complete_submission(&mut self, order_ref: OrderRef, total: Decimal) {
        self.state = SubmissionState::Submitted { order_ref, total };
        self.cart.clear();
        self.error = None;
    }

    /// Record a failed submission: back to `Idle`, cart and form intact,
    /// generic message recorded. The underlying cause is for the caller
    /// to log, not for the customer to see.
    pub fn fail_submission(&mut self) {
        self.state = SubmissionState::Idle;
        self.error = Some(SUBMISSION_FAILED_MESSAGE.to_string());
    }

    /// "Place another order": back to `Idle` with an empty cart. Contact
    /// fields keep their previous values.
    pub fn reset(&mut self) {
        self.state = SubmissionState::Idle;
        self.cart.clear();
        self.error = None;
    }
}
