//! Contact form and payment-method selection.
//!
//! Fields are overwritten one at a time as the customer types; nothing is
//! validated until submission, where the session requires name, phone, and
//! email to be non-empty.

use core::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Errors from editing the contact form.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ContactError {
    /// The payment-method value was not recognized.
    #[error("unknown payment method: {0}")]
    UnknownPayMethod(String),
}

/// How the customer intends to pay.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum PayMethod {
    #[default]
    Venmo,
    #[serde(rename = "Cash App")]
    CashApp,
}

impl fmt::Display for PayMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Venmo => f.write_str("Venmo"),
            Self::CashApp => f.write_str("Cash App"),
        }
    }
}

impl FromStr for PayMethod {
    type Err = ContactError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase();
        match normalized.as_str() {
            "venmo" => Ok(Self::Venmo),
            "cash app" | "cashapp" => Ok(Self::CashApp),
            _ => Err(ContactError::UnknownPayMethod(s.to_string())),
        }
    }
}

/// Selector for one contact-form field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ContactField {
    Customer,
    Phone,
    Email,
    Notes,
    PayMethod,
}

/// The customer's contact details for one order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactForm {
    pub customer: String,
    pub phone: String,
    pub email: String,
    pub notes: String,
    pub pay_method: PayMethod,
}

impl ContactForm {
    /// Overwrite one named field with raw input.
    ///
    /// # Errors
    ///
    /// Returns [`ContactError::UnknownPayMethod`] when setting the payment
    /// method to an unrecognized value; text fields accept anything.
    pub fn set_field(&mut self, field: ContactField, value: &str) -> Result<(), ContactError> {
        match field {
            ContactField::Customer => self.customer = value.to_string(),
            ContactField::Phone => self.phone = value.to_string(),
            ContactField::Email => self.email = value.to_string(),
            ContactField::Notes => self.notes = value.to_string(),
            ContactField::PayMethod => self.pay_method = value.parse()?,
        }
        Ok(())
    }

    /// Whether customer, phone, and email are all filled in.
    ///
    /// Whitespace-only input counts as empty.
    #[must_use]
    pub fn has_required_fields(&self) -> bool {
        !self.customer.trim().is_empty()
            && !self.phone.trim().is_empty()
            && !self.email.trim().is_empty()
    }
}
