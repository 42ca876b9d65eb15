//! Pie Orders Core - domain types and order-session logic.
//!
//! This crate holds everything the storefront needs that is not I/O:
//! the static catalog, the cart, the contact form, the order-session
//! state machine, the wire payload, and the payment-link builder.
//!
//! # Architecture
//!
//! The core crate contains only types and pure logic - no HTTP clients,
//! no configuration loading, no runtime. The `storefront` crate owns all
//! of those and drives the session through the operations defined here.
//!
//! # Modules
//!
//! - [`types`] - Newtype wrappers for ids and prices
//! - [`catalog`] - The fixed product catalog
//! - [`cart`] - Item-quantity cart with derived totals
//! - [`contact`] - Contact form and payment-method selection
//! - [`order`] - Order references and the intake wire payload
//! - [`session`] - The order-session state machine
//! - [`payment`] - Deterministic payment deep-link builder

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod cart;
pub mod catalog;
pub mod contact;
pub mod order;
pub mod payment;
pub mod session;
pub mod types;

pub use types::*;
