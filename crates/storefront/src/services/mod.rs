//! Outbound service clients.

pub mod intake;

pub use intake::{IntakeClient, IntakeError};
