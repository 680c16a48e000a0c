//! Shared kernel for the subscription payment context.
//!
//! - [`EntityId`] identifies students, subscriptions and payments.
//! - [`Ledger`] accumulates [`Notification`]s without ever failing, and
//!   [`Validatable`] is the capability every value object and entity
//!   implements to report its violations into a ledger.

pub mod notification;
pub mod types;

pub use notification::{Ledger, Notification, Validatable};
pub use types::EntityId;
