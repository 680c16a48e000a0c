//! Command handling infrastructure.

use chrono::{DateTime, Utc};
use common::{EntityId, Ledger, Notification};
use serde::Serialize;

use crate::error::DomainError;

/// Outcome of a command.
///
/// Rejections are ordinary values: `success` is false and `notifications`
/// lists every rule that was broken. Only collaborator faults are returned as
/// [`DomainError`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CommandResult {
    /// Whether the command took effect.
    pub success: bool,

    /// Human-readable summary.
    pub message: String,

    /// Violated rules, in the order they were merged.
    pub notifications: Vec<Notification>,

    /// Details of what was created, present only on success.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<SubscriptionReceipt>,
}

impl CommandResult {
    /// Creates a successful result.
    pub fn success(message: impl Into<String>, data: SubscriptionReceipt) -> Self {
        Self {
            success: true,
            message: message.into(),
            notifications: Vec::new(),
            data: Some(data),
        }
    }

    /// Creates a failed result carrying the given notifications.
    pub fn failure(message: impl Into<String>, notifications: Ledger) -> Self {
        Self {
            success: false,
            message: message.into(),
            notifications: notifications.into_vec(),
            data: None,
        }
    }

    /// Returns true if any notification was recorded under `key`.
    pub fn has_notification(&self, key: &str) -> bool {
        self.notifications.iter().any(|n| n.key() == key)
    }
}

/// Identifiers of a newly created subscription.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SubscriptionReceipt {
    pub student_id: EntityId,
    pub subscription_id: EntityId,
    pub payment_number: String,
    pub expire_date: Option<DateTime<Utc>>,
}

/// Handler for a command of type `C`.
pub trait Handler<C> {
    /// Runs the command to completion.
    ///
    /// Business-rule rejections are returned as an unsuccessful
    /// [`CommandResult`]; collaborator faults are returned as errors.
    fn handle(&self, command: C) -> Result<CommandResult, DomainError>;
}
