//! Subscription entity.

use chrono::{DateTime, Utc};
use common::{EntityId, Ledger, Validatable};
use serde::Serialize;

use super::Payment;

/// A period of access to the service, paid by one or more payments.
///
/// A `None` expire date means the subscription never expires.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Subscription {
    id: EntityId,
    created_at: DateTime<Utc>,
    last_update: DateTime<Utc>,
    expire_date: Option<DateTime<Utc>>,
    active: bool,
    payments: Vec<Payment>,
}

impl Subscription {
    /// Creates an active subscription with no payments.
    pub fn new(expire_date: Option<DateTime<Utc>>) -> Self {
        Self::starting_at(Utc::now(), expire_date)
    }

    /// Creates an active subscription as of `now`.
    pub fn starting_at(now: DateTime<Utc>, expire_date: Option<DateTime<Utc>>) -> Self {
        Self {
            id: EntityId::new(),
            created_at: now,
            last_update: now,
            expire_date,
            active: true,
            payments: Vec::new(),
        }
    }

    /// Appends a payment.
    ///
    /// The payment is not validated here; its ledger must be merged by the
    /// caller.
    pub fn add_payment(&mut self, payment: Payment) {
        self.payments.push(payment);
    }

    /// Marks the subscription active.
    pub fn activate(&mut self, at: DateTime<Utc>) {
        self.active = true;
        self.last_update = at;
    }

    /// Marks the subscription inactive.
    pub fn inactivate(&mut self, at: DateTime<Utc>) {
        self.active = false;
        self.last_update = at;
    }

    pub fn id(&self) -> EntityId {
        self.id
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn last_update(&self) -> DateTime<Utc> {
        self.last_update
    }

    pub fn expire_date(&self) -> Option<DateTime<Utc>> {
        self.expire_date
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    pub fn payments(&self) -> &[Payment] {
        &self.payments
    }
}

impl Validatable for Subscription {
    fn report(&self, ledger: &mut Ledger) {
        ledger.require(
            !self.payments.is_empty(),
            "Subscription.Payments",
            "subscription must contain at least one payment",
        );
    }
}
