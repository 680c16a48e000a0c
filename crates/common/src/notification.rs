//! Notification ledgers and the self-validation capability.
//!
//! Validation in the payment context never fails fast. Every rule that is
//! broken appends one [`Notification`] to a [`Ledger`]; callers keep building
//! and merge all ledgers at the end, so a rejected request reports every
//! violated rule at once.

use serde::{Deserialize, Serialize};

/// A single violated rule, keyed by the field it concerns.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Notification {
    key: String,
    message: String,
}

impl Notification {
    /// Creates a new notification.
    pub fn new(key: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            message: message.into(),
        }
    }

    /// Returns the key of the field that broke the rule (e.g. `Name.FirstName`).
    pub fn key(&self) -> &str {
        &self.key
    }

    /// Returns the human-readable message.
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl std::fmt::Display for Notification {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.key, self.message)
    }
}

/// Append-only, ordered collection of notifications.
///
/// A ledger is valid iff it is empty. Entries are never removed, and merging
/// copies entries in their original order, so the same input always produces
/// the same sequence.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Ledger {
    entries: Vec<Notification>,
}

impl Ledger {
    /// Creates an empty ledger.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a notification.
    pub fn add(&mut self, key: impl Into<String>, message: impl Into<String>) {
        self.entries.push(Notification::new(key, message));
    }

    /// Appends `message` under `key` when `condition` is false.
    ///
    /// Returns the condition so callers can chain dependent checks if needed.
    pub fn require(
        &mut self,
        condition: bool,
        key: impl Into<String>,
        message: impl Into<String>,
    ) -> bool {
        if !condition {
            self.add(key, message);
        }
        condition
    }

    /// Copies every entry of `other` onto the end of this ledger.
    pub fn merge(&mut self, other: &Ledger) {
        self.entries.extend(other.entries.iter().cloned());
    }

    /// Asks `source` to report its violations into this ledger.
    pub fn absorb<V: Validatable + ?Sized>(&mut self, source: &V) {
        source.report(self);
    }

    /// Returns true when no rule has been violated.
    pub fn is_valid(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns the number of recorded notifications.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true when the ledger holds no notifications.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns true if any notification was recorded under `key`.
    pub fn contains_key(&self, key: &str) -> bool {
        self.entries.iter().any(|n| n.key == key)
    }

    /// Iterates over the notifications in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &Notification> {
        self.entries.iter()
    }

    /// Returns the notifications as a slice.
    pub fn as_slice(&self) -> &[Notification] {
        &self.entries
    }

    /// Consumes the ledger, returning its notifications.
    pub fn into_vec(self) -> Vec<Notification> {
        self.entries
    }
}

impl<'a> IntoIterator for &'a Ledger {
    type Item = &'a Notification;
    type IntoIter = std::slice::Iter<'a, Notification>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

/// Capability shared by every value object and entity in the payment context.
///
/// Implementors run all of their rules unconditionally and report every
/// violation; reporting never short-circuits and never fails.
pub trait Validatable {
    /// Appends this object's violations to `ledger`.
    fn report(&self, ledger: &mut Ledger);

    /// Returns a fresh ledger holding this object's violations.
    fn notifications(&self) -> Ledger {
        let mut ledger = Ledger::new();
        self.report(&mut ledger);
        ledger
    }

    /// Returns true when the object reports no violations.
    fn is_valid(&self) -> bool {
        self.notifications().is_valid()
    }
}

impl Validatable for Ledger {
    fn report(&self, ledger: &mut Ledger) {
        ledger.merge(self);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Positive(i32);

    impl Validatable for Positive {
        fn report(&self, ledger: &mut Ledger) {
            ledger.require(self.0 > 0, "Positive.Value", "value must be positive");
        }
    }

    #[test]
    fn test_new_ledger_is_valid() {
        let ledger = Ledger::new();
        assert!(ledger.is_valid());
        assert!(ledger.is_empty());
        assert_eq!(ledger.len(), 0);
    }

    #[test]
    fn test_add_makes_ledger_invalid() {
        let mut ledger = Ledger::new();
        ledger.add("Email.Address", "invalid email address");

        assert!(!ledger.is_valid());
        assert!(ledger.contains_key("Email.Address"));
        assert!(!ledger.contains_key("Email"));
    }

    #[test]
    fn test_require_only_records_failures() {
        let mut ledger = Ledger::new();
        assert!(ledger.require(true, "A", "never recorded"));
        assert!(!ledger.require(false, "B", "recorded"));

        let keys: Vec<_> = ledger.iter().map(Notification::key).collect();
        assert_eq!(keys, vec!["B"]);
    }

    #[test]
    fn test_merge_appends_in_order_and_keeps_source() {
        let mut parent = Ledger::new();
        parent.add("Document", "document already in use");

        let mut child = Ledger::new();
        child.add("Name.FirstName", "too short");
        child.add("Name.LastName", "too short");

        parent.merge(&child);

        let keys: Vec<_> = parent.iter().map(Notification::key).collect();
        assert_eq!(keys, vec!["Document", "Name.FirstName", "Name.LastName"]);
        assert_eq!(child.len(), 2);
    }

    #[test]
    fn test_absorb_collects_from_validatable() {
        let mut ledger = Ledger::new();
        ledger.absorb(&Positive(1));
        ledger.absorb(&Positive(-1));
        ledger.absorb(&Positive(0));

        assert_eq!(ledger.len(), 2);
        assert!(Positive(5).is_valid());
        assert!(!Positive(-5).is_valid());
    }

    #[test]
    fn test_notification_display() {
        let n = Notification::new("Payment.TotalPaid", "total paid must not be negative");
        assert_eq!(n.to_string(), "Payment.TotalPaid: total paid must not be negative");
    }

    #[test]
    fn test_ledger_serializes_as_array() {
        let mut ledger = Ledger::new();
        ledger.add("Email", "email already in use");

        let json = serde_json::to_value(&ledger).unwrap();
        assert_eq!(
            json,
            serde_json::json!([{ "key": "Email", "message": "email already in use" }])
        );
    }
}
