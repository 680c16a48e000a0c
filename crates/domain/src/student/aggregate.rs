//! Student aggregate root.

use common::{EntityId, Ledger, Validatable};
use serde::Serialize;

use super::{Document, Email, Name, Subscription};

/// Student aggregate root.
///
/// Owns its subscriptions, which in turn own their payments. The ledger
/// holds the violations of the student's name, document and email, captured
/// at construction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Student {
    id: EntityId,
    name: Name,
    document: Document,
    email: Email,
    subscriptions: Vec<Subscription>,
    #[serde(skip)]
    notifications: Ledger,
}

impl Student {
    pub fn new(name: Name, document: Document, email: Email) -> Self {
        let mut notifications = Ledger::new();
        notifications.absorb(&name);
        notifications.absorb(&document);
        notifications.absorb(&email);

        Self {
            id: EntityId::new(),
            name,
            document,
            email,
            subscriptions: Vec::new(),
            notifications,
        }
    }

    /// Appends a subscription to the student's history.
    ///
    /// The subscription is not validated here; its ledger must be merged by
    /// the caller.
    pub fn add_subscription(&mut self, subscription: Subscription) {
        self.subscriptions.push(subscription);
    }
}

// Query methods
impl Student {
    pub fn id(&self) -> EntityId {
        self.id
    }

    pub fn name(&self) -> &Name {
        &self.name
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    pub fn email(&self) -> &Email {
        &self.email
    }

    /// Returns the subscription history in insertion order.
    pub fn subscriptions(&self) -> &[Subscription] {
        &self.subscriptions
    }

    /// Returns the most recently added active subscription, for display.
    pub fn current_subscription(&self) -> Option<&Subscription> {
        self.subscriptions.iter().rev().find(|s| s.is_active())
    }
}

impl Validatable for Student {
    fn report(&self, ledger: &mut Ledger) {
        ledger.merge(&self.notifications);
    }
}

#[cfg(test)]
mod tests {
    use chrono::Utc;

    use super::*;
    use crate::student::DocumentType;

    fn student(first_name: &str, document: &str, email: &str) -> Student {
        Student::new(
            Name::new(first_name, "Wayne"),
            Document::new(document, DocumentType::Cpf),
            Email::new(email),
        )
    }

    #[test]
    fn test_valid_student() {
        let student = student("Bruce", "11111111111", "bruce@wayne.com");
        assert!(student.is_valid());
        assert_eq!(student.name().to_string(), "Bruce Wayne");
        assert!(student.subscriptions().is_empty());
        assert!(student.current_subscription().is_none());
    }

    #[test]
    fn test_student_composes_value_object_violations_in_order() {
        let student = student("B", "123", "bruce");
        let keys: Vec<_> = student
            .notifications()
            .iter()
            .map(|n| n.key().to_string())
            .collect();

        assert_eq!(keys, vec!["Name.FirstName", "Document.Number", "Email.Address"]);
    }

    #[test]
    fn test_add_subscription_appends_without_validating() {
        let mut student = student("Bruce", "11111111111", "bruce@wayne.com");
        student.add_subscription(Subscription::new(None));

        assert_eq!(student.subscriptions().len(), 1);
        assert!(student.is_valid());
    }

    #[test]
    fn test_current_subscription_is_latest_active() {
        let mut student = student("Bruce", "11111111111", "bruce@wayne.com");

        let first = Subscription::new(None);
        let first_id = first.id();
        let mut second = Subscription::new(None);
        second.inactivate(Utc::now());

        student.add_subscription(first);
        student.add_subscription(second);

        assert_eq!(student.current_subscription().map(Subscription::id), Some(first_id));

        let third = Subscription::new(None);
        let third_id = third.id();
        student.add_subscription(third);
        assert_eq!(student.current_subscription().map(Subscription::id), Some(third_id));
    }
}
