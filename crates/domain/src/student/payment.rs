//! Payment entity.

use chrono::{DateTime, Utc};
use common::{EntityId, Ledger, Validatable};
use serde::Serialize;
use uuid::Uuid;

use super::{Address, Document, Email, Money};

/// Length of the generated payment reference number.
const PAYMENT_NUMBER_LEN: usize = 10;

/// How a payment was made, with the data specific to that method.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "method", rename_all = "snake_case")]
pub enum PaymentMethod {
    /// Bank slip.
    Boleto {
        bar_code: String,
        boleto_number: String,
    },

    /// Third-party wallet.
    #[serde(rename = "paypal")]
    PayPal { transaction_code: String },
}

impl PaymentMethod {
    /// Returns the method name as a string.
    pub fn as_str(&self) -> &'static str {
        match self {
            PaymentMethod::Boleto { .. } => "boleto",
            PaymentMethod::PayPal { .. } => "paypal",
        }
    }
}

/// Amounts, dates and payer shared by every payment method.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaymentTerms {
    pub paid_date: DateTime<Utc>,
    pub expire_date: DateTime<Utc>,
    pub total: Money,
    pub total_paid: Money,
    pub payer: String,
}

/// A payment towards a subscription.
///
/// The ledger holds the violations of the payer document, address and email
/// followed by the payment's own rules.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Payment {
    id: EntityId,
    number: String,
    method: PaymentMethod,
    paid_date: DateTime<Utc>,
    expire_date: DateTime<Utc>,
    total: Money,
    total_paid: Money,
    payer: String,
    document: Document,
    address: Address,
    email: Email,
    #[serde(skip)]
    notifications: Ledger,
}

impl Payment {
    pub fn new(
        method: PaymentMethod,
        terms: PaymentTerms,
        document: Document,
        address: Address,
        email: Email,
    ) -> Self {
        let mut notifications = Ledger::new();
        notifications.absorb(&document);
        notifications.absorb(&address);
        notifications.absorb(&email);
        notifications.require(
            terms.expire_date >= terms.paid_date,
            "Payment.ExpireDate",
            "expire date must not be before paid date",
        );
        notifications.require(
            !terms.total_paid.is_negative(),
            "Payment.TotalPaid",
            "total paid must not be negative",
        );

        Self {
            id: EntityId::new(),
            number: generate_number(),
            method,
            paid_date: terms.paid_date,
            expire_date: terms.expire_date,
            total: terms.total,
            total_paid: terms.total_paid,
            payer: terms.payer,
            document,
            address,
            email,
            notifications,
        }
    }

    /// Creates a bank-slip payment.
    pub fn boleto(
        bar_code: impl Into<String>,
        boleto_number: impl Into<String>,
        terms: PaymentTerms,
        document: Document,
        address: Address,
        email: Email,
    ) -> Self {
        let method = PaymentMethod::Boleto {
            bar_code: bar_code.into(),
            boleto_number: boleto_number.into(),
        };
        Self::new(method, terms, document, address, email)
    }

    /// Creates a wallet payment.
    pub fn paypal(
        transaction_code: impl Into<String>,
        terms: PaymentTerms,
        document: Document,
        address: Address,
        email: Email,
    ) -> Self {
        let method = PaymentMethod::PayPal {
            transaction_code: transaction_code.into(),
        };
        Self::new(method, terms, document, address, email)
    }

    pub fn id(&self) -> EntityId {
        self.id
    }

    /// Returns the 10-character reference number shown to the payer.
    pub fn number(&self) -> &str {
        &self.number
    }

    pub fn method(&self) -> &PaymentMethod {
        &self.method
    }

    pub fn paid_date(&self) -> DateTime<Utc> {
        self.paid_date
    }

    pub fn expire_date(&self) -> DateTime<Utc> {
        self.expire_date
    }

    pub fn total(&self) -> Money {
        self.total
    }

    pub fn total_paid(&self) -> Money {
        self.total_paid
    }

    pub fn payer(&self) -> &str {
        &self.payer
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    pub fn address(&self) -> &Address {
        &self.address
    }

    pub fn email(&self) -> &Email {
        &self.email
    }
}

impl Validatable for Payment {
    fn report(&self, ledger: &mut Ledger) {
        ledger.merge(&self.notifications);
    }
}

fn generate_number() -> String {
    let mut number = Uuid::new_v4().simple().to_string();
    number.truncate(PAYMENT_NUMBER_LEN);
    number.to_uppercase()
}

#[cfg(test)]
mod tests {
    use chrono::Duration;

    use super::*;
    use crate::student::DocumentType;

    fn terms(paid_offset_days: i64, total_paid: i64) -> PaymentTerms {
        let now = Utc::now();
        PaymentTerms {
            paid_date: now + Duration::days(paid_offset_days),
            expire_date: now,
            total: Money::from_units(60),
            total_paid: Money::from_units(total_paid),
            payer: "WAYNE CORP".to_string(),
        }
    }

    fn address() -> Address {
        Address::new("Fortaleza", "166", "New City", "SBO", "SP", "Brazil", "13454424")
    }

    fn paypal(terms: PaymentTerms) -> Payment {
        Payment::paypal(
            "TX-1",
            terms,
            Document::new("12345678911", DocumentType::Cpf),
            address(),
            Email::new("batman@dc.com"),
        )
    }

    fn keys(payment: &Payment) -> Vec<String> {
        payment
            .notifications()
            .iter()
            .map(|n| n.key().to_string())
            .collect()
    }

    #[test]
    fn test_valid_payment() {
        let payment = paypal(terms(-1, 60));
        assert!(payment.is_valid());
        assert_eq!(payment.method().as_str(), "paypal");
        assert_eq!(payment.payer(), "WAYNE CORP");
    }

    #[test]
    fn test_same_paid_and_expire_date_is_valid() {
        assert!(paypal(terms(0, 60)).is_valid());
    }

    #[test]
    fn test_paid_after_expire_is_invalid() {
        let payment = paypal(terms(1, 60));
        assert_eq!(keys(&payment), vec!["Payment.ExpireDate"]);
    }

    #[test]
    fn test_negative_total_paid_is_invalid() {
        let payment = paypal(terms(-1, -1));
        assert_eq!(keys(&payment), vec!["Payment.TotalPaid"]);
    }

    #[test]
    fn test_zero_total_paid_is_valid() {
        assert!(paypal(terms(-1, 0)).is_valid());
    }

    #[test]
    fn test_constituent_violations_come_first() {
        let payment = Payment::boleto(
            "123456789",
            "1234567890",
            terms(1, -5),
            Document::new("123", DocumentType::Cpf),
            Address::new("", "166", "New City", "SBO", "SP", "Brazil", "13454424"),
            Email::new("not-an-email"),
        );

        assert_eq!(
            keys(&payment),
            vec![
                "Document.Number",
                "Address.Street",
                "Email.Address",
                "Payment.ExpireDate",
                "Payment.TotalPaid",
            ]
        );
    }

    #[test]
    fn test_payment_number_format() {
        let payment = paypal(terms(-1, 60));
        assert_eq!(payment.number().len(), PAYMENT_NUMBER_LEN);
        assert!(
            payment
                .number()
                .chars()
                .all(|c| c.is_ascii_digit() || c.is_ascii_uppercase())
        );
        assert_ne!(payment.number(), paypal(terms(-1, 60)).number());
    }

    #[test]
    fn test_boleto_method_fields() {
        let payment = Payment::boleto(
            "123456789",
            "1234567890",
            terms(-1, 60),
            Document::new("12345678911", DocumentType::Cpf),
            address(),
            Email::new("batman@dc.com"),
        );

        assert_eq!(
            payment.method(),
            &PaymentMethod::Boleto {
                bar_code: "123456789".to_string(),
                boleto_number: "1234567890".to_string(),
            }
        );
    }
}
