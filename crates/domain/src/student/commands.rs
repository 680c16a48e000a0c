//! Subscription commands.
//!
//! Commands carry raw caller input. They are turned into value objects and
//! entities by the [`SubscriptionHandler`](super::SubscriptionHandler).

use chrono::{DateTime, Utc};
use common::Ledger;
use serde::{Deserialize, Serialize};

use super::{Address, DocumentType, Money, PaymentTerms};

/// Personal data of the prospective student.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StudentDetails {
    pub first_name: String,
    pub last_name: String,
    /// CPF number of the student.
    pub document: String,
    pub email: String,
}

/// Billing address fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddressDetails {
    pub street: String,
    pub number: String,
    pub neighborhood: String,
    pub city: String,
    pub state: String,
    pub country: String,
    pub zip_code: String,
}

impl AddressDetails {
    /// Builds the address value object.
    pub fn to_address(&self) -> Address {
        Address::new(
            self.street.as_str(),
            self.number.as_str(),
            self.neighborhood.as_str(),
            self.city.as_str(),
            self.state.as_str(),
            self.country.as_str(),
            self.zip_code.as_str(),
        )
    }
}

/// Payment fields shared by every payment method.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentDetails {
    pub paid_date: DateTime<Utc>,
    pub expire_date: DateTime<Utc>,
    pub total: Money,
    pub total_paid: Money,
    pub payer: String,
    pub payer_document: String,
    pub payer_document_type: DocumentType,
}

impl PaymentDetails {
    /// Returns the method-independent payment terms.
    pub fn terms(&self) -> PaymentTerms {
        PaymentTerms {
            paid_date: self.paid_date,
            expire_date: self.expire_date,
            total: self.total,
            total_paid: self.total_paid,
            payer: self.payer.clone(),
        }
    }
}

/// Command to subscribe paying with a bank slip.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateBoletoSubscription {
    #[serde(flatten)]
    pub student: StudentDetails,
    #[serde(flatten)]
    pub address: AddressDetails,
    #[serde(flatten)]
    pub payment: PaymentDetails,
    pub bar_code: String,
    pub boleto_number: String,
}

impl CreateBoletoSubscription {
    /// Checks that every required field is present.
    ///
    /// This is the structural pre-check run before any domain object is
    /// built; it does not apply business rules such as lengths or formats.
    pub fn validate(&self) -> Ledger {
        let required = [
            ("FirstName", "first name", &self.student.first_name),
            ("LastName", "last name", &self.student.last_name),
            ("Document", "document", &self.student.document),
            ("Email", "email", &self.student.email),
            ("BarCode", "bar code", &self.bar_code),
            ("BoletoNumber", "boleto number", &self.boleto_number),
            ("Payer", "payer", &self.payment.payer),
            ("PayerDocument", "payer document", &self.payment.payer_document),
            ("Street", "street", &self.address.street),
            ("Number", "number", &self.address.number),
            ("Neighborhood", "neighborhood", &self.address.neighborhood),
            ("City", "city", &self.address.city),
            ("State", "state", &self.address.state),
            ("Country", "country", &self.address.country),
            ("ZipCode", "zip code", &self.address.zip_code),
        ];

        let mut ledger = Ledger::new();
        for (key, label, value) in required {
            ledger.require(!value.trim().is_empty(), key, format!("{label} is required"));
        }
        ledger
    }
}

/// Command to subscribe paying through a wallet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatePayPalSubscription {
    #[serde(flatten)]
    pub student: StudentDetails,
    #[serde(flatten)]
    pub address: AddressDetails,
    #[serde(flatten)]
    pub payment: PaymentDetails,
    pub transaction_code: String,
}
