//! Value objects for the student payment domain.
//!
//! Each constructor runs every rule of the value object and records all
//! violations in the object's own ledger. Construction never fails: an
//! invalid value object is still returned so the caller can finish building
//! the aggregate and report every violation together.

use std::sync::OnceLock;

use common::{Ledger, Validatable};
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::config::NameBounds;

/// Email validation pattern.
fn email_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(r"^[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}$")
            .expect("email pattern is a valid regex")
    })
}

/// Kind of taxpayer document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum DocumentType {
    /// Individual taxpayer registry, 11 digits.
    Cpf,
    /// Company registry, 14 digits.
    Cnpj,
}

impl DocumentType {
    /// Returns the number of characters a document of this type must have.
    pub fn expected_len(&self) -> usize {
        match self {
            DocumentType::Cpf => 11,
            DocumentType::Cnpj => 14,
        }
    }

    /// Returns the type name as a string.
    pub fn as_str(&self) -> &'static str {
        match self {
            DocumentType::Cpf => "CPF",
            DocumentType::Cnpj => "CNPJ",
        }
    }
}

impl std::fmt::Display for DocumentType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Taxpayer document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Document {
    number: String,
    document_type: DocumentType,
    #[serde(skip)]
    notifications: Ledger,
}

impl Document {
    pub fn new(number: impl Into<String>, document_type: DocumentType) -> Self {
        let number = number.into();
        let mut notifications = Ledger::new();
        notifications.require(
            number.chars().count() == document_type.expected_len(),
            "Document.Number",
            "invalid document",
        );

        Self {
            number,
            document_type,
            notifications,
        }
    }

    pub fn number(&self) -> &str {
        &self.number
    }

    pub fn document_type(&self) -> DocumentType {
        self.document_type
    }
}

impl Validatable for Document {
    fn report(&self, ledger: &mut Ledger) {
        ledger.merge(&self.notifications);
    }
}

/// A person's first and last name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Name {
    first_name: String,
    last_name: String,
    #[serde(skip)]
    notifications: Ledger,
}

impl Name {
    /// Creates a name checked against the default length bounds.
    pub fn new(first_name: impl Into<String>, last_name: impl Into<String>) -> Self {
        Self::with_bounds(first_name, last_name, NameBounds::default())
    }

    /// Creates a name checked against the given length bounds.
    pub fn with_bounds(
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        bounds: NameBounds,
    ) -> Self {
        let first_name = first_name.into();
        let last_name = last_name.into();
        let (min, max) = (bounds.min(), bounds.max());

        let mut notifications = Ledger::new();
        notifications.require(
            bounds.admits(&first_name),
            "Name.FirstName",
            format!("first name must have between {min} and {max} characters"),
        );
        notifications.require(
            bounds.admits(&last_name),
            "Name.LastName",
            format!("last name must have between {min} and {max} characters"),
        );

        Self {
            first_name,
            last_name,
            notifications,
        }
    }

    pub fn first_name(&self) -> &str {
        &self.first_name
    }

    pub fn last_name(&self) -> &str {
        &self.last_name
    }
}

impl Validatable for Name {
    fn report(&self, ledger: &mut Ledger) {
        ledger.merge(&self.notifications);
    }
}

impl std::fmt::Display for Name {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.first_name, self.last_name)
    }
}

/// Email address.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Email {
    address: String,
    #[serde(skip)]
    notifications: Ledger,
}

impl Email {
    pub fn new(address: impl Into<String>) -> Self {
        let address = address.into();
        let mut notifications = Ledger::new();
        notifications.require(
            email_pattern().is_match(&address),
            "Email.Address",
            "invalid email address",
        );

        Self {
            address,
            notifications,
        }
    }

    pub fn address(&self) -> &str {
        &self.address
    }
}

impl Validatable for Email {
    fn report(&self, ledger: &mut Ledger) {
        ledger.merge(&self.notifications);
    }
}

impl std::fmt::Display for Email {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.address)
    }
}

/// Postal address. Every field is required.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Address {
    street: String,
    number: String,
    neighborhood: String,
    city: String,
    state: String,
    country: String,
    zip_code: String,
    #[serde(skip)]
    notifications: Ledger,
}

impl Address {
    pub fn new(
        street: impl Into<String>,
        number: impl Into<String>,
        neighborhood: impl Into<String>,
        city: impl Into<String>,
        state: impl Into<String>,
        country: impl Into<String>,
        zip_code: impl Into<String>,
    ) -> Self {
        let mut address = Self {
            street: street.into(),
            number: number.into(),
            neighborhood: neighborhood.into(),
            city: city.into(),
            state: state.into(),
            country: country.into(),
            zip_code: zip_code.into(),
            notifications: Ledger::new(),
        };

        let fields = [
            ("Address.Street", "street", &address.street),
            ("Address.Number", "number", &address.number),
            ("Address.Neighborhood", "neighborhood", &address.neighborhood),
            ("Address.City", "city", &address.city),
            ("Address.State", "state", &address.state),
            ("Address.Country", "country", &address.country),
            ("Address.ZipCode", "zip code", &address.zip_code),
        ];
        let mut notifications = Ledger::new();
        for (key, label, value) in fields {
            notifications.require(!value.trim().is_empty(), key, format!("{label} is required"));
        }
        address.notifications = notifications;

        address
    }

    pub fn street(&self) -> &str {
        &self.street
    }

    pub fn number(&self) -> &str {
        &self.number
    }

    pub fn neighborhood(&self) -> &str {
        &self.neighborhood
    }

    pub fn city(&self) -> &str {
        &self.city
    }

    pub fn state(&self) -> &str {
        &self.state
    }

    pub fn country(&self) -> &str {
        &self.country
    }

    pub fn zip_code(&self) -> &str {
        &self.zip_code
    }
}

impl Validatable for Address {
    fn report(&self, ledger: &mut Ledger) {
        ledger.merge(&self.notifications);
    }
}

/// Money amount represented in cents to avoid floating point issues.
///
/// Negative amounts are representable so that payment rules can reject them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Money {
    cents: i64,
}

impl Money {
    /// Creates a new Money amount from cents.
    pub fn from_cents(cents: i64) -> Self {
        Self { cents }
    }

    /// Creates a new Money amount from whole currency units.
    pub fn from_units(units: i64) -> Self {
        Self { cents: units * 100 }
    }

    /// Returns zero money.
    pub fn zero() -> Self {
        Self { cents: 0 }
    }

    /// Returns the amount in cents.
    pub fn cents(&self) -> i64 {
        self.cents
    }

    /// Returns true if the amount is negative.
    pub fn is_negative(&self) -> bool {
        self.cents < 0
    }
}

impl Default for Money {
    fn default() -> Self {
        Self::zero()
    }
}

impl std::fmt::Display for Money {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let sign = if self.cents < 0 { "-" } else { "" };
        let abs = self.cents.unsigned_abs();
        write!(f, "{sign}{}.{:02}", abs / 100, abs % 100)
    }
}
