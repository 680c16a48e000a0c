//! Domain layer for student subscriptions.
//!
//! This crate provides:
//! - Self-validating value objects (document, name, email, address) and
//!   entities (student, subscription, payment) that record every broken rule
//!   in a ledger instead of failing
//! - Boleto and PayPal subscription commands
//! - `SubscriptionHandler`, which merges all ledgers with duplicate lookups
//!   and commits the aggregate only when nothing was violated
//! - Repository and email collaborator traits with in-memory implementations

pub mod command;
pub mod config;
pub mod error;
pub mod services;
pub mod student;

pub use command::{CommandResult, Handler, SubscriptionReceipt};
pub use common::{EntityId, Ledger, Notification, Validatable};
pub use config::{NameBounds, ValidationConfig};
pub use error::{ConfigError, DomainError};
pub use services::{
    EmailService, InMemoryEmailService, InMemoryStudentRepository, SentEmail, StudentRepository,
};
pub use student::{
    Address, AddressDetails, CREATED_MESSAGE, CreateBoletoSubscription, CreatePayPalSubscription,
    Document, DocumentType, Email, Money, Name, Payment, PaymentDetails, PaymentMethod,
    PaymentTerms, REJECTED_MESSAGE, Student, StudentDetails, Subscription, SubscriptionHandler,
    WELCOME_SUBJECT,
};
