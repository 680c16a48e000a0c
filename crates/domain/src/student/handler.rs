//! Subscription command handler.
//!
//! Builds the student aggregate from a command, merges the ledgers of every
//! value object and entity together with the duplicate lookups, and commits
//! only when the merged ledger is empty.
//!
//! Commit and welcome email are two sequential collaborator calls. If the
//! email fails after a successful commit the student stays committed and the
//! error is returned to the caller; nothing is rolled back.

use chrono::{DateTime, Months, Utc};
use common::{Ledger, Validatable};

use crate::command::{CommandResult, Handler, SubscriptionReceipt};
use crate::config::ValidationConfig;
use crate::error::DomainError;
use crate::services::{EmailService, StudentRepository};

use super::{
    AddressDetails, CreateBoletoSubscription, CreatePayPalSubscription, Document, DocumentType,
    Email, Name, Payment, PaymentDetails, PaymentMethod, Student, StudentDetails, Subscription,
};

/// Message returned with every rejected command.
pub const REJECTED_MESSAGE: &str = "subscription could not be completed";

/// Message returned with every accepted command.
pub const CREATED_MESSAGE: &str = "subscription created successfully";

/// Subject of the welcome email.
pub const WELCOME_SUBJECT: &str = "Welcome aboard";

/// Length of a new subscription.
const SUBSCRIPTION_TERM: Months = Months::new(1);

/// Handles subscription commands for every payment method.
pub struct SubscriptionHandler<R, E>
where
    R: StudentRepository,
    E: EmailService,
{
    repository: R,
    email: E,
    config: ValidationConfig,
}

impl<R, E> SubscriptionHandler<R, E>
where
    R: StudentRepository,
    E: EmailService,
{
    /// Creates a handler with the default validation settings.
    pub fn new(repository: R, email: E) -> Self {
        Self::with_config(repository, email, ValidationConfig::default())
    }

    /// Creates a handler with explicit validation settings.
    pub fn with_config(repository: R, email: E, config: ValidationConfig) -> Self {
        Self {
            repository,
            email,
            config,
        }
    }

    /// Returns a reference to the student repository.
    pub fn repository(&self) -> &R {
        &self.repository
    }

    /// Returns a reference to the email service.
    pub fn email_service(&self) -> &E {
        &self.email
    }

    /// Returns the validation settings.
    pub fn config(&self) -> &ValidationConfig {
        &self.config
    }

    /// Runs duplicate lookups, builds and wires the aggregate, merges every
    /// ledger and commits when nothing was violated.
    fn subscribe(
        &self,
        details: &StudentDetails,
        address: &AddressDetails,
        terms: &PaymentDetails,
        method: PaymentMethod,
    ) -> Result<CommandResult, DomainError> {
        let method_name = method.as_str();
        let mut ledger = Ledger::new();

        if self.repository.document_exists(&details.document)? {
            ledger.add("Document", "document already in use");
        }
        if self.repository.email_exists(&details.email)? {
            ledger.add("Email", "email already in use");
        }

        let name = Name::with_bounds(
            details.first_name.as_str(),
            details.last_name.as_str(),
            self.config.name_bounds,
        );
        let document = Document::new(details.document.as_str(), DocumentType::Cpf);
        let email = Email::new(details.email.as_str());
        let address = address.to_address();

        // Value objects are immutable, so their ledgers can be taken before
        // they move into the entities.
        ledger.absorb(&name);
        ledger.absorb(&document);
        ledger.absorb(&email);
        ledger.absorb(&address);

        let mut student = Student::new(name, document, email.clone());
        let now = Utc::now();
        let mut subscription = Subscription::starting_at(now, subscription_expiry(now));
        let payment = Payment::new(
            method,
            terms.terms(),
            Document::new(terms.payer_document.as_str(), terms.payer_document_type),
            address,
            email,
        );

        let receipt = SubscriptionReceipt {
            student_id: student.id(),
            subscription_id: subscription.id(),
            payment_number: payment.number().to_string(),
            expire_date: subscription.expire_date(),
        };

        let payment_ledger = payment.notifications();
        subscription.add_payment(payment);
        let subscription_ledger = subscription.notifications();
        student.add_subscription(subscription);

        ledger.absorb(&student);
        ledger.merge(&subscription_ledger);
        ledger.merge(&payment_ledger);

        if !ledger.is_valid() {
            metrics::counter!(
                "subscription_commands_total",
                "method" => method_name,
                "outcome" => "rejected"
            )
            .increment(1);
            tracing::info!(notifications = ledger.len(), "subscription rejected");
            return Ok(CommandResult::failure(REJECTED_MESSAGE, ledger));
        }

        self.repository.create_subscription(&student)?;
        tracing::info!(student_id = %student.id(), "subscription committed");

        let body = format!("Hello {}, your subscription has been created.", student.name());
        if let Err(e) = self.email.send(
            &student.name().to_string(),
            student.email().address(),
            WELCOME_SUBJECT,
            &body,
        ) {
            tracing::error!(
                student_id = %student.id(),
                error = %e,
                "welcome email failed after commit"
            );
            return Err(e);
        }

        metrics::counter!(
            "subscription_commands_total",
            "method" => method_name,
            "outcome" => "created"
        )
        .increment(1);

        Ok(CommandResult::success(CREATED_MESSAGE, receipt))
    }
}

impl<R, E> Handler<CreateBoletoSubscription> for SubscriptionHandler<R, E>
where
    R: StudentRepository,
    E: EmailService,
{
    /// Handles a bank-slip subscription.
    ///
    /// The command's own field check runs first; if it fails no lookup is
    /// made and no domain object is built.
    #[tracing::instrument(skip(self, command), fields(method = "boleto"))]
    fn handle(&self, command: CreateBoletoSubscription) -> Result<CommandResult, DomainError> {
        let precheck = command.validate();
        if !precheck.is_valid() {
            metrics::counter!(
                "subscription_commands_total",
                "method" => "boleto",
                "outcome" => "precheck_failed"
            )
            .increment(1);
            tracing::info!(notifications = precheck.len(), "boleto command failed pre-check");
            return Ok(CommandResult::failure(REJECTED_MESSAGE, precheck));
        }

        let method = PaymentMethod::Boleto {
            bar_code: command.bar_code,
            boleto_number: command.boleto_number,
        };
        self.subscribe(&command.student, &command.address, &command.payment, method)
    }
}

impl<R, E> Handler<CreatePayPalSubscription> for SubscriptionHandler<R, E>
where
    R: StudentRepository,
    E: EmailService,
{
    /// Handles a wallet subscription.
    ///
    /// There is no structural pre-check on this path.
    #[tracing::instrument(skip(self, command), fields(method = "paypal"))]
    fn handle(&self, command: CreatePayPalSubscription) -> Result<CommandResult, DomainError> {
        let method = PaymentMethod::PayPal {
            transaction_code: command.transaction_code,
        };
        self.subscribe(&command.student, &command.address, &command.payment, method)
    }
}

fn subscription_expiry(now: DateTime<Utc>) -> Option<DateTime<Utc>> {
    now.checked_add_months(SUBSCRIPTION_TERM)
}
