//! Email service trait and in-memory implementation.

use std::sync::{Arc, PoisonError, RwLock};

use crate::error::DomainError;

/// Outbound notification channel.
pub trait EmailService: Send + Sync {
    /// Sends an email to `to_name <to_address>`.
    fn send(
        &self,
        to_name: &str,
        to_address: &str,
        subject: &str,
        body: &str,
    ) -> Result<(), DomainError>;
}

/// An email accepted by [`InMemoryEmailService`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SentEmail {
    pub to_name: String,
    pub to_address: String,
    pub subject: String,
    pub body: String,
}

#[derive(Debug, Default)]
struct InMemoryEmailState {
    sent: Vec<SentEmail>,
    fail_on_send: bool,
}

/// In-memory email service for testing.
#[derive(Debug, Clone, Default)]
pub struct InMemoryEmailService {
    state: Arc<RwLock<InMemoryEmailState>>,
}

impl InMemoryEmailService {
    /// Creates a new in-memory email service.
    pub fn new() -> Self {
        Self::default()
    }

    /// Configures the service to fail on send.
    pub fn set_fail_on_send(&self, fail: bool) {
        self.state
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .fail_on_send = fail;
    }

    /// Returns the emails sent so far.
    pub fn sent(&self) -> Vec<SentEmail> {
        self.state
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .sent
            .clone()
    }

    /// Returns the number of emails sent.
    pub fn sent_count(&self) -> usize {
        self.state
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .sent
            .len()
    }
}

impl EmailService for InMemoryEmailService {
    fn send(
        &self,
        to_name: &str,
        to_address: &str,
        subject: &str,
        body: &str,
    ) -> Result<(), DomainError> {
        let mut state = self.state.write().unwrap_or_else(PoisonError::into_inner);

        if state.fail_on_send {
            return Err(DomainError::EmailDelivery("mail server unavailable".to_string()));
        }

        state.sent.push(SentEmail {
            to_name: to_name.to_string(),
            to_address: to_address.to_string(),
            subject: subject.to_string(),
            body: body.to_string(),
        });
        Ok(())
    }
}
