//! Student repository trait and in-memory implementation.

use std::collections::HashSet;
use std::sync::{Arc, PoisonError, RwLock};

use crate::error::DomainError;
use crate::student::Student;

/// Persistence collaborator for the student aggregate.
///
/// Implementations must be safe to call from concurrent commands. The
/// handler's duplicate lookups and its commit are separate calls, so two
/// simultaneous submissions of the same document can both pass the lookups;
/// `create_subscription` is expected to enforce uniqueness itself and to
/// commit the whole aggregate atomically.
pub trait StudentRepository: Send + Sync {
    /// Returns true if a student with this document number exists.
    fn document_exists(&self, document: &str) -> Result<bool, DomainError>;

    /// Returns true if a student with this email address exists.
    fn email_exists(&self, email: &str) -> Result<bool, DomainError>;

    /// Persists the student with its subscriptions and payments.
    fn create_subscription(&self, student: &Student) -> Result<(), DomainError>;
}

#[derive(Debug, Default)]
struct InMemoryRepositoryState {
    students: Vec<Student>,
    documents: HashSet<String>,
    emails: HashSet<String>,
    lookups: usize,
    commits: usize,
    fail_on_commit: bool,
}

/// In-memory student repository for testing.
#[derive(Debug, Clone, Default)]
pub struct InMemoryStudentRepository {
    state: Arc<RwLock<InMemoryRepositoryState>>,
}

impl InMemoryStudentRepository {
    /// Creates a new, empty repository.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a document number as already taken.
    pub fn with_document(self, document: impl Into<String>) -> Self {
        self.write().documents.insert(document.into());
        self
    }

    /// Registers an email address as already taken.
    pub fn with_email(self, email: impl Into<String>) -> Self {
        self.write().emails.insert(email.into());
        self
    }

    /// Configures the repository to fail on commit.
    pub fn set_fail_on_commit(&self, fail: bool) {
        self.write().fail_on_commit = fail;
    }

    /// Returns the number of existence lookups performed.
    pub fn lookup_count(&self) -> usize {
        self.read().lookups
    }

    /// Returns the number of commit attempts.
    pub fn commit_count(&self) -> usize {
        self.read().commits
    }

    /// Returns the committed students in commit order.
    pub fn students(&self) -> Vec<Student> {
        self.read().students.clone()
    }

    fn read(&self) -> std::sync::RwLockReadGuard<'_, InMemoryRepositoryState> {
        self.state.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> std::sync::RwLockWriteGuard<'_, InMemoryRepositoryState> {
        self.state.write().unwrap_or_else(PoisonError::into_inner)
    }
}

impl StudentRepository for InMemoryStudentRepository {
    fn document_exists(&self, document: &str) -> Result<bool, DomainError> {
        let mut state = self.write();
        state.lookups += 1;
        Ok(state.documents.contains(document))
    }

    fn email_exists(&self, email: &str) -> Result<bool, DomainError> {
        let mut state = self.write();
        state.lookups += 1;
        Ok(state.emails.contains(email))
    }

    fn create_subscription(&self, student: &Student) -> Result<(), DomainError> {
        let mut state = self.write();
        state.commits += 1;

        if state.fail_on_commit {
            return Err(DomainError::Repository("storage unavailable".to_string()));
        }

        let document = student.document().number();
        if state.documents.contains(document) {
            return Err(DomainError::DuplicateStudent {
                field: "document",
                value: document.to_string(),
            });
        }

        let email = student.email().address();
        if state.emails.contains(email) {
            return Err(DomainError::DuplicateStudent {
                field: "email",
                value: email.to_string(),
            });
        }

        state.documents.insert(document.to_string());
        state.emails.insert(email.to_string());
        state.students.push(student.clone());
        Ok(())
    }
}
