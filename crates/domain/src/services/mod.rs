//! Collaborator traits and in-memory implementations.
//!
//! The subscription handler reaches persistence and outbound email only
//! through these traits. The in-memory implementations back the tests and
//! benchmarks.

pub mod email;
pub mod repository;

pub use email::{EmailService, InMemoryEmailService, SentEmail};
pub use repository::{InMemoryStudentRepository, StudentRepository};
