//! Student aggregate, its entities and value objects, and the subscription
//! command handler.

mod aggregate;
mod commands;
mod handler;
mod payment;
mod subscription;
mod value_objects;

pub use aggregate::Student;
pub use commands::{
    AddressDetails, CreateBoletoSubscription, CreatePayPalSubscription, PaymentDetails,
    StudentDetails,
};
pub use handler::{CREATED_MESSAGE, REJECTED_MESSAGE, SubscriptionHandler, WELCOME_SUBJECT};
pub use payment::{Payment, PaymentMethod, PaymentTerms};
pub use subscription::Subscription;
pub use value_objects::{Address, Document, DocumentType, Email, Money, Name};
