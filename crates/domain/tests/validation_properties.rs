//! Property-based tests for value object rules and exhaustive accumulation.

use domain::{Document, DocumentType, Email, Name, NameBounds, Validatable};
use proptest::prelude::*;

fn document_type_strategy() -> impl Strategy<Value = DocumentType> {
    prop_oneof![Just(DocumentType::Cpf), Just(DocumentType::Cnpj)]
}

/// Property: a document is valid iff its length matches its type.
#[test]
fn prop_document_valid_iff_length_matches_type() {
    proptest!(|(number in "[0-9]{0,20}", document_type in document_type_strategy())| {
        let document = Document::new(number.clone(), document_type);
        prop_assert_eq!(
            document.is_valid(),
            number.len() == document_type.expected_len()
        );
    });
}

/// Property: names inside the inclusive bounds are valid, outside are not.
#[test]
fn prop_name_respects_inclusive_bounds() {
    proptest!(|(min in 1usize..10, extra in 0usize..10, first_len in 0usize..25, last_len in 0usize..25)| {
        let bounds = NameBounds::new(min, min + extra).unwrap();
        let first = "a".repeat(first_len);
        let last = "b".repeat(last_len);

        let ledger = Name::with_bounds(first, last, bounds).notifications();

        prop_assert_eq!(
            ledger.contains_key("Name.FirstName"),
            first_len < bounds.min() || first_len > bounds.max()
        );
        prop_assert_eq!(
            ledger.contains_key("Name.LastName"),
            last_len < bounds.min() || last_len > bounds.max()
        );
    });
}

/// Property: validation never stops at the first broken rule.
#[test]
fn prop_every_broken_name_field_is_reported() {
    proptest!(|(first_len in 41usize..60, last_len in 41usize..60)| {
        let name = Name::new("x".repeat(first_len), "y".repeat(last_len));
        prop_assert_eq!(name.notifications().len(), 2);
    });
}

/// Property: addresses without an at-sign are never valid emails.
#[test]
fn prop_email_without_at_sign_is_invalid() {
    proptest!(|(address in "[a-z0-9.]{0,30}")| {
        prop_assert!(!Email::new(address).is_valid());
    });
}
