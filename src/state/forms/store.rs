//! Observable store for the lead record
//!
//! The record lives inside a `watch` channel: every effective mutation
//! bumps the channel version and wakes subscribers before the call returns,
//! so any rendering layer can follow the record without owning it.

use super::record::{FormRecord, ScalarField, SetField};
use crate::catalog;
use tokio::sync::watch;

/// Owner of the current [`FormRecord`]
#[derive(Debug)]
pub struct FormStore {
    record: watch::Sender<FormRecord>,
}

impl FormStore {
    pub fn new() -> Self {
        let (record, _) = watch::channel(FormRecord::default());
        Self { record }
    }

    /// Subscribe to record changes
    pub fn subscribe(&self) -> watch::Receiver<FormRecord> {
        self.record.subscribe()
    }

    /// Replace a scalar field's value. No format validation happens here.
    pub fn set_scalar(&self, field: ScalarField, value: impl Into<String>) {
        let value = value.into();
        self.record.send_modify(|record| *record.scalar_mut(field) = value);
    }

    /// Toggle `token` in a set-valued field.
    ///
    /// Tokens outside the field's catalog domain are ignored. Returns whether
    /// the record changed.
    pub fn toggle(&self, field: SetField, token: &str) -> bool {
        if !catalog::contains(field, token) {
            tracing::debug!(field = field.key(), token, "ignoring toggle outside domain");
            return false;
        }
        self.record.send_modify(|record| record.toggle(field, token));
        true
    }

    /// Toggle addressed by field name; unknown or scalar names are ignored
    pub fn toggle_named(&self, field: &str, token: &str) -> bool {
        match field.parse::<SetField>() {
            Ok(field) => self.toggle(field, token),
            Err(err) => {
                tracing::debug!(%err, "ignoring toggle");
                false
            }
        }
    }

    /// Replace the record with the canonical empty record
    pub fn reset(&self) {
        self.record.send_replace(FormRecord::default());
    }

    /// Owned copy of the current record, detached from later mutations
    pub fn snapshot(&self) -> FormRecord {
        self.record.borrow().clone()
    }

    /// Current value of a scalar field
    pub fn scalar(&self, field: ScalarField) -> String {
        self.record.borrow().scalar(field).to_string()
    }
}

impl Default for FormStore {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn filled_store() -> FormStore {
        let store = FormStore::new();
        store.set_scalar(ScalarField::Name, "Jane Doe");
        store.set_scalar(ScalarField::Company, "Acme");
        store.toggle(SetField::Interests, "Warehousing");
        store.toggle(SetField::Interests, "Retail Fulfillment");
        store.toggle(SetField::Platforms, "Shopify");
        store
    }

    #[test]
    fn test_new_store_is_empty() {
        assert!(FormStore::new().snapshot().is_empty());
    }

    #[test]
    fn test_set_scalar_accepts_any_string() {
        let store = FormStore::new();
        store.set_scalar(ScalarField::Email, "not an email");
        assert_eq!(store.scalar(ScalarField::Email), "not an email");
        store.set_scalar(ScalarField::Email, "");
        assert_eq!(store.scalar(ScalarField::Email), "");
    }

    #[test]
    fn test_toggle_pair_restores_membership_for_every_token() {
        let store = filled_store();
        for field in SetField::ALL {
            for &token in catalog::domain_of(field) {
                let before = store.snapshot();
                let was_selected = before.is_selected(field, token);
                let was_last = before.set(field).last().is_some_and(|t| t == token);

                assert!(store.toggle(field, token));
                assert_eq!(store.snapshot().is_selected(field, token), !was_selected);
                assert!(store.toggle(field, token));

                let after = store.snapshot();
                if !was_selected || was_last {
                    assert_eq!(after, before);
                } else {
                    // re-selected tokens move to the end, the rest keep their order
                    let mut expected: Vec<String> = before
                        .set(field)
                        .iter()
                        .filter(|t| *t != token)
                        .cloned()
                        .collect();
                    expected.push(token.to_string());
                    assert_eq!(after.set(field), expected.as_slice());
                }
            }
        }
    }

    #[test]
    fn test_toggle_outside_domain_is_noop() {
        let store = filled_store();
        let before = store.snapshot();
        let rx = store.subscribe();

        assert!(!store.toggle(SetField::Platforms, "Warehousing"));
        assert!(!store.toggle(SetField::Interests, "Myspace"));

        assert_eq!(store.snapshot(), before);
        assert!(!rx.has_changed().unwrap());
    }

    #[test]
    fn test_toggle_named() {
        let store = FormStore::new();
        assert!(store.toggle_named("shippingMethods", "Freight"));
        assert_eq!(store.snapshot().shipping_methods, vec!["Freight"]);

        assert!(!store.toggle_named("name", "Freight"));
        assert!(!store.toggle_named("colors", "Freight"));
        assert_eq!(store.snapshot().shipping_methods, vec!["Freight"]);
    }

    #[test]
    fn test_reset_returns_canonical_empty_record() {
        let store = filled_store();
        store.reset();
        assert_eq!(store.snapshot(), FormRecord::default());
    }

    #[test]
    fn test_snapshot_is_unaffected_by_later_mutation() {
        let store = filled_store();
        let snapshot = store.snapshot();
        let expected = snapshot.clone();

        store.set_scalar(ScalarField::Name, "John Roe");
        store.toggle(SetField::Platforms, "Shopify");
        store.toggle(SetField::Platforms, "eBay");
        store.reset();

        assert_eq!(snapshot, expected);
    }

    #[test]
    fn test_mutations_notify_subscribers_before_returning() {
        let store = FormStore::new();
        let mut rx = store.subscribe();
        assert!(!rx.has_changed().unwrap());

        store.set_scalar(ScalarField::Phone, "555-0100");
        assert!(rx.has_changed().unwrap());
        assert_eq!(rx.borrow_and_update().phone, "555-0100");

        store.toggle(SetField::Interests, "FTZ Services");
        assert!(rx.has_changed().unwrap());
        assert_eq!(rx.borrow_and_update().interests, vec!["FTZ Services"]);

        store.reset();
        assert!(rx.has_changed().unwrap());
        assert!(rx.borrow_and_update().is_empty());
    }
}
