//! Lead form navigation state

use super::field::{FieldKind, FormField};
use super::record::{FormRecord, ScalarField, SetField};
use crate::catalog::ChoiceField;

/// Trait for common form operations
pub trait Form {
    fn field_count(&self) -> usize;
    fn active_field(&self) -> usize;
    fn set_active_field(&mut self, index: usize);
    fn next_field(&mut self) {
        let count = self.field_count();
        let current = self.active_field();
        self.set_active_field((current + 1) % count);
    }
    fn prev_field(&mut self) {
        let count = self.field_count();
        let current = self.active_field();
        if current == 0 {
            self.set_active_field(count - 1);
        } else {
            self.set_active_field(current - 1);
        }
    }
    fn get_field(&self, index: usize) -> Option<&FormField>;
}

/// The lead intake form: ordered inputs followed by the submit button row
#[derive(Debug, Clone)]
pub struct LeadForm {
    pub fields: Vec<FormField>,
    pub active_field_index: usize,
}

impl LeadForm {
    pub fn new() -> Self {
        let fields = vec![
            FormField::text(ScalarField::Name, "Name").required(),
            FormField::text(ScalarField::Email, "Email").required(),
            FormField::text(ScalarField::Company, "Company").required(),
            FormField::text(ScalarField::Website, "Website"),
            FormField::text(ScalarField::Phone, "Phone"),
            FormField::text(ScalarField::Location, "Location"),
            FormField::choice(ChoiceField::BusinessType, "Business Type").required(),
            FormField::choice(ChoiceField::MonthlyOrders, "Monthly Order Volume").required(),
            FormField::choice(ChoiceField::InventorySize, "Inventory Size"),
            FormField::checkboxes(SetField::Interests, "Services of Interest"),
            FormField::checkboxes(SetField::Platforms, "eCommerce Platforms"),
            FormField::checkboxes(SetField::ShippingMethods, "Shipping Methods Needed"),
            FormField::text(ScalarField::CurrentProvider, "Current Provider"),
            FormField::multiline(ScalarField::SpecialRequirements, "Special Requirements"),
        ];
        Self {
            fields,
            active_field_index: 0,
        }
    }

    /// Index of the submit button row
    pub fn submit_row(&self) -> usize {
        self.fields.len()
    }

    /// Returns true if the submit button row is currently active
    pub fn is_submit_row_active(&self) -> bool {
        self.active_field_index == self.submit_row()
    }

    pub fn active(&self) -> Option<&FormField> {
        self.get_field(self.active_field_index)
    }

    pub fn active_mut(&mut self) -> Option<&mut FormField> {
        self.fields.get_mut(self.active_field_index)
    }

    pub fn active_kind(&self) -> Option<FieldKind> {
        self.active().map(|f| f.kind)
    }

    /// Labels of required fields that are still empty
    pub fn missing_required(&self, record: &FormRecord) -> Vec<&'static str> {
        self.fields
            .iter()
            .filter(|f| f.required && !f.is_filled(record))
            .map(|f| f.label)
            .collect()
    }

    /// Return to the first field and clear checkbox highlights
    pub fn rewind(&mut self) {
        self.active_field_index = 0;
        for field in &mut self.fields {
            field.highlighted = 0;
        }
    }
}

impl Default for LeadForm {
    fn default() -> Self {
        Self::new()
    }
}

impl Form for LeadForm {
    fn field_count(&self) -> usize {
        self.fields.len() + 1 // inputs + submit button
    }
    fn active_field(&self) -> usize {
        self.active_field_index
    }
    fn set_active_field(&mut self, index: usize) {
        self.active_field_index = index.min(self.submit_row());
    }
    fn get_field(&self, index: usize) -> Option<&FormField> {
        self.fields.get(index)
    }
}
