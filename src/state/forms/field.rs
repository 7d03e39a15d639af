//! Form field descriptors

use super::record::{FormRecord, ScalarField, SetField};
use crate::catalog::{self, ChoiceField};

/// What kind of input widget a field uses
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Text(ScalarField),
    Multiline(ScalarField),
    Choice(ChoiceField),
    Checkboxes(SetField),
}

/// A single input on the lead form
#[derive(Debug, Clone)]
pub struct FormField {
    pub label: &'static str,
    pub kind: FieldKind,
    pub required: bool,
    /// Highlighted option (checkbox groups only)
    pub highlighted: usize,
}

impl FormField {
    /// Create a single-line text field
    pub fn text(field: ScalarField, label: &'static str) -> Self {
        Self::new(label, FieldKind::Text(field))
    }

    /// Create a multiline text field
    pub fn multiline(field: ScalarField, label: &'static str) -> Self {
        Self::new(label, FieldKind::Multiline(field))
    }

    /// Create a single-select field backed by a catalog list
    pub fn choice(field: ChoiceField, label: &'static str) -> Self {
        Self::new(label, FieldKind::Choice(field))
    }

    /// Create a checkbox group backed by a catalog domain
    pub fn checkboxes(field: SetField, label: &'static str) -> Self {
        Self::new(label, FieldKind::Checkboxes(field))
    }

    fn new(label: &'static str, kind: FieldKind) -> Self {
        Self {
            label,
            kind,
            required: false,
            highlighted: 0,
        }
    }

    /// Mark the field as required
    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    pub fn is_multiline(&self) -> bool {
        matches!(self.kind, FieldKind::Multiline(_))
    }

    /// The scalar record field this input writes, if any
    pub fn scalar_field(&self) -> Option<ScalarField> {
        match self.kind {
            FieldKind::Text(f) | FieldKind::Multiline(f) => Some(f),
            FieldKind::Choice(c) => Some(c.scalar()),
            FieldKind::Checkboxes(_) => None,
        }
    }

    /// Options listed by a checkbox group (empty for other kinds)
    pub fn options(&self) -> &'static [&'static str] {
        match self.kind {
            FieldKind::Checkboxes(f) => catalog::domain_of(f),
            FieldKind::Choice(c) => catalog::choices_of(c),
            _ => &[],
        }
    }

    /// Move the checkbox highlight, wrapping at both ends
    pub fn move_highlight(&mut self, forward: bool) {
        let count = self.options().len();
        if count == 0 || !matches!(self.kind, FieldKind::Checkboxes(_)) {
            return;
        }
        self.highlighted = if forward {
            (self.highlighted + 1) % count
        } else if self.highlighted == 0 {
            count - 1
        } else {
            self.highlighted - 1
        };
    }

    /// Token under the checkbox highlight
    pub fn highlighted_option(&self) -> Option<&'static str> {
        match self.kind {
            FieldKind::Checkboxes(_) => self.options().get(self.highlighted).copied(),
            _ => None,
        }
    }

    /// Whether the field holds a value in `record`
    pub fn is_filled(&self, record: &FormRecord) -> bool {
        match self.kind {
            FieldKind::Checkboxes(f) => !record.set(f).is_empty(),
            _ => self
                .scalar_field()
                .is_some_and(|f| !record.scalar(f).is_empty()),
        }
    }

    /// Label with a required marker
    pub fn title(&self) -> String {
        if self.required {
            format!("{} *", self.label)
        } else {
            self.label.to_string()
        }
    }

    /// Get the display value for rendering
    pub fn display_value(&self, record: &FormRecord) -> String {
        match self.kind {
            FieldKind::Text(f) | FieldKind::Multiline(f) => record.scalar(f).to_string(),
            FieldKind::Choice(c) => {
                let value = record.scalar(c.scalar());
                if value.is_empty() {
                    c.placeholder().to_string()
                } else {
                    c.display(value)
                }
            }
            FieldKind::Checkboxes(f) => record.set(f).join(", "),
        }
    }
}

/// Next value when cycling a single-select field.
///
/// The cycle is: unset, then every choice in catalog order, then unset again.
/// A current value outside `choices` restarts the cycle.
pub fn cycle_choice(current: &str, choices: &[&'static str], forward: bool) -> &'static str {
    // slot 0 is the unset value
    let slots = choices.len() + 1;
    let slot = choices
        .iter()
        .position(|c| *c == current)
        .map_or(0, |i| i + 1);
    let next = if forward {
        (slot + 1) % slots
    } else {
        (slot + slots - 1) % slots
    };
    if next == 0 {
        ""
    } else {
        choices[next - 1]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_field_defaults() {
        let field = FormField::text(ScalarField::Name, "Name");
        assert_eq!(field.label, "Name");
        assert!(!field.required);
        assert!(!field.is_multiline());
        assert_eq!(field.scalar_field(), Some(ScalarField::Name));
        assert!(field.options().is_empty());
    }

    #[test]
    fn test_required_marks_title() {
        let field = FormField::text(ScalarField::Email, "Email").required();
        assert!(field.required);
        assert_eq!(field.title(), "Email *");
    }

    #[test]
    fn test_choice_maps_to_scalar() {
        let field = FormField::choice(ChoiceField::MonthlyOrders, "Monthly Order Volume");
        assert_eq!(field.scalar_field(), Some(ScalarField::MonthlyOrders));
        assert_eq!(field.options(), catalog::ORDER_VOLUMES);
    }

    #[test]
    fn test_choice_display_value() {
        let field = FormField::choice(ChoiceField::MonthlyOrders, "Monthly Order Volume");
        let mut record = FormRecord::default();
        assert_eq!(field.display_value(&record), "Select monthly volume");
        record.monthly_orders = "5000+".to_string();
        assert_eq!(field.display_value(&record), "5000+ orders/month");
    }

    #[test]
    fn test_move_highlight_wraps() {
        let mut field = FormField::checkboxes(SetField::Interests, "Services of Interest");
        field.move_highlight(false);
        assert_eq!(field.highlighted, catalog::INTERESTS.len() - 1);
        field.move_highlight(true);
        assert_eq!(field.highlighted, 0);
        assert_eq!(field.highlighted_option(), Some("Warehousing"));
    }

    #[test]
    fn test_move_highlight_ignored_for_text() {
        let mut field = FormField::text(ScalarField::Phone, "Phone");
        field.move_highlight(true);
        assert_eq!(field.highlighted, 0);
        assert_eq!(field.highlighted_option(), None);
    }

    #[test]
    fn test_is_filled() {
        let name = FormField::text(ScalarField::Name, "Name");
        let platforms = FormField::checkboxes(SetField::Platforms, "Platforms");
        let mut record = FormRecord::default();
        assert!(!name.is_filled(&record));
        assert!(!platforms.is_filled(&record));

        record.name = "Jane".to_string();
        record.toggle(SetField::Platforms, "Shopify");
        assert!(name.is_filled(&record));
        assert!(platforms.is_filled(&record));
    }

    #[test]
    fn test_checkbox_display_value_joins_tokens() {
        let field = FormField::checkboxes(SetField::Platforms, "Platforms");
        let mut record = FormRecord::default();
        record.toggle(SetField::Platforms, "eBay");
        record.toggle(SetField::Platforms, "Amazon");
        assert_eq!(field.display_value(&record), "eBay, Amazon");
    }

    #[test]
    fn test_cycle_choice_forward_and_back() {
        let choices = catalog::INVENTORY_SIZES;
        assert_eq!(cycle_choice("", choices, true), "1-100 SKUs");
        assert_eq!(cycle_choice("1-100 SKUs", choices, true), "101-500 SKUs");
        assert_eq!(cycle_choice("1000+ SKUs", choices, true), "");
        assert_eq!(cycle_choice("", choices, false), "1000+ SKUs");
        assert_eq!(cycle_choice("1-100 SKUs", choices, false), "");
    }

    #[test]
    fn test_cycle_choice_unknown_value_restarts() {
        assert_eq!(
            cycle_choice("bogus", catalog::BUSINESS_TYPES, true),
            "B2C eCommerce"
        );
    }
}
