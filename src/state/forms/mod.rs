//! Form domain layer
//!
//! The lead record, its observable store and the navigation state of the
//! intake form.

mod field;
mod form_state;
mod record;
mod store;

pub use field::{cycle_choice, FieldKind, FormField};
pub use form_state::{Form, LeadForm};
pub use record::{FormRecord, ScalarField, SetField, UnknownField};
pub use store::FormStore;
