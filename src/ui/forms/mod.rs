//! Form rendering module
//!
//! - `field_renderer`: per-widget rendering of text, choice and checkbox inputs
//! - `lead_form`: the scrolling intake form and its submit button

mod field_renderer;
mod lead_form;

pub use lead_form::draw_lead_form;
