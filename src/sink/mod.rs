//! Collection sink module for webhook delivery

mod client;
mod document;
mod error;
mod traits;

pub use client::WebhookClient;
pub use document::{LeadDocument, SOURCE_TAG};
pub use error::SubmitError;
pub use traits::LeadSink;

#[cfg(test)]
pub use traits::MockLeadSink;
