//! Trait abstraction for the collection sink to enable mocking in tests

use super::{LeadDocument, SubmitError};
use async_trait::async_trait;

/// Trait for delivering a lead document to the external sink
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait LeadSink: Send + Sync {
    /// Send the document once. `Ok` means the sink accepted it.
    async fn deliver(&self, document: &LeadDocument) -> Result<(), SubmitError>;
}
