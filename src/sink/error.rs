/// Why a delivery did not succeed. Only ever logged; users see one generic
/// failure message regardless of the variant.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SubmitError {
    #[error("request could not be completed: {0}")]
    Transport(String),
    #[error("sink rejected submission with status {status}")]
    Rejected { status: u16 },
}
