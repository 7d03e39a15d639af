//! Submission lifecycle state

/// Message shown for every failed submission, whatever the cause
pub const FAILURE_MESSAGE: &str = "Failed to submit form. Please try again.";

/// Message shown after the sink accepted a submission
pub const SUCCESS_MESSAGE: &str = "Thank you! A Quetico representative will contact you soon.";

/// Where the current form instance is in its submit cycle.
///
/// `Succeeded` and `Failed` are not terminal: a new submit moves back to
/// `Submitting`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum SubmissionState {
    #[default]
    Idle,
    Submitting,
    Succeeded,
    Failed(String),
}

impl SubmissionState {
    pub fn is_submitting(&self) -> bool {
        matches!(self, SubmissionState::Submitting)
    }

    /// Error message of a failed submission
    pub fn error_message(&self) -> Option<&str> {
        match self {
            SubmissionState::Failed(message) => Some(message),
            _ => None,
        }
    }

    /// Short label for logs and the status bar
    pub fn label(&self) -> &'static str {
        match self {
            SubmissionState::Idle => "idle",
            SubmissionState::Submitting => "submitting",
            SubmissionState::Succeeded => "succeeded",
            SubmissionState::Failed(_) => "failed",
        }
    }
}
