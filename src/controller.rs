//! Submission controller
//!
//! Drives one submission attempt: snapshot the store, stamp the document,
//! deliver it once, then settle the state. The state lives in a `watch`
//! channel whose atomic check-and-set is the only thing serializing
//! submissions; a submit that finds `Submitting` is turned away.

use crate::sink::{LeadDocument, LeadSink};
use crate::state::{FormStore, SubmissionState, FAILURE_MESSAGE};
use chrono::Utc;
use std::sync::Arc;
use tokio::sync::watch;
use tracing::{debug, info, warn};

/// Result of a call to [`SubmissionController::submit`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// The sink accepted the lead and the store was cleared
    Accepted,
    /// The attempt failed; the store is untouched
    Failed,
    /// Another submission was in flight; nothing happened
    Busy,
}

pub struct SubmissionController<S> {
    store: Arc<FormStore>,
    sink: S,
    state: watch::Sender<SubmissionState>,
}

impl<S: LeadSink> SubmissionController<S> {
    pub fn new(store: Arc<FormStore>, sink: S) -> Self {
        let (state, _) = watch::channel(SubmissionState::Idle);
        Self { store, sink, state }
    }

    /// Current submission state
    pub fn state(&self) -> SubmissionState {
        self.state.borrow().clone()
    }

    /// Subscribe to state transitions
    pub fn subscribe(&self) -> watch::Receiver<SubmissionState> {
        self.state.subscribe()
    }

    pub fn store(&self) -> &Arc<FormStore> {
        &self.store
    }

    /// Submit the current record.
    ///
    /// Never fails: every outcome is reflected in the state, which is never
    /// left `Submitting` once the delivery settles.
    pub async fn submit(&self) -> SubmitOutcome {
        match self.begin() {
            Some(document) => self.finish(document).await,
            None => SubmitOutcome::Busy,
        }
    }

    /// Move to `Submitting` and stamp the document for the current record.
    ///
    /// Returns `None` without any effect while another submission is in
    /// flight. A `Some` must be handed to [`finish`](Self::finish).
    pub fn begin(&self) -> Option<LeadDocument> {
        let started = self.state.send_if_modified(|state| {
            if state.is_submitting() {
                false
            } else {
                *state = SubmissionState::Submitting;
                true
            }
        });
        if !started {
            debug!("submission already in flight, ignoring submit");
            return None;
        }

        let document = LeadDocument::new(self.store.snapshot(), Utc::now());
        info!(timestamp = %document.timestamp, "submitting lead");
        Some(document)
    }

    /// Deliver a document returned by [`begin`](Self::begin) and settle the state
    pub async fn finish(&self, document: LeadDocument) -> SubmitOutcome {
        match self.sink.deliver(&document).await {
            Ok(()) => {
                self.state.send_replace(SubmissionState::Succeeded);
                self.store.reset();
                info!("lead accepted");
                SubmitOutcome::Accepted
            }
            Err(err) => {
                warn!(error = %err, "lead submission failed");
                self.state
                    .send_replace(SubmissionState::Failed(FAILURE_MESSAGE.to_string()));
                SubmitOutcome::Failed
            }
        }
    }
}
