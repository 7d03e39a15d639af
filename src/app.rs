//! Application state and core logic

use crate::catalog;
use crate::controller::{SubmissionController, SubmitOutcome};
use crate::sink::LeadSink;
use crate::state::{
    cycle_choice, FieldKind, Form, FormRecord, FormStore, LeadForm, ScalarField, SubmissionState,
    SUCCESS_MESSAGE,
};
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::sync::Arc;
use tokio::sync::watch;

/// Message shown in the status bar
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StatusMessage {
    Success(String),
    Error(String),
}

/// Main application struct
pub struct App<S> {
    /// Navigation state of the intake form
    pub form: LeadForm,
    /// Latest record seen on the store subscription
    pub record: FormRecord,
    /// Latest submission state seen on the controller subscription
    pub submission: SubmissionState,
    /// Feedback for the last submit attempt
    pub status_message: Option<StatusMessage>,
    controller: Arc<SubmissionController<S>>,
    record_rx: watch::Receiver<FormRecord>,
    state_rx: watch::Receiver<SubmissionState>,
    /// Whether the app should quit
    quit: bool,
}

impl<S: LeadSink + 'static> App<S> {
    /// Create a new App instance
    pub fn new(controller: Arc<SubmissionController<S>>) -> Self {
        let record_rx = controller.store().subscribe();
        let state_rx = controller.subscribe();
        let record = record_rx.borrow().clone();
        let submission = state_rx.borrow().clone();
        Self {
            form: LeadForm::new(),
            record,
            submission,
            status_message: None,
            controller,
            record_rx,
            state_rx,
            quit: false,
        }
    }

    /// Check if app should quit
    pub fn should_quit(&self) -> bool {
        self.quit
    }

    fn store(&self) -> &FormStore {
        self.controller.store()
    }

    /// Pull pending changes from the store and controller subscriptions
    pub fn sync(&mut self) {
        if self.record_rx.has_changed().unwrap_or(false) {
            self.record = self.record_rx.borrow_and_update().clone();
        }
        if self.state_rx.has_changed().unwrap_or(false) {
            let state = self.state_rx.borrow_and_update().clone();
            tracing::debug!(state = state.label(), "submission state changed");
            match &state {
                SubmissionState::Succeeded => {
                    self.status_message =
                        Some(StatusMessage::Success(SUCCESS_MESSAGE.to_string()));
                    self.form.rewind();
                }
                SubmissionState::Failed(message) => {
                    self.status_message = Some(StatusMessage::Error(message.clone()));
                }
                SubmissionState::Submitting => self.status_message = None,
                SubmissionState::Idle => {}
            }
            self.submission = state;
        }
    }

    /// Handle a key event
    pub fn handle_key(&mut self, key: KeyEvent) -> Result<()> {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        let kind = self.form.active_kind();

        match key.code {
            KeyCode::Char('c') if ctrl => self.quit = true,
            KeyCode::Esc => self.quit = true,
            KeyCode::Char('s') if ctrl => {
                self.request_submit();
            }
            KeyCode::Tab => self.form.next_field(),
            KeyCode::BackTab => self.form.prev_field(),
            KeyCode::Down if !matches!(kind, Some(FieldKind::Multiline(_))) => {
                self.form.next_field()
            }
            KeyCode::Up if !matches!(kind, Some(FieldKind::Multiline(_))) => {
                self.form.prev_field()
            }
            KeyCode::Enter if self.form.is_submit_row_active() => {
                self.request_submit();
            }
            _ => match kind {
                Some(FieldKind::Text(field)) => self.edit_text(field, key, false),
                Some(FieldKind::Multiline(field)) => self.edit_text(field, key, true),
                Some(FieldKind::Choice(choice)) => {
                    let forward = match key.code {
                        KeyCode::Right | KeyCode::Char(' ') => true,
                        KeyCode::Left => false,
                        _ => return Ok(()),
                    };
                    let current = self.store().scalar(choice.scalar());
                    let next = cycle_choice(&current, catalog::choices_of(choice), forward);
                    self.store().set_scalar(choice.scalar(), next);
                }
                Some(FieldKind::Checkboxes(field)) => match key.code {
                    KeyCode::Right => self.move_highlight(true),
                    KeyCode::Left => self.move_highlight(false),
                    KeyCode::Char(' ') | KeyCode::Enter => {
                        let token = self.form.active().and_then(|f| f.highlighted_option());
                        if let Some(token) = token {
                            self.store().toggle(field, token);
                        }
                    }
                    _ => {}
                },
                None => {}
            },
        }
        Ok(())
    }

    fn move_highlight(&mut self, forward: bool) {
        if let Some(field) = self.form.active_mut() {
            field.move_highlight(forward);
        }
    }

    fn edit_text(&mut self, field: ScalarField, key: KeyEvent, multiline: bool) {
        // shortcuts are not text
        let shortcut = key
            .modifiers
            .intersects(KeyModifiers::CONTROL | KeyModifiers::ALT);
        let mut value = self.store().scalar(field);
        match key.code {
            KeyCode::Char(c) if !shortcut => value.push(c),
            KeyCode::Backspace => {
                if value.pop().is_none() {
                    return;
                }
            }
            KeyCode::Enter if multiline => value.push('\n'),
            _ => return,
        }
        self.store().set_scalar(field, value);
    }

    /// Check required inputs, then start a submission in the background.
    ///
    /// Returns the handle of the spawned submission, if one was started.
    pub fn request_submit(&mut self) -> Option<tokio::task::JoinHandle<SubmitOutcome>> {
        if self.controller.state().is_submitting() {
            return None;
        }

        let missing = self.form.missing_required(&self.store().snapshot());
        if !missing.is_empty() {
            self.status_message = Some(StatusMessage::Error(format!(
                "Please fill in: {}",
                missing.join(", ")
            )));
            return None;
        }

        // Claim the submission now so a second press before the task runs is refused
        let document = self.controller.begin()?;
        let controller = self.controller.clone();
        Some(tokio::spawn(async move { controller.finish(document).await }))
    }
}
