//! Leadgen TUI - terminal intake form for Quetico 3PL leads
//!
//! Collects a prospective customer's business details and posts them as a
//! single JSON document to the lead collection webhook.
//!
//! The core is UI-independent: [`state::FormStore`] holds the observable
//! lead record and [`controller::SubmissionController`] runs the
//! submit lifecycle against any [`sink::LeadSink`].

pub mod app;
pub mod catalog;
pub mod config;
pub mod controller;
pub mod sink;
pub mod state;
pub mod ui;
