//! # secondbrain-core
//!
//! Ward model and navigation core for the SecondBrain clinical task tracker.
//!
//! A clinician works from three views over the same in-memory ward:
//!
//! - **Today**: every task in triage order (overdue first, then by priority)
//! - **Patients**: the roster with a live count of open tasks per patient
//! - **Patient detail**: one patient's open tasks plus an add-task form
//!
//! ## Core Paradigm
//!
//! - The [`Ward`] is the only owner of state and the only mutator
//! - Views derive immutable row models from a `&Ward` and emit [`Intent`]s
//! - [`Ward::apply`] turns an intent into a state transition
//! - Nothing is persisted; the ward is seeded at startup and dropped on exit

mod config;
mod error;
mod screen;
mod triage;
mod types;
mod views;
mod ward;

pub mod seed;

pub use config::{BrainConfig, TuiConfig, DEFAULT_CONFIG_PATH};
pub use error::{BrainError, Result};
pub use screen::Screen;
pub use triage::{priority_rank, triage_order};
pub use types::*;
pub use views::{
    patient_detail, roster, today_queue, AddTaskForm, DetailTaskRow, PatientDetailView,
    QueueRow, RosterRow,
};
pub use ward::{Intent, Ward, NEW_TASK_DUE};
