//! # secondbrain-tui
//!
//! Ratatui front end for the SecondBrain ward.
//!
//! ## Usage
//!
//! ```bash
//! secondbrain                  # Open the ward on the today queue
//! secondbrain --seed ward.json # Start from a custom seed
//! ```
//!
//! ## Layout
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  SECONDBRAIN  Dr. Test Resident · Today queue        09:15  │
//! ├─────────────────────────────────────────────────────────────┤
//! │  TODAY QUEUE                                                │
//! │  ▶ Maria Garcia            Follow up echo…  Overdue  🔥 High │
//! │    John Doe  [Critical]    Recheck lactate  Today    🔥 High │
//! ├─────────────────────────────────────────────────────────────┤
//! │   Today  │  Patients                                        │
//! └─────────────────────────────────────────────────────────────┘
//!  [↑↓] move [Enter] open [Tab] switch [q] quit
//! ```

mod error;

pub use error::{Result, TuiError};

mod widgets;

pub use widgets::{PatientDetailWidget, RosterWidget, TodayQueueWidget};

mod app;
mod event;
mod run;
mod terminal;
mod ui;

pub use app::App;
pub use run::run;
