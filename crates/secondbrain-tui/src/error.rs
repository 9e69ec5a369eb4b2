//! TUI error types - re-exports the unified BrainError from secondbrain-core
//!
//! Terminal setup and drawing failures use `BrainError::Terminal`; crossterm
//! I/O failures arrive as `BrainError::Io`.

pub use secondbrain_core::{BrainError, Result};

pub type TuiError = BrainError;
