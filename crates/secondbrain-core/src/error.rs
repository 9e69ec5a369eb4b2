//! Unified error types for SecondBrain

use thiserror::Error;

/// Unified error type for all ward operations
#[derive(Error, Debug)]
pub enum BrainError {
    // Referential integrity
    #[error("Patient not found: {0}")]
    PatientNotFound(u32),

    #[error("Duplicate patient id: {0}")]
    DuplicatePatientId(u32),

    #[error("Duplicate task id: {0}")]
    DuplicateTaskId(u32),

    #[error("No task id left after {0}")]
    TaskIdExhausted(u32),

    // Startup input
    #[error("Seed error: {0}")]
    Seed(String),

    #[error("Config error: {0}")]
    Config(String),

    // Terminal UI
    #[error("Terminal error: {0}")]
    Terminal(String),

    // I/O errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Result type alias using BrainError
pub type Result<T> = std::result::Result<T, BrainError>;
