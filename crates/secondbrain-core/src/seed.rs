//! Startup data for the ward
//!
//! The ward is seeded either from the built-in lists or from a JSON file of
//! the same shape. Seed files are only ever read; the ward never writes back.

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::{Acuity, BrainError, Clinician, Patient, Priority, Result, Task};

/// Initial contents of a ward
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Seed {
    #[serde(default)]
    pub clinician: Clinician,
    pub patients: Vec<Patient>,
    #[serde(default)]
    pub tasks: Vec<Task>,
}

impl Seed {
    /// The built-in demo ward: three patients, six open tasks
    pub fn builtin() -> Self {
        let patients = vec![
            Patient::new(1, "John Doe", "12A", "Sepsis secondary to pneumonia", Acuity::Critical),
            Patient::new(2, "Maria Garcia", "7B", "Decompensated heart failure", Acuity::Important),
            Patient::new(3, "Ahmed Khan", "3C", "Uncontrolled diabetes", Acuity::Normal),
        ];

        let tasks = vec![
            Task::new(1, 1, "Recheck lactate", "Today · in 4h", Priority::High)
                .with_notes("Draw in 4 hours"),
            Task::new(2, 1, "Review blood culture results", "Today · evening", Priority::Medium),
            Task::new(3, 2, "Follow up echo report", "Overdue", Priority::High),
            Task::new(4, 2, "Adjust diuretics", "Today · afternoon", Priority::Medium),
            Task::new(5, 3, "Review glucose log", "Tomorrow", Priority::Low),
            Task::new(6, 3, "Check HbA1c result", "Tomorrow", Priority::Medium),
        ];

        Self {
            clinician: Clinician::default(),
            patients,
            tasks,
        }
    }
}

/// Read a seed from a JSON file
pub fn load_seed(path: &Path) -> Result<Seed> {
    let content = std::fs::read_to_string(path)?;
    let seed = parse_seed(&content)?;
    info!(
        "Loaded seed from {}: {} patients, {} tasks",
        path.display(),
        seed.patients.len(),
        seed.tasks.len()
    );
    Ok(seed)
}

/// Parse a seed document. A seed must name at least one patient.
pub fn parse_seed(content: &str) -> Result<Seed> {
    let seed: Seed = serde_json::from_str(content)?;
    if seed.patients.is_empty() {
        return Err(BrainError::Seed("seed has no patients".to_string()));
    }
    Ok(seed)
}
