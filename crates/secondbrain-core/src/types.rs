//! Core type definitions for the ward

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Task priority levels
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Low,
    #[default]
    Medium,
    High,
}

impl Priority {
    /// Short badge shown next to a task
    pub fn badge(&self) -> &'static str {
        match self {
            Self::High => "🔥 High",
            Self::Medium => "⬆️ Medium",
            Self::Low => "⬇️ Low",
        }
    }
}

impl std::fmt::Display for Priority {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Low => write!(f, "low"),
            Self::Medium => write!(f, "medium"),
            Self::High => write!(f, "high"),
        }
    }
}

impl std::str::FromStr for Priority {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "low" => Ok(Self::Low),
            "medium" => Ok(Self::Medium),
            "high" => Ok(Self::High),
            _ => Err(format!("Invalid priority: {}", s)),
        }
    }
}

/// Patient acuity (how sick the patient is, independent of any one task)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Acuity {
    #[default]
    Normal,
    Important,
    Critical,
}

impl Acuity {
    /// Short badge shown next to a patient
    pub fn badge(&self) -> &'static str {
        match self {
            Self::Critical => "Critical",
            Self::Important => "Important",
            Self::Normal => "Normal",
        }
    }
}

impl std::fmt::Display for Acuity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Normal => write!(f, "normal"),
            Self::Important => write!(f, "important"),
            Self::Critical => write!(f, "critical"),
        }
    }
}

impl std::str::FromStr for Acuity {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "normal" => Ok(Self::Normal),
            "important" => Ok(Self::Important),
            "critical" => Ok(Self::Critical),
            _ => Err(format!("Invalid acuity: {}", s)),
        }
    }
}

/// Task status. Tasks are created `Open`; nothing moves them to `Done` yet.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TaskStatus {
    #[default]
    Open,
    Done,
}

impl std::fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Open => write!(f, "open"),
            Self::Done => write!(f, "done"),
        }
    }
}

/// Admission status of a patient
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PatientStatus {
    #[default]
    Active,
    Discharged,
}

impl std::fmt::Display for PatientStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Active => write!(f, "active"),
            Self::Discharged => write!(f, "discharged"),
        }
    }
}

/// The clinician whose ward this is
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Clinician {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

impl Default for Clinician {
    fn default() -> Self {
        Self {
            name: "Dr. Test Resident".to_string(),
            email: Some("resident@example.com".to_string()),
        }
    }
}

/// A patient on the ward
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Patient {
    pub id: u32,
    pub name: String,
    /// Free-text bed label, e.g. "12A"
    pub bed: String,
    pub main_problem: String,
    #[serde(default)]
    pub acuity: Acuity,
    #[serde(default)]
    pub status: PatientStatus,
}

impl Patient {
    pub fn new(
        id: u32,
        name: impl Into<String>,
        bed: impl Into<String>,
        main_problem: impl Into<String>,
        acuity: Acuity,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            bed: bed.into(),
            main_problem: main_problem.into(),
            acuity,
            status: PatientStatus::Active,
        }
    }

    pub fn is_critical(&self) -> bool {
        self.acuity == Acuity::Critical
    }

    /// "Bed 12A · Sepsis secondary to pneumonia"
    pub fn summary(&self) -> String {
        format!("Bed {} · {}", self.bed, self.main_problem)
    }
}

/// A clinical task attached to one patient
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    pub id: u32,
    pub patient_id: u32,
    pub title: String,
    /// Display label such as "Today · in 4h" or "Overdue"
    pub due: String,
    #[serde(default)]
    pub priority: Priority,
    #[serde(default)]
    pub status: TaskStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(default = "Utc::now")]
    pub created_at: DateTime<Utc>,
}

impl Task {
    pub fn new(
        id: u32,
        patient_id: u32,
        title: impl Into<String>,
        due: impl Into<String>,
        priority: Priority,
    ) -> Self {
        Self {
            id,
            patient_id,
            title: title.into(),
            due: due.into(),
            priority,
            status: TaskStatus::Open,
            notes: None,
            created_at: Utc::now(),
        }
    }

    pub fn with_notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = Some(notes.into());
        self
    }

    /// A task is overdue when its due label mentions "overdue", in any case
    pub fn is_overdue(&self) -> bool {
        self.due.to_lowercase().contains("overdue")
    }

    pub fn is_open(&self) -> bool {
        self.status == TaskStatus::Open
    }
}
