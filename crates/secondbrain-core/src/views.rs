//! Row models for the three views
//!
//! Each function reads a `&Ward` and returns plain rows ready to render,
//! either by the terminal UI or as JSON from the CLI. None of them mutate
//! the ward; the only view-owned state is the detail view's [`AddTaskForm`].

use serde::Serialize;

use crate::{
    triage_order, Acuity, Intent, Patient, PatientStatus, Priority, Result, Ward,
};

/// One row of the today queue
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QueueRow {
    pub task_id: u32,
    pub patient_id: u32,
    pub patient_name: String,
    /// Owning patient is critical; the row gets a flag
    pub critical: bool,
    pub title: String,
    pub due: String,
    pub overdue: bool,
    pub priority: Priority,
}

/// One row of the patient roster
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RosterRow {
    pub patient_id: u32,
    pub name: String,
    pub bed: String,
    pub main_problem: String,
    pub acuity: Acuity,
    pub status: PatientStatus,
    pub open_tasks: usize,
}

/// One open task on the patient detail view
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DetailTaskRow {
    pub task_id: u32,
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    pub due: String,
    pub priority: Priority,
}

/// Patient detail: the patient plus its open tasks in storage order
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PatientDetailView {
    pub patient: Patient,
    pub tasks: Vec<DetailTaskRow>,
}

/// Every task in triage order, joined with its patient
pub fn today_queue(ward: &Ward) -> Result<Vec<QueueRow>> {
    triage_order(ward.tasks())
        .into_iter()
        .map(|task| -> Result<QueueRow> {
            let patient = ward.patient(task.patient_id)?;
            Ok(QueueRow {
                task_id: task.id,
                patient_id: patient.id,
                patient_name: patient.name.clone(),
                critical: patient.is_critical(),
                title: task.title.clone(),
                due: task.due.clone(),
                overdue: task.is_overdue(),
                priority: task.priority,
            })
        })
        .collect()
}

/// All patients in storage order with their open-task counts
pub fn roster(ward: &Ward) -> Vec<RosterRow> {
    ward.patients()
        .iter()
        .map(|p| RosterRow {
            patient_id: p.id,
            name: p.name.clone(),
            bed: p.bed.clone(),
            main_problem: p.main_problem.clone(),
            acuity: p.acuity,
            status: p.status,
            open_tasks: ward.open_task_count(p.id),
        })
        .collect()
}

/// Detail view for one patient
pub fn patient_detail(ward: &Ward, patient_id: u32) -> Result<PatientDetailView> {
    let patient = ward.patient(patient_id)?.clone();
    let tasks = ward
        .open_tasks_for(patient_id)
        .map(|t| DetailTaskRow {
            task_id: t.id,
            title: t.title.clone(),
            notes: t.notes.clone(),
            due: t.due.clone(),
            priority: t.priority,
        })
        .collect();
    Ok(PatientDetailView { patient, tasks })
}

/// Draft text of the add-task form on the detail view
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AddTaskForm {
    draft: String,
}

impl AddTaskForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn draft(&self) -> &str {
        &self.draft
    }

    pub fn is_empty(&self) -> bool {
        self.draft.is_empty()
    }

    pub fn push(&mut self, c: char) {
        self.draft.push(c);
    }

    pub fn pop(&mut self) -> Option<char> {
        self.draft.pop()
    }

    pub fn clear(&mut self) {
        self.draft.clear();
    }

    /// Submit the draft for `patient_id`.
    ///
    /// Whitespace-only drafts are ignored and left as typed. Otherwise the
    /// trimmed title becomes an [`Intent::AddTask`] and the draft is cleared.
    pub fn submit(&mut self, patient_id: u32) -> Option<Intent> {
        let title = self.draft.trim();
        if title.is_empty() {
            return None;
        }
        let intent = Intent::AddTask {
            patient_id,
            title: title.to_string(),
        };
        self.draft.clear();
        Some(intent)
    }
}
