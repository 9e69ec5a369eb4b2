//! The ward: authoritative in-memory state and the intents that change it
//!
//! `Ward` owns the clinician, the patient roster, the task list and the
//! current screen. Views only ever see `&Ward`; every change goes through
//! [`Ward::apply`].

use std::collections::HashSet;

use chrono::Utc;
use tracing::{debug, info, warn};

use crate::seed::Seed;
use crate::{BrainError, Clinician, Patient, Priority, Result, Screen, Task, TaskStatus};

/// Due label given to tasks added from the detail view
pub const NEW_TASK_DUE: &str = "Today";

/// A requested state change, emitted by a view
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Intent {
    /// Replace the current screen
    Navigate(Screen),
    /// Append a new open task for a patient
    AddTask { patient_id: u32, title: String },
}

/// Authoritative ward state
#[derive(Debug, Clone)]
pub struct Ward {
    clinician: Clinician,
    patients: Vec<Patient>,
    tasks: Vec<Task>,
    screen: Screen,
}

impl Ward {
    /// Build a ward, checking that ids are unique and every task's patient exists
    pub fn new(clinician: Clinician, patients: Vec<Patient>, tasks: Vec<Task>) -> Result<Self> {
        let mut patient_ids = HashSet::new();
        for patient in &patients {
            if !patient_ids.insert(patient.id) {
                return Err(BrainError::DuplicatePatientId(patient.id));
            }
        }

        let mut task_ids = HashSet::new();
        for task in &tasks {
            if !task_ids.insert(task.id) {
                return Err(BrainError::DuplicateTaskId(task.id));
            }
            if !patient_ids.contains(&task.patient_id) {
                return Err(BrainError::PatientNotFound(task.patient_id));
            }
        }

        Ok(Self {
            clinician,
            patients,
            tasks,
            screen: Screen::default(),
        })
    }

    pub fn from_seed(seed: Seed) -> Result<Self> {
        Self::new(seed.clinician, seed.patients, seed.tasks)
    }

    /// Ward populated with the built-in seed lists
    pub fn seeded() -> Result<Self> {
        Self::from_seed(Seed::builtin())
    }

    pub fn clinician(&self) -> &Clinician {
        &self.clinician
    }

    /// Patients in storage order
    pub fn patients(&self) -> &[Patient] {
        &self.patients
    }

    /// Tasks in storage (insertion) order
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    pub fn screen(&self) -> Screen {
        self.screen
    }

    /// Look up a patient by id
    pub fn patient(&self, id: u32) -> Result<&Patient> {
        self.patients
            .iter()
            .find(|p| p.id == id)
            .ok_or(BrainError::PatientNotFound(id))
    }

    /// Open tasks for a patient, in storage order
    pub fn open_tasks_for(&self, patient_id: u32) -> impl Iterator<Item = &Task> {
        self.tasks
            .iter()
            .filter(move |t| t.patient_id == patient_id && t.is_open())
    }

    pub fn open_task_count(&self, patient_id: u32) -> usize {
        self.open_tasks_for(patient_id).count()
    }

    /// Id the next added task will receive: one past the largest existing id.
    /// A seed holding `u32::MAX` leaves no id to hand out.
    pub fn next_task_id(&self) -> Result<u32> {
        match self.tasks.iter().map(|t| t.id).max() {
            Some(max) => max.checked_add(1).ok_or(BrainError::TaskIdExhausted(max)),
            None => Ok(1),
        }
    }

    /// Switch screens. Detail screens must name a known patient; an unknown
    /// id is rejected and the current screen is kept.
    pub fn navigate(&mut self, screen: Screen) -> Result<()> {
        if let Some(patient_id) = screen.patient_id() {
            self.patient(patient_id)?;
        }
        debug!("Navigate {:?} -> {:?}", self.screen, screen);
        self.screen = screen;
        Ok(())
    }

    /// Append a new open, medium-priority task due "Today"
    pub fn add_task(&mut self, patient_id: u32, title: impl Into<String>) -> Result<&Task> {
        self.patient(patient_id)?;
        let id = self.next_task_id()?;

        let task = Task {
            id,
            patient_id,
            title: title.into(),
            due: NEW_TASK_DUE.to_string(),
            priority: Priority::Medium,
            status: TaskStatus::Open,
            notes: None,
            created_at: Utc::now(),
        };
        info!("Added task {} for patient {}: {}", task.id, patient_id, task.title);

        self.tasks.push(task);
        let index = self.tasks.len() - 1;
        Ok(&self.tasks[index])
    }

    /// Apply an intent emitted by a view
    pub fn apply(&mut self, intent: Intent) -> Result<()> {
        let result = match intent {
            Intent::Navigate(screen) => self.navigate(screen),
            Intent::AddTask { patient_id, title } => self.add_task(patient_id, title).map(|_| ()),
        };
        if let Err(e) = &result {
            warn!("Intent rejected: {}", e);
        }
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Acuity;

    fn ward() -> Ward {
        Ward::seeded().unwrap()
    }

    #[test]
    fn test_seeded_ward() {
        let ward = ward();
        assert_eq!(ward.patients().len(), 3);
        assert_eq!(ward.tasks().len(), 6);
        assert_eq!(ward.screen(), Screen::Today);
    }

    #[test]
    fn test_next_task_id() {
        assert_eq!(ward().next_task_id().unwrap(), 7);

        let empty = Ward::new(Clinician::default(), vec![], vec![]).unwrap();
        assert_eq!(empty.next_task_id().unwrap(), 1);
    }

    #[test]
    fn test_next_task_id_uses_max_not_len() {
        let patients = vec![Patient::new(1, "A", "1A", "x", Acuity::Normal)];
        let tasks = vec![
            Task::new(10, 1, "late id", "Today", Priority::Low),
            Task::new(3, 1, "early id", "Today", Priority::Low),
        ];
        let ward = Ward::new(Clinician::default(), patients, tasks).unwrap();
        assert_eq!(ward.next_task_id().unwrap(), 11);
    }

    #[test]
    fn test_add_task_after_max_id_is_rejected() {
        let seed = crate::seed::parse_seed(
            r#"{
                "patients": [
                    {"id": 1, "name": "A", "bed": "1A", "main_problem": "x", "acuity": "normal"}
                ],
                "tasks": [
                    {"id": 4294967295, "patient_id": 1, "title": "last", "due": "Today",
                     "priority": "low"}
                ]
            }"#,
        )
        .unwrap();
        let mut ward = Ward::from_seed(seed).unwrap();

        let result = ward.apply(Intent::AddTask {
            patient_id: 1,
            title: "one more".to_string(),
        });
        assert!(matches!(result, Err(BrainError::TaskIdExhausted(u32::MAX))));
        assert_eq!(ward.tasks().len(), 1);
        assert_eq!(ward.tasks()[0].id, u32::MAX);
    }

    #[test]
    fn test_add_task_defaults() {
        let mut ward = ward();
        let task = ward.add_task(1, "Check K+ in 4h").unwrap().clone();

        assert_eq!(task.id, 7);
        assert_eq!(task.patient_id, 1);
        assert_eq!(task.title, "Check K+ in 4h");
        assert_eq!(task.due, "Today");
        assert_eq!(task.priority, Priority::Medium);
        assert_eq!(task.status, TaskStatus::Open);
        assert_eq!(ward.tasks().last(), Some(&task));
    }

    #[test]
    fn test_add_task_unknown_patient() {
        let mut ward = ward();
        let result = ward.add_task(42, "Orphan");
        assert!(matches!(result, Err(BrainError::PatientNotFound(42))));
        assert_eq!(ward.tasks().len(), 6);
    }

    #[test]
    fn test_navigate_unknown_patient_keeps_screen() {
        let mut ward = ward();
        ward.navigate(Screen::Patients).unwrap();

        let result = ward.navigate(Screen::PatientDetail { patient_id: 99 });
        assert!(matches!(result, Err(BrainError::PatientNotFound(99))));
        assert_eq!(ward.screen(), Screen::Patients);
    }

    #[test]
    fn test_back_from_detail_lands_on_today() {
        for start in [Screen::Today, Screen::Patients] {
            let mut ward = ward();
            ward.apply(Intent::Navigate(start)).unwrap();
            ward.apply(Intent::Navigate(Screen::PatientDetail { patient_id: 2 }))
                .unwrap();
            ward.apply(Intent::Navigate(Screen::back())).unwrap();
            assert_eq!(ward.screen(), Screen::Today);
        }
    }

    #[test]
    fn test_open_task_count() {
        let ward = ward();
        assert_eq!(ward.open_task_count(1), 2);
        assert_eq!(ward.open_task_count(3), 2);
        assert_eq!(ward.open_task_count(99), 0);
    }

    #[test]
    fn test_done_tasks_not_counted() {
        let patients = vec![Patient::new(1, "A", "1A", "x", Acuity::Normal)];
        let mut done = Task::new(2, 1, "done", "Today", Priority::Low);
        done.status = TaskStatus::Done;
        let tasks = vec![Task::new(1, 1, "open", "Today", Priority::Low), done];

        let ward = Ward::new(Clinician::default(), patients, tasks).unwrap();
        assert_eq!(ward.open_task_count(1), 1);
    }

    #[test]
    fn test_new_rejects_dangling_patient_reference() {
        let patients = vec![Patient::new(1, "A", "1A", "x", Acuity::Normal)];
        let tasks = vec![Task::new(1, 5, "dangling", "Today", Priority::Low)];
        let result = Ward::new(Clinician::default(), patients, tasks);
        assert!(matches!(result, Err(BrainError::PatientNotFound(5))));
    }

    #[test]
    fn test_new_rejects_duplicate_ids() {
        let patients = vec![
            Patient::new(1, "A", "1A", "x", Acuity::Normal),
            Patient::new(1, "B", "1B", "y", Acuity::Normal),
        ];
        let result = Ward::new(Clinician::default(), patients, vec![]);
        assert!(matches!(result, Err(BrainError::DuplicatePatientId(1))));

        let patients = vec![Patient::new(1, "A", "1A", "x", Acuity::Normal)];
        let tasks = vec![
            Task::new(4, 1, "a", "Today", Priority::Low),
            Task::new(4, 1, "b", "Today", Priority::Low),
        ];
        let result = Ward::new(Clinician::default(), patients, tasks);
        assert!(matches!(result, Err(BrainError::DuplicateTaskId(4))));
    }
}
