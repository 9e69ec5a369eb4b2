//! Main application state and key routing
//!
//! The `App` owns the ward and the view-local state (row cursor, add-task
//! draft). Key presses become intents; the ward applies them.

use crate::event::{
    is_activate_event, is_back_event, is_down_event, is_force_quit_event, is_quit_event,
    is_switch_tab_event, is_up_event, tab_shortcut,
};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use secondbrain_core::{today_queue, AddTaskForm, Intent, Screen, TuiConfig, Ward};
use tracing::debug;

/// Main application state
pub struct App {
    /// Authoritative ward state
    pub ward: Ward,
    /// Draft for the add-task form; lives as long as the detail view
    pub form: AddTaskForm,
    /// Cursor row on the today queue or the roster
    pub selected: usize,
    /// One-line feedback shown in the footer until the next key press
    pub status: Option<String>,
    /// Signal to exit the application
    pub should_quit: bool,
    pub config: TuiConfig,
}

impl App {
    pub fn new(ward: Ward, config: TuiConfig) -> Self {
        Self {
            ward,
            form: AddTaskForm::new(),
            selected: 0,
            status: None,
            should_quit: false,
            config,
        }
    }

    pub fn screen(&self) -> Screen {
        self.ward.screen()
    }

    /// Number of selectable rows on the current screen
    pub fn row_count(&self) -> usize {
        match self.screen() {
            Screen::Today => self.ward.tasks().len(),
            Screen::Patients => self.ward.patients().len(),
            Screen::PatientDetail { .. } => 0,
        }
    }

    pub fn select_next(&mut self) {
        let count = self.row_count();
        if count > 0 {
            self.selected = (self.selected + 1).min(count - 1);
        }
    }

    pub fn select_prev(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    /// Flip between the two tabs. From the detail view this lands on Today.
    pub fn switch_tab(&mut self) {
        let target = match self.screen() {
            Screen::Today => Screen::Patients,
            Screen::Patients | Screen::PatientDetail { .. } => Screen::Today,
        };
        self.dispatch(Intent::Navigate(target));
    }

    /// Open the patient behind the cursor row
    pub fn activate_selected(&mut self) {
        let patient_id = match self.screen() {
            Screen::Today => match today_queue(&self.ward) {
                Ok(rows) => rows.get(self.selected).map(|row| row.patient_id),
                Err(e) => {
                    self.status = Some(e.to_string());
                    None
                }
            },
            Screen::Patients => self.ward.patients().get(self.selected).map(|p| p.id),
            Screen::PatientDetail { .. } => None,
        };

        if let Some(patient_id) = patient_id {
            self.dispatch(Intent::Navigate(Screen::PatientDetail { patient_id }));
        }
    }

    /// Hand an intent to the ward and reset view-local state on screen changes
    pub fn dispatch(&mut self, intent: Intent) {
        let before = self.screen();
        let adding = matches!(intent, Intent::AddTask { .. });

        match self.ward.apply(intent) {
            Ok(()) if adding => {
                if let Some(task) = self.ward.tasks().last() {
                    self.status = Some(format!("Added task #{}", task.id));
                }
            }
            Ok(()) => {}
            Err(e) => self.status = Some(e.to_string()),
        }

        if self.screen() != before {
            self.selected = 0;
            self.form.clear();
        }
    }

    /// Route one key press
    pub fn handle_key(&mut self, key: KeyEvent) {
        self.status = None;

        if is_force_quit_event(key) {
            self.should_quit = true;
            return;
        }

        let screen = self.screen();
        if let Some(target) = tab_shortcut(key, screen.is_detail()) {
            self.dispatch(Intent::Navigate(target));
            return;
        }
        if is_switch_tab_event(key) {
            self.switch_tab();
            return;
        }

        match screen {
            Screen::PatientDetail { patient_id } => self.handle_detail_key(patient_id, key),
            Screen::Today | Screen::Patients => {
                if is_quit_event(key) {
                    self.should_quit = true;
                } else if is_up_event(key) {
                    self.select_prev();
                } else if is_down_event(key) {
                    self.select_next();
                } else if is_activate_event(key) {
                    self.activate_selected();
                }
            }
        }
    }

    fn handle_detail_key(&mut self, patient_id: u32, key: KeyEvent) {
        if is_back_event(key) {
            self.dispatch(Intent::Navigate(Screen::back()));
        } else if is_activate_event(key) {
            match self.form.submit(patient_id) {
                Some(intent) => self.dispatch(intent),
                None => debug!("Ignored blank task title"),
            }
        } else {
            match key.code {
                KeyCode::Backspace => {
                    self.form.pop();
                }
                KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                    self.form.push(c);
                }
                _ => {}
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn app() -> App {
        App::new(Ward::seeded().unwrap(), TuiConfig::default())
    }

    fn press(app: &mut App, code: KeyCode) {
        app.handle_key(KeyEvent::new(code, KeyModifiers::NONE));
    }

    fn type_text(app: &mut App, text: &str) {
        text.chars().for_each(|c| press(app, KeyCode::Char(c)));
    }

    #[test]
    fn test_app_creation() {
        let app = app();
        assert_eq!(app.screen(), Screen::Today);
        assert_eq!(app.selected, 0);
        assert!(!app.should_quit);
    }

    #[test]
    fn test_tab_switching() {
        let mut app = app();
        press(&mut app, KeyCode::Tab);
        assert_eq!(app.screen(), Screen::Patients);
        press(&mut app, KeyCode::BackTab);
        assert_eq!(app.screen(), Screen::Today);
        press(&mut app, KeyCode::Char('p'));
        assert_eq!(app.screen(), Screen::Patients);
    }

    #[test]
    fn test_cursor_is_clamped() {
        let mut app = app();
        press(&mut app, KeyCode::Up);
        assert_eq!(app.selected, 0);
        for _ in 0..20 {
            press(&mut app, KeyCode::Down);
        }
        assert_eq!(app.selected, 5);
    }

    #[test]
    fn test_enter_on_queue_opens_patient_of_first_triaged_task() {
        let mut app = app();
        press(&mut app, KeyCode::Enter);
        // Task 3 (overdue) belongs to Maria Garcia
        assert_eq!(app.screen(), Screen::PatientDetail { patient_id: 2 });
    }

    #[test]
    fn test_enter_on_roster_opens_selected_patient() {
        let mut app = app();
        press(&mut app, KeyCode::Char('2'));
        press(&mut app, KeyCode::Down);
        press(&mut app, KeyCode::Down);
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.screen(), Screen::PatientDetail { patient_id: 3 });
    }

    #[test]
    fn test_add_task_through_detail_form() {
        let mut app = app();
        app.dispatch(Intent::Navigate(Screen::PatientDetail { patient_id: 1 }));

        // 'q' and 'p' are text here, not shortcuts
        type_text(&mut app, "Check K+ in 4h q p");
        press(&mut app, KeyCode::Backspace);
        press(&mut app, KeyCode::Backspace);
        press(&mut app, KeyCode::Enter);

        let task = app.ward.tasks().last().unwrap();
        assert_eq!(task.id, 7);
        assert_eq!(task.title, "Check K+ in 4h q");
        assert!(app.form.is_empty());
        assert_eq!(app.status.as_deref(), Some("Added task #7"));
        assert!(!app.should_quit);
    }

    #[test]
    fn test_blank_submit_is_ignored() {
        let mut app = app();
        app.dispatch(Intent::Navigate(Screen::PatientDetail { patient_id: 1 }));
        type_text(&mut app, "   ");
        press(&mut app, KeyCode::Enter);

        assert_eq!(app.ward.tasks().len(), 6);
        assert!(app.status.is_none());
    }

    #[test]
    fn test_back_goes_to_today_and_drops_draft() {
        let mut app = app();
        press(&mut app, KeyCode::Tab);
        press(&mut app, KeyCode::Enter);
        assert_eq!(app.screen(), Screen::PatientDetail { patient_id: 1 });

        type_text(&mut app, "half typed");
        press(&mut app, KeyCode::Esc);
        assert_eq!(app.screen(), Screen::Today);
        assert!(app.form.is_empty());
    }

    #[test]
    fn test_unknown_patient_reports_status() {
        let mut app = app();
        app.dispatch(Intent::Navigate(Screen::PatientDetail { patient_id: 40 }));
        assert_eq!(app.screen(), Screen::Today);
        assert_eq!(app.status.as_deref(), Some("Patient not found: 40"));
    }

    #[test]
    fn test_quit_keys() {
        let mut app = app();
        press(&mut app, KeyCode::Char('q'));
        assert!(app.should_quit);

        let mut detail = self::app();
        detail.dispatch(Intent::Navigate(Screen::PatientDetail { patient_id: 1 }));
        detail.handle_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL));
        assert!(detail.should_quit);
        assert!(detail.form.is_empty());
    }
}
