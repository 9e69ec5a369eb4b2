//! Navigation state: which view is on screen

/// The active view
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Screen {
    /// Triaged queue of every task
    #[default]
    Today,
    /// Patient roster
    Patients,
    /// One patient's open tasks and the add-task form
    PatientDetail { patient_id: u32 },
}

impl Screen {
    /// Destination of the back control. Always the today queue, whichever
    /// list the detail view was opened from.
    pub fn back() -> Self {
        Self::Today
    }

    /// Patient shown by this screen, if any
    pub fn patient_id(&self) -> Option<u32> {
        match self {
            Self::PatientDetail { patient_id } => Some(*patient_id),
            _ => None,
        }
    }

    pub fn is_detail(&self) -> bool {
        matches!(self, Self::PatientDetail { .. })
    }

    /// Tab index for the tab bar. Detail has no tab of its own.
    pub fn tab_index(&self) -> Option<usize> {
        match self {
            Self::Today => Some(0),
            Self::Patients => Some(1),
            Self::PatientDetail { .. } => None,
        }
    }

    /// Title for headers and log lines
    pub fn title(&self) -> &'static str {
        match self {
            Self::Today => "Today queue",
            Self::Patients => "Patients",
            Self::PatientDetail { .. } => "Patient",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_screen() {
        assert_eq!(Screen::default(), Screen::Today);
    }

    #[test]
    fn test_patient_id() {
        assert_eq!(Screen::PatientDetail { patient_id: 2 }.patient_id(), Some(2));
        assert_eq!(Screen::Patients.patient_id(), None);
        assert!(Screen::PatientDetail { patient_id: 2 }.is_detail());
    }

    #[test]
    fn test_back_is_today() {
        assert_eq!(Screen::back(), Screen::Today);
    }

    #[test]
    fn test_tab_index() {
        assert_eq!(Screen::Today.tab_index(), Some(0));
        assert_eq!(Screen::Patients.tab_index(), Some(1));
        assert_eq!(Screen::PatientDetail { patient_id: 1 }.tab_index(), None);
    }
}
