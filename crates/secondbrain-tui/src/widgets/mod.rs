//! Ward widgets
//!
//! One widget per view. Each renders row models from `secondbrain_core::views`
//! and owns no state.

use ratatui::style::Color;
use secondbrain_core::{Acuity, Priority};

mod patient_detail;
mod roster;
mod today_queue;

pub use patient_detail::PatientDetailWidget;
pub use roster::RosterWidget;
pub use today_queue::TodayQueueWidget;

/// Chip color for a patient's acuity
pub fn acuity_color(acuity: Acuity) -> Color {
    match acuity {
        Acuity::Critical => Color::Red,
        Acuity::Important => Color::Yellow,
        Acuity::Normal => Color::Green,
    }
}

/// Text color for a task priority badge
pub fn priority_color(priority: Priority) -> Color {
    match priority {
        Priority::High => Color::LightRed,
        Priority::Medium => Color::Yellow,
        Priority::Low => Color::DarkGray,
    }
}

/// Truncate text to `max_len` characters, marking the cut with an ellipsis
pub fn truncate_text(text: &str, max_len: usize) -> String {
    if text.chars().count() <= max_len {
        text.to_string()
    } else {
        let truncated: String = text.chars().take(max_len.saturating_sub(1)).collect();
        format!("{}…", truncated)
    }
}

#[cfg(test)]
pub(crate) fn buffer_text(buf: &ratatui::buffer::Buffer) -> String {
    let area = buf.area;
    let mut text = String::new();
    for y in area.top()..area.bottom() {
        for x in area.left()..area.right() {
            text.push_str(buf[(x, y)].symbol());
        }
        text.push('\n');
    }
    text
}
