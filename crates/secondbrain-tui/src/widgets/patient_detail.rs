//! Patient detail widget
//!
//! Header with the patient, their open tasks in storage order, and the
//! add-task input box.

use super::{acuity_color, priority_color};
use ratatui::{
    prelude::*,
    widgets::{Block, Borders, List, ListItem, Paragraph},
};
use secondbrain_core::{DetailTaskRow, PatientDetailView};

const PLACEHOLDER: &str = "e.g. Check K+ in 4h";

pub struct PatientDetailWidget;

impl PatientDetailWidget {
    /// Render the detail view with the current draft in the input box
    pub fn render(view: &PatientDetailView, draft: &str, area: Rect, buf: &mut Buffer) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(4), // Patient header
                Constraint::Min(3),    // Open tasks
                Constraint::Length(3), // Add task input
            ])
            .split(area);

        Self::render_header(view, chunks[0], buf);
        Self::render_tasks(&view.tasks, chunks[1], buf);
        Self::render_input(draft, chunks[2], buf);
    }

    fn render_header(view: &PatientDetailView, area: Rect, buf: &mut Buffer) {
        let patient = &view.patient;
        let lines = vec![
            Line::from(vec![
                Span::styled("[Esc] ← ", Style::default().fg(Color::Yellow)),
                Span::styled(
                    patient.name.clone(),
                    Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
                ),
            ]),
            Line::from(vec![
                Span::styled(
                    format!("{} · ", patient.summary()),
                    Style::default().fg(Color::Gray),
                ),
                Span::styled(
                    patient.acuity.badge(),
                    Style::default().fg(acuity_color(patient.acuity)),
                ),
            ]),
        ];

        Paragraph::new(lines)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::Cyan)),
            )
            .render(area, buf);
    }

    fn render_tasks(tasks: &[DetailTaskRow], area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .title(" OPEN TASKS ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan));

        let inner = block.inner(area);
        block.render(area, buf);

        if tasks.is_empty() {
            buf.set_string(
                inner.x + 1,
                inner.y,
                "No open tasks",
                Style::default().fg(Color::DarkGray),
            );
            return;
        }

        let items: Vec<ListItem> = tasks.iter().map(Self::format_task).collect();
        Widget::render(List::new(items), inner, buf);
    }

    /// Format one task: title, due label and priority, notes underneath
    fn format_task(task: &DetailTaskRow) -> ListItem<'static> {
        let mut lines = vec![Line::from(vec![
            Span::styled(task.title.clone(), Style::default().fg(Color::White)),
            Span::raw("  "),
            Span::styled(task.due.clone(), Style::default().fg(Color::Gray)),
            Span::raw("  "),
            Span::styled(
                task.priority.badge(),
                Style::default().fg(priority_color(task.priority)),
            ),
        ])];

        if let Some(notes) = &task.notes {
            lines.push(Line::styled(
                format!("  {}", notes),
                Style::default()
                    .fg(Color::DarkGray)
                    .add_modifier(Modifier::ITALIC),
            ));
        }

        ListItem::new(lines)
    }

    fn render_input(draft: &str, area: Rect, buf: &mut Buffer) {
        let line = if draft.is_empty() {
            Line::from(vec![
                Span::styled("▏", Style::default().fg(Color::Yellow)),
                Span::styled(PLACEHOLDER, Style::default().fg(Color::DarkGray)),
            ])
        } else {
            Line::from(vec![
                Span::raw(draft.to_string()),
                Span::styled("▏", Style::default().fg(Color::Yellow)),
            ])
        };

        Paragraph::new(line)
            .block(
                Block::default()
                    .title(" ADD TASK (LOCAL ONLY) · [Enter] add ")
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::Yellow)),
            )
            .render(area, buf);
    }
}
