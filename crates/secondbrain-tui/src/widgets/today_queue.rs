//! Today queue widget
//!
//! Every task in triage order, one row each, with the owning patient.

use super::{priority_color, truncate_text};
use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Cell, Row, Table, TableState},
};
use secondbrain_core::QueueRow;

pub struct TodayQueueWidget;

impl TodayQueueWidget {
    /// Render the queue with the cursor on `selected`
    pub fn render(rows: &[QueueRow], selected: usize, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .title(" TODAY QUEUE ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan));

        let inner = block.inner(area);
        block.render(area, buf);

        if rows.is_empty() {
            buf.set_string(
                inner.x + 1,
                inner.y,
                "No tasks for today",
                Style::default().fg(Color::DarkGray),
            );
            return;
        }

        let widths = [
            Constraint::Length(26), // Patient (+ critical chip)
            Constraint::Min(20),    // Task
            Constraint::Length(18), // Due
            Constraint::Length(12), // Priority
        ];

        let header = Row::new(vec![
            Cell::from("Patient"),
            Cell::from("Task"),
            Cell::from("Due"),
            Cell::from("Priority"),
        ])
        .style(
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        );

        let table_rows: Vec<Row> = rows.iter().map(Self::create_row).collect();

        let table = Table::new(table_rows, widths)
            .header(header)
            .column_spacing(1)
            .row_highlight_style(Style::default().add_modifier(Modifier::REVERSED))
            .highlight_symbol("▶ ");

        let mut state = TableState::default().with_selected(Some(selected));
        StatefulWidget::render(table, inner, buf, &mut state);
    }

    /// Create a table row for one queued task
    fn create_row(row: &QueueRow) -> Row<'static> {
        let mut patient = vec![Span::styled(
            truncate_text(&row.patient_name, 15),
            Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
        )];
        if row.critical {
            patient.push(Span::raw(" "));
            patient.push(Span::styled(
                "Critical",
                Style::default().fg(Color::White).bg(Color::Red),
            ));
        }

        let due_style = if row.overdue {
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::Gray)
        };

        Row::new(vec![
            Cell::from(Line::from(patient)),
            Cell::from(row.title.clone()).style(Style::default().fg(Color::Gray)),
            Cell::from(truncate_text(&row.due, 18)).style(due_style),
            Cell::from(row.priority.badge())
                .style(Style::default().fg(priority_color(row.priority))),
        ])
    }
}
