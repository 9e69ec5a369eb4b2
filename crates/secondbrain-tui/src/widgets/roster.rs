//! Patient roster widget

use super::{acuity_color, truncate_text};
use ratatui::{
    prelude::*,
    widgets::{Block, Borders, Cell, Row, Table, TableState},
};
use secondbrain_core::{PatientStatus, RosterRow};

pub struct RosterWidget;

impl RosterWidget {
    /// Render every patient in storage order with their open-task count
    pub fn render(rows: &[RosterRow], selected: usize, area: Rect, buf: &mut Buffer) {
        let block = Block::default()
            .title(" PATIENTS ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan));

        let inner = block.inner(area);
        block.render(area, buf);

        if rows.is_empty() {
            buf.set_string(
                inner.x + 1,
                inner.y,
                "No patients on the ward",
                Style::default().fg(Color::DarkGray),
            );
            return;
        }

        let widths = [
            Constraint::Length(30), // Name + acuity chip
            Constraint::Min(20),    // Bed · problem
            Constraint::Length(8),  // Open count
        ];

        let table_rows: Vec<Row> = rows.iter().map(Self::create_row).collect();

        let table = Table::new(table_rows, widths)
            .column_spacing(1)
            .row_highlight_style(Style::default().add_modifier(Modifier::REVERSED))
            .highlight_symbol("▶ ");

        let mut state = TableState::default().with_selected(Some(selected));
        StatefulWidget::render(table, inner, buf, &mut state);
    }

    fn create_row(row: &RosterRow) -> Row<'static> {
        let name_style = if row.status == PatientStatus::Discharged {
            Style::default().fg(Color::DarkGray)
        } else {
            Style::default().fg(Color::White).add_modifier(Modifier::BOLD)
        };

        let name = Line::from(vec![
            Span::styled(truncate_text(&row.name, 18), name_style),
            Span::raw(" "),
            Span::styled(
                row.acuity.badge(),
                Style::default().fg(acuity_color(row.acuity)),
            ),
        ]);

        let count_style = if row.open_tasks > 0 {
            Style::default().fg(Color::Cyan)
        } else {
            Style::default().fg(Color::DarkGray)
        };

        Row::new(vec![
            Cell::from(name),
            Cell::from(format!("Bed {} · {}", row.bed, row.main_problem))
                .style(Style::default().fg(Color::Gray)),
            Cell::from(format!("{} open", row.open_tasks)).style(count_style),
        ])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::widgets::buffer_text;
    use secondbrain_core::{roster, Ward};

    #[test]
    fn test_render_seed_roster() {
        let ward = Ward::seeded().unwrap();
        let rows = roster(&ward);
        let mut buf = Buffer::empty(Rect::new(0, 0, 100, 6));

        RosterWidget::render(&rows, 2, buf.area, &mut buf);

        let text = buffer_text(&buf);
        let lines: Vec<&str> = text.lines().collect();
        assert!(lines[1].contains("John Doe"));
        assert!(lines[1].contains("Critical"));
        assert!(lines[1].contains("Bed 12A"));
        assert!(lines[3].contains("Ahmed Khan"));
        assert!(lines[3].contains("2 open"));
        assert!(lines[3].contains("▶"));
    }

    #[test]
    fn test_render_with_empty_roster() {
        let mut buf = Buffer::empty(Rect::new(0, 0, 60, 5));
        RosterWidget::render(&[], 0, buf.area, &mut buf);
        assert!(buffer_text(&buf).contains("No patients on the ward"));
    }
}
