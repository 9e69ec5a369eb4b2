//! Main UI layout and rendering
//!
//! Header, the active view, the tab bar and a one-line footer.

use crate::{
    app::App,
    widgets::{PatientDetailWidget, RosterWidget, TodayQueueWidget},
};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    prelude::*,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Tabs},
    Frame,
};
use secondbrain_core::{patient_detail, roster, today_queue, Screen};

const TAB_TITLES: [&str; 2] = ["Today", "Patients"];

/// Draw the entire UI
pub fn draw(frame: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(0),    // Active view
            Constraint::Length(3), // Tab bar
            Constraint::Length(1), // Footer
        ])
        .split(frame.area());

    render_header(frame, chunks[0], app);

    match app.screen() {
        Screen::Today => render_today(frame, chunks[1], app),
        Screen::Patients => render_patients(frame, chunks[1], app),
        Screen::PatientDetail { patient_id } => render_detail(frame, chunks[1], app, patient_id),
    }

    render_tabs(frame, chunks[2], app.screen());
    render_footer(frame, chunks[3], app);
}

/// Render the header with title, clinician and clock
fn render_header(frame: &mut Frame, area: Rect, app: &App) {
    let header_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(75), Constraint::Percentage(25)])
        .split(area);

    let title = Paragraph::new(Line::from(vec![
        Span::styled(
            "SECONDBRAIN",
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
        ),
        Span::raw("  "),
        Span::styled(
            format!("{} · {}", app.ward.clinician().name, app.screen().title()),
            Style::default().fg(Color::Gray),
        ),
    ]))
    .block(Block::default().borders(Borders::ALL));
    frame.render_widget(title, header_chunks[0]);

    let clock = Paragraph::new(chrono::Local::now().format("%a %d %b %H:%M").to_string())
        .block(Block::default().borders(Borders::ALL))
        .alignment(Alignment::Right);
    frame.render_widget(clock, header_chunks[1]);
}

fn render_today(frame: &mut Frame, area: Rect, app: &App) {
    match today_queue(&app.ward) {
        Ok(rows) => frame.render_widget(
            WidgetAdapter::new(|area, buf| {
                TodayQueueWidget::render(&rows, app.selected, area, buf)
            }),
            area,
        ),
        Err(e) => render_error(frame, area, &e.to_string()),
    }
}

fn render_patients(frame: &mut Frame, area: Rect, app: &App) {
    let rows = roster(&app.ward);
    frame.render_widget(
        WidgetAdapter::new(|area, buf| RosterWidget::render(&rows, app.selected, area, buf)),
        area,
    );
}

fn render_detail(frame: &mut Frame, area: Rect, app: &App, patient_id: u32) {
    match patient_detail(&app.ward, patient_id) {
        Ok(view) => frame.render_widget(
            WidgetAdapter::new(|area, buf| {
                PatientDetailWidget::render(&view, app.form.draft(), area, buf)
            }),
            area,
        ),
        Err(e) => render_error(frame, area, &e.to_string()),
    }
}

fn render_error(frame: &mut Frame, area: Rect, message: &str) {
    let error = Paragraph::new(message.to_string())
        .style(Style::default().fg(Color::Red))
        .block(Block::default().borders(Borders::ALL).title(" ERROR "));
    frame.render_widget(error, area);
}

/// Tab bar. The detail view has no tab, so nothing is selected there.
fn render_tabs(frame: &mut Frame, area: Rect, screen: Screen) {
    frame.render_widget(tab_bar(screen), area);
}

fn tab_bar(screen: Screen) -> Tabs<'static> {
    let tabs = Tabs::new(TAB_TITLES.to_vec())
        .block(Block::default().borders(Borders::ALL))
        .style(Style::default().fg(Color::White));

    let tabs = match screen.tab_index() {
        Some(index) => tabs
            .select(index)
            .highlight_style(Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)),
        None => tabs.select(None),
    };
    tabs
}

/// Footer: the last status message, or the keybindings for this screen
fn render_footer(frame: &mut Frame, area: Rect, app: &App) {
    let line = if let Some(status) = &app.status {
        Line::styled(status.clone(), Style::default().fg(Color::Yellow))
    } else if app.config.show_help {
        let keys: &[(&str, &str)] = if app.screen().is_detail() {
            &[
                ("[Esc]", " back "),
                ("[Enter]", " add "),
                ("[Tab]", " today "),
                ("[Ctrl+C]", " quit"),
            ]
        } else {
            &[
                ("[↑↓]", " move "),
                ("[Enter]", " open "),
                ("[Tab]", " switch "),
                ("[q]", " quit"),
            ]
        };
        Line::from(
            keys.iter()
                .flat_map(|(key, label)| {
                    [
                        Span::styled(*key, Style::default().fg(Color::Yellow)),
                        Span::raw(*label),
                    ]
                })
                .collect::<Vec<_>>(),
        )
    } else {
        Line::default()
    };

    frame.render_widget(Paragraph::new(line), area);
}

/// Widget adapter to bridge static render methods to ratatui's Widget trait
struct WidgetAdapter<F>
where
    F: Fn(Rect, &mut Buffer),
{
    render_fn: F,
}

impl<F> WidgetAdapter<F>
where
    F: Fn(Rect, &mut Buffer),
{
    fn new(render_fn: F) -> Self {
        Self { render_fn }
    }
}

impl<F> Widget for WidgetAdapter<F>
where
    F: Fn(Rect, &mut Buffer),
{
    fn render(self, area: Rect, buf: &mut Buffer) {
        (self.render_fn)(area, buf);
    }
}
