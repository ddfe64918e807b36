//! UI rendering for the TUI.

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph},
    Frame,
};

use crate::features::focus::{render_bar_chart, TimerState};
use crate::tui::app::{App, View};

const CHART_LABEL_WIDTH: usize = 14;
// " |" before the bar plus " 999.9m" after it
const CHART_DECORATION: usize = 10;

/// Render the application UI.
pub fn render(frame: &mut Frame<'_>, app: &App) {
    // Create layout: header, body, status bar
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(0),    // Body
            Constraint::Length(1), // Status bar
        ])
        .split(frame.area());

    render_header(frame, app, chunks[0]);
    match app.view {
        View::Tracker => render_tracker(frame, app, chunks[1]),
        View::Analytics => render_analytics(frame, app, chunks[1]),
    }
    render_status_bar(frame, app, chunks[2]);
}

fn state_color(state: TimerState) -> Color {
    match state {
        TimerState::Idle => Color::White,
        TimerState::Running => Color::Green,
        TimerState::Paused => Color::Yellow,
    }
}

/// Render the header.
fn render_header(frame: &mut Frame<'_>, app: &App, area: Rect) {
    let tab = |label: &'static str, view: View| {
        let style = if app.view == view {
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        Span::styled(label, style)
    };

    let header = Paragraph::new(Line::from(vec![
        Span::raw(" "),
        tab("Tracker", View::Tracker),
        Span::raw("  "),
        tab("Analytics", View::Analytics),
    ]))
    .block(
        Block::default()
            .title(" stint ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan)),
    );

    frame.render_widget(header, area);
}

fn render_tracker(frame: &mut Frame<'_>, app: &App, area: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4), // Timer
            Constraint::Length(3), // Task input
            Constraint::Min(0),    // Recent sessions
            Constraint::Length(1), // Totals
        ])
        .split(area);

    let engine = app.tracker.engine();
    let state = engine.state();
    let timer = Paragraph::new(vec![
        Line::from(Span::styled(
            engine.format_elapsed(),
            Style::default()
                .fg(state_color(state))
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(
            state.status_text(),
            Style::default().fg(state_color(state)),
        )),
    ])
    .alignment(Alignment::Center)
    .block(Block::default().borders(Borders::ALL));
    frame.render_widget(timer, chunks[0]);

    let input_style = if app.input_enabled() {
        Style::default()
    } else {
        Style::default().fg(Color::DarkGray)
    };
    let input = Paragraph::new(app.input.as_str()).style(input_style).block(
        Block::default()
            .title(" What are you working on? ")
            .borders(Borders::ALL),
    );
    frame.render_widget(input, chunks[1]);

    let items: Vec<ListItem<'_>> = app
        .tracker
        .store()
        .recent(app.recent_limit)
        .iter()
        .map(|session| {
            ListItem::new(Line::from(vec![
                Span::styled(
                    format!("{:>8}  ", session.format_duration()),
                    Style::default().fg(Color::Cyan),
                ),
                Span::raw(session.task()),
                Span::styled(
                    format!("  {}", session.date_local().format("%H:%M")),
                    Style::default().fg(Color::DarkGray),
                ),
            ]))
        })
        .collect();
    let recent = List::new(items).block(
        Block::default()
            .title(" Recent Sessions ")
            .borders(Borders::ALL),
    );
    frame.render_widget(recent, chunks[2]);

    let stats = app.tracker.store().stats();
    let totals = Paragraph::new(format!(
        " Total time: {}   Sessions: {}",
        stats.format_total(),
        stats.count
    ))
    .style(Style::default().fg(Color::Green));
    frame.render_widget(totals, chunks[3]);
}

fn render_analytics(frame: &mut Frame<'_>, app: &App, area: Rect) {
    let block = Block::default()
        .title(" Time by Task ")
        .borders(Borders::ALL);

    let text = app.chart.current().map_or_else(String::new, |data| {
        let inner_width = usize::from(area.width.saturating_sub(2));
        let bar_width = inner_width
            .saturating_sub(CHART_LABEL_WIDTH + CHART_DECORATION)
            .max(1);
        render_bar_chart(data, CHART_LABEL_WIDTH, bar_width)
    });

    let chart = if text.is_empty() {
        Paragraph::new("No sessions yet").style(Style::default().fg(Color::DarkGray))
    } else {
        Paragraph::new(text).style(Style::default().fg(Color::Cyan))
    };
    frame.render_widget(chart.block(block), area);
}

/// Render the status bar.
fn render_status_bar(frame: &mut Frame<'_>, app: &App, area: Rect) {
    let status_text = app.status.as_deref().unwrap_or(
        "Enter:start/pause | Ctrl+S:stop | Tab:analytics | Ctrl+X:clear | Esc:quit",
    );

    let style = if app.pending_clear {
        Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    frame.render_widget(Paragraph::new(status_text).style(style), area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use crate::core::ManualClock;
    use crate::features::focus::{FocusTracker, MemoryRepository};
    use chrono::{TimeZone, Utc};
    use ratatui::{backend::TestBackend, Terminal};

    fn app() -> (App, ManualClock) {
        let clock = ManualClock::new(Utc.with_ymd_and_hms(2024, 7, 1, 8, 0, 0).unwrap());
        let config = Config::default();
        let tracker = FocusTracker::init(
            Box::new(MemoryRepository::new()),
            Box::new(clock.clone()),
            &config,
        );
        (App::new(tracker, &config), clock)
    }

    fn screen(app: &App) -> String {
        let mut terminal = Terminal::new(TestBackend::new(80, 24)).unwrap();
        terminal.draw(|frame| render(frame, app)).unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(ratatui::buffer::Cell::symbol)
            .collect()
    }

    #[test]
    fn test_tracker_view_idle() {
        let (app, _) = app();
        let text = screen(&app);

        assert!(text.contains("00:00:00"));
        assert!(text.contains("READY TO FOCUS"));
        assert!(text.contains("Sessions: 0"));
    }

    #[test]
    fn test_tracker_view_running() {
        let (mut app, clock) = app();
        app.start_with("Write").unwrap();
        clock.advance_ms(3_725_000);
        app.tick();

        let text = screen(&app);
        assert!(text.contains("01:02:05"));
        assert!(text.contains("FOCUSING..."));
    }

    #[test]
    fn test_analytics_view_shows_sample_chart() {
        let (mut app, _) = app();
        app.switch_view();

        let text = screen(&app);
        assert!(text.contains("Coding"));
        assert!(text.contains("45.0m"));
    }
}
