// UI module for rendering the TUI.
// Layout: header, user table, status bar, with the detail modal on top.

mod detail;
mod list;

use ratatui::{prelude::*, widgets::*};

use crate::app::App;
use crate::diagnostics::DiagLevel;
use crate::state::LoadState;

/// Main draw function that renders the entire UI.
pub fn draw(frame: &mut Frame, app: &mut App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(1),    // User table
            Constraint::Length(1), // Status bar
        ])
        .split(frame.area());

    draw_header(frame, chunks[0]);
    draw_content(frame, app, chunks[1]);
    draw_status_bar(frame, app, chunks[2]);

    if app.show_diagnostics {
        draw_diagnostics_overlay(frame, app);
    }

    // Detail modal (rendered last, on top of everything). The rendered
    // bounds are recorded for mouse hit-testing; None while closed.
    app.detail_bounds = app
        .directory
        .detail_user()
        .cloned()
        .map(|user| detail::draw_detail_modal(frame, &user));
}

/// Draw the title header.
fn draw_header(frame: &mut Frame, area: Rect) {
    let header = Paragraph::new("User Directory")
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::White).add_modifier(Modifier::BOLD))
        .block(
            Block::default()
                .borders(Borders::BOTTOM)
                .border_style(Style::default().fg(Color::DarkGray))
                .title(" roster ")
                .title_style(
                    Style::default()
                        .fg(Color::Cyan)
                        .add_modifier(Modifier::BOLD),
                ),
        );
    frame.render_widget(header, area);
}

/// Draw the main content area based on load status.
fn draw_content(frame: &mut Frame, app: &mut App, area: Rect) {
    match &app.load {
        LoadState::Loading => list::render_loading(frame, area, "Loading users"),
        LoadState::Failed(message) => list::render_error(frame, area, message),
        LoadState::Ready => {
            if app.directory.is_empty() {
                list::render_empty(frame, area, "No users in the directory");
            } else {
                list::render_user_table(frame, &mut app.directory, area);
            }
        }
    }
}

/// Draw the status bar with keybinding hints.
fn draw_status_bar(frame: &mut Frame, app: &App, area: Rect) {
    let mut hints = if app.directory.detail_open() {
        vec![
            Span::raw(" Esc/x "),
            Span::styled("Close", Style::default().fg(Color::DarkGray)),
            Span::raw("  click outside "),
            Span::styled("Dismiss", Style::default().fg(Color::DarkGray)),
        ]
    } else if app.show_diagnostics {
        vec![
            Span::raw(" Esc/` "),
            Span::styled("Close log", Style::default().fg(Color::DarkGray)),
        ]
    } else {
        vec![
            Span::raw(" ↑↓ "),
            Span::styled("Navigate", Style::default().fg(Color::DarkGray)),
            Span::raw("  ↵ "),
            Span::styled("Details", Style::default().fg(Color::DarkGray)),
            Span::raw("  d "),
            Span::styled("Delete", Style::default().fg(Color::DarkGray)),
            Span::raw("  ` "),
            Span::styled("Log", Style::default().fg(Color::DarkGray)),
            Span::raw("  q "),
            Span::styled("Quit", Style::default().fg(Color::DarkGray)),
        ]
    };

    if let Some(loaded_at) = &app.loaded_at {
        hints.push(Span::styled(
            format!(
                "  {} users · loaded {}",
                app.directory.len(),
                loaded_at.format("%H:%M:%S")
            ),
            Style::default().fg(Color::DarkGray),
        ));
    }

    let status = Paragraph::new(Line::from(hints));
    frame.render_widget(status, area);
}

/// Draw the diagnostics log overlay. Underlying failure causes live here,
/// never in the main view.
fn draw_diagnostics_overlay(frame: &mut Frame, app: &App) {
    let area = frame.area();

    let popup_width = 70.min(area.width.saturating_sub(4)).max(20);
    let popup_height = 16.min(area.height.saturating_sub(2)).max(6);
    let popup_x = (area.width.saturating_sub(popup_width)) / 2;
    let popup_y = (area.height.saturating_sub(popup_height)) / 2;
    let popup_area = Rect::new(popup_x, popup_y, popup_width, popup_height);

    frame.render_widget(Clear, popup_area);

    let visible = popup_height.saturating_sub(2) as usize;
    let entries = app.diagnostics.entries();
    let start = entries.len().saturating_sub(visible);
    let lines: Vec<Line> = if entries.is_empty() {
        vec![Line::from(Span::styled(
            "No diagnostics recorded",
            Style::default().fg(Color::DarkGray),
        ))]
    } else {
        entries[start..]
            .iter()
            .map(|entry| {
                let color = match entry.level {
                    DiagLevel::Info => Color::DarkGray,
                    DiagLevel::Error => Color::Red,
                };
                Line::from(vec![
                    Span::styled(
                        format!("{} ", entry.timestamp.format("%H:%M:%S")),
                        Style::default().fg(Color::DarkGray),
                    ),
                    Span::styled(entry.message.clone(), Style::default().fg(color)),
                ])
            })
            .collect()
    };

    let log = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Cyan))
            .title(" Diagnostics ")
            .title_style(
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            ),
    );

    frame.render_widget(log, popup_area);
}
