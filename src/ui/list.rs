// User table rendering.
// Rows display in arrival order; the cursor row is highlighted.

use ratatui::{prelude::*, widgets::*};

use crate::state::Directory;

/// Render a loading indicator.
pub fn render_loading(frame: &mut Frame, area: Rect, message: &str) {
    let text = Paragraph::new(format!("⏳ {}...", message))
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::Yellow));
    frame.render_widget(text, area);
}

/// Render an error message.
pub fn render_error(frame: &mut Frame, area: Rect, error: &str) {
    let text = Paragraph::new(format!("❌ {}", error))
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::Red));
    frame.render_widget(text, area);
}

/// Render an empty state message.
pub fn render_empty(frame: &mut Frame, area: Rect, message: &str) {
    let text = Paragraph::new(message)
        .alignment(Alignment::Center)
        .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(text, area);
}

/// Render the user table.
pub fn render_user_table(frame: &mut Frame, directory: &mut Directory, area: Rect) {
    let header = Row::new(["Name", "Email", "City", "Phone", "Website", "Company"])
        .style(
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        )
        .bottom_margin(1);

    let rows: Vec<Row> = directory
        .users()
        .iter()
        .map(|user| {
            Row::new(vec![
                Cell::from(Span::styled(
                    user.name.clone(),
                    Style::default().fg(Color::Cyan),
                )),
                Cell::from(user.email.clone()),
                Cell::from(user.address.city.clone()),
                Cell::from(user.phone.clone()),
                Cell::from(Span::styled(
                    user.website.clone(),
                    Style::default().fg(Color::Blue),
                )),
                Cell::from(user.company.name.clone()),
            ])
        })
        .collect();

    let widths = [
        Constraint::Percentage(20),
        Constraint::Percentage(24),
        Constraint::Percentage(14),
        Constraint::Percentage(16),
        Constraint::Percentage(13),
        Constraint::Percentage(13),
    ];

    let table = Table::new(rows, widths)
        .header(header)
        .block(Block::default().borders(Borders::ALL).title(" Users "))
        .row_highlight_style(
            Style::default()
                .bg(Color::DarkGray)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("> ");

    frame.render_stateful_widget(table, area, &mut directory.table_state);
}
