// Detail modal rendering.
// Pure projection of one user record into a centered, dismissible overlay.
// Returns the rendered bounds so mouse hit-testing matches what is on screen.

use ratatui::{prelude::*, widgets::*};

use crate::api::User;

/// Compute the centered modal area within the frame.
fn modal_area(area: Rect) -> Rect {
    let modal_width = 64.min(area.width.saturating_sub(4)).max(20);
    let modal_height = 19.min(area.height.saturating_sub(2)).max(8);
    let modal_x = (area.width.saturating_sub(modal_width)) / 2;
    let modal_y = (area.height.saturating_sub(modal_height)) / 2;
    Rect::new(modal_x, modal_y, modal_width, modal_height)
}

fn field<'a>(label: &'a str, value: impl Into<String>) -> Line<'a> {
    Line::from(vec![
        Span::styled(format!("  {label}: "), Style::default().fg(Color::DarkGray)),
        Span::raw(value.into()),
    ])
}

fn section(title: &str) -> Line<'_> {
    Line::from(Span::styled(
        title,
        Style::default()
            .fg(Color::White)
            .add_modifier(Modifier::BOLD),
    ))
}

/// Draw the detail modal for a user record on top of the current view.
pub fn draw_detail_modal(frame: &mut Frame, user: &User) -> Rect {
    let area = modal_area(frame.area());

    // Clear the area behind the modal
    frame.render_widget(Clear, area);

    let text = vec![
        section("Personal Information"),
        field("Username", &user.username),
        field("Email", &user.email),
        field("Phone", &user.phone),
        Line::from(vec![
            Span::styled("  Website: ", Style::default().fg(Color::DarkGray)),
            Span::styled(user.website_link(), Style::default().fg(Color::Blue)),
        ]),
        Line::from(""),
        section("Address"),
        field(
            "Street",
            format!("{}, {}", user.address.street, user.address.suite),
        ),
        field(
            "City",
            format!("{}, {}", user.address.city, user.address.zipcode),
        ),
        Line::from(vec![
            Span::styled("  Map: ", Style::default().fg(Color::DarkGray)),
            Span::styled(user.map_link(), Style::default().fg(Color::Blue)),
        ]),
        Line::from(""),
        section("Company"),
        field("Name", &user.company.name),
        field("Catch Phrase", format!("\"{}\"", user.company.catch_phrase)),
        field("Business", &user.company.bs),
        Line::from(""),
        Line::from(vec![
            Span::styled("Esc", Style::default().fg(Color::Yellow)),
            Span::styled(" or ", Style::default().fg(Color::DarkGray)),
            Span::styled("x", Style::default().fg(Color::Yellow)),
            Span::styled(
                " to close · click outside to dismiss",
                Style::default().fg(Color::DarkGray),
            ),
        ]),
    ];

    let modal = Paragraph::new(text)
        .wrap(Wrap { trim: false })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::Cyan))
                .title(format!(" {} ", user.name))
                .title_style(
                    Style::default()
                        .fg(Color::Cyan)
                        .add_modifier(Modifier::BOLD),
                ),
        );

    frame.render_widget(modal, area);
    area
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_modal_is_centered_within_frame() {
        let area = modal_area(Rect::new(0, 0, 120, 40));
        assert_eq!(area.width, 64);
        assert_eq!(area.height, 19);
        assert_eq!(area.x, 28);
        assert_eq!(area.y, 10);
    }

    #[test]
    fn test_modal_shrinks_on_small_terminals() {
        let area = modal_area(Rect::new(0, 0, 40, 12));
        assert!(area.width <= 36);
        assert!(area.height <= 10);
    }
}
