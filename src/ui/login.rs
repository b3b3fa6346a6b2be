//! Login view
//!
//! Sign-in itself is not implemented; the view is the landing spot after a
//! successful signup.

use super::layout::centered_card;
use crate::app::App;
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

/// Welcome line for the login view
pub fn welcome_message(registered: bool) -> &'static str {
    if registered {
        "Registration successful! Please sign in with your new account."
    } else {
        "Enter your credentials to access your CodeMasters account."
    }
}

/// Draw the login view
pub fn draw(frame: &mut Frame, area: Rect, app: &App) {
    let registered = app.state.view_params.registered;
    let card = centered_card(area, 9);

    let message_style = if registered {
        Style::default().fg(Color::Green)
    } else {
        Style::default().fg(Color::Gray)
    };

    let lines = vec![
        Line::from(Span::styled(
            "Sign in",
            Style::default().add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled(welcome_message(registered), message_style)),
        Line::from(""),
        Line::from(Span::styled(
            "Don't have an account? Press n to sign up.",
            Style::default().fg(Color::DarkGray),
        )),
    ];

    let block = Block::default()
        .title(" CodeMasters ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    frame.render_widget(
        Paragraph::new(lines)
            .wrap(Wrap { trim: false })
            .block(block),
        card,
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_welcome_message_after_signup() {
        assert!(welcome_message(true).starts_with("Registration successful"));
        assert!(!welcome_message(false).contains("Registration"));
    }
}
