//! Signup form rendering

use super::field_renderer::{draw_checkbox, draw_choice, draw_error, draw_field, draw_hint};
use crate::app::App;
use crate::state::{FieldName, FormFocus, Role};
use crate::ui::components::{render_button, BUTTON_HEIGHT};
use crate::ui::layout::{centered_card, CARD_WIDTH};
use crate::ui::widgets::{spinner_frame, wrap_text};
use ratatui::{
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

const FIELD_HEIGHT: u16 = 3;

/// One horizontal band of the form
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Row {
    Header,
    Field(FieldName),
    PasswordHint,
    PasswordError,
    Role,
    AdminCodeHint,
    Terms,
    /// Form-level error, sized to its wrapped line count
    Error(u16),
    Submit,
    Footer,
}

impl Row {
    fn height(&self) -> u16 {
        match self {
            Row::Header => 2,
            Row::Field(_) | Row::Role => FIELD_HEIGHT,
            Row::Submit => BUTTON_HEIGHT,
            Row::Error(lines) => (*lines).max(1),
            Row::PasswordHint
            | Row::PasswordError
            | Row::AdminCodeHint
            | Row::Terms
            | Row::Footer => 1,
        }
    }
}

/// Rows to draw, top to bottom, for the selected role
fn rows(show_admin_code: bool, error_lines: u16) -> Vec<Row> {
    let mut rows = vec![
        Row::Header,
        Row::Field(FieldName::Name),
        Row::Field(FieldName::Email),
        Row::Field(FieldName::Password),
        Row::PasswordHint,
        Row::Field(FieldName::ConfirmPassword),
        Row::PasswordError,
        Row::Role,
    ];
    if show_admin_code {
        rows.push(Row::Field(FieldName::AdminCode));
        rows.push(Row::AdminCodeHint);
    }
    rows.extend([Row::Terms, Row::Error(error_lines), Row::Submit, Row::Footer]);
    rows
}

/// Draw the account registration form
pub fn draw_signup(frame: &mut Frame, area: Rect, app: &App) {
    let signup = &app.state.signup;
    let form = signup.form();

    // Card border plus the horizontal margin on each side
    let text_width = CARD_WIDTH.min(area.width).saturating_sub(4) as usize;
    let error_lines = signup
        .error()
        .map(|err| wrap_text(&err.to_string(), text_width))
        .unwrap_or_default();
    let password_error_lines: Vec<String> =
        signup.password_error().map(ToString::to_string).into_iter().collect();

    let rows = rows(form.shows_admin_code(), error_lines.len() as u16);

    // +2 for the card border
    let content_height: u16 = rows.iter().map(Row::height).sum();
    let card = centered_card(area, content_height + 2);

    let block = Block::default()
        .title(" CodeMasters ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));
    let inner = block.inner(card);
    frame.render_widget(block, card);

    let areas = Layout::vertical(rows.iter().map(|r| Constraint::Length(r.height())))
        .horizontal_margin(1)
        .split(inner);

    for (row, area) in rows.iter().zip(areas.iter().copied()) {
        match row {
            Row::Header => {
                let header = Paragraph::new(vec![
                    Line::from(Span::styled(
                        "Create an account",
                        Style::default().add_modifier(Modifier::BOLD),
                    )),
                    Line::from(Span::styled(
                        "Enter your information to register for CodeMasters",
                        Style::default().fg(Color::Gray),
                    )),
                ]);
                frame.render_widget(header, area);
            }
            Row::Field(name) => {
                let is_active = form.focused_field() == Some(*name);
                draw_field(frame, area, form.field(*name), is_active);
            }
            Row::PasswordHint => {
                let hint = format!(
                    "Password must be at least {} characters long",
                    signup.policy().min_password_length
                );
                draw_hint(frame, area, &hint);
            }
            Row::PasswordError => {
                draw_error(frame, area, &password_error_lines);
            }
            Row::Role => {
                let selected = match form.role {
                    Role::User => 0,
                    Role::Admin => 1,
                };
                draw_choice(
                    frame,
                    area,
                    "Account Type",
                    &[Role::User.label(), Role::Admin.label()],
                    selected,
                    form.focus == FormFocus::Role,
                );
            }
            Row::AdminCodeHint => {
                if signup.admin_code_sent() {
                    draw_hint(
                        frame,
                        area,
                        "A verification code has been sent to your email.",
                    );
                }
            }
            Row::Terms => {
                draw_checkbox(
                    frame,
                    area,
                    "I agree to the terms and conditions",
                    form.agree_to_terms,
                    form.focus == FormFocus::Terms,
                );
            }
            Row::Error(_) => {
                draw_error(frame, area, &error_lines);
            }
            Row::Submit => {
                let label = if signup.is_loading() {
                    format!("{} Creating account", spinner_frame(app.tick))
                } else {
                    "Create Account".to_string()
                };
                render_button(
                    frame,
                    area,
                    &label,
                    form.focus == FormFocus::Submit,
                    !signup.is_loading(),
                );
            }
            Row::Footer => {
                draw_hint(frame, area, "Already have an account? Press Esc to sign in.");
            }
        }
    }
}
