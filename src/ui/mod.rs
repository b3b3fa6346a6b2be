//! UI module for rendering the TUI

mod components;
mod forms;
mod layout;
mod login;
mod widgets;

use crate::app::App;
use crate::state::View;
use components::render_error_dialog;
use ratatui::Frame;

/// Main draw function
pub fn draw(frame: &mut Frame, app: &App) {
    let area = frame.area();

    let main_area = layout::create_layout(area);

    // Draw main content based on current view
    match &app.state.current_view {
        View::Signup => forms::draw_signup(frame, main_area, app),
        View::Login => login::draw(frame, main_area, app),
    }

    // Draw status bar
    layout::draw_status_bar(frame, app);

    // Error dialog overlays everything
    if let Some(message) = app.state.current_error() {
        render_error_dialog(frame, message);
    }
}
