pub mod dialog_popup;
pub mod helpers;
pub mod list_view;
pub mod status_row;

#[cfg(test)]
pub mod test_helpers;

use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout};
use ratatui::style::Style;
use ratatui::widgets::Block;

use super::app::App;

/// Main render function: task list, optional status row, dialog on top
pub fn render(frame: &mut Frame, app: &App) {
    let area = frame.area();

    // Background fill
    let bg_style = Style::default().bg(app.theme.background);
    frame.render_widget(Block::default().style(bg_style), area);

    if app.show_key_hints || app.key_debug {
        // Layout: content | status row (1 row)
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(1), Constraint::Length(1)])
            .split(area);
        list_view::render_list_view(frame, app, chunks[0]);
        status_row::render_status_row(frame, app, chunks[1]);
    } else {
        list_view::render_list_view(frame, app, area);
    }

    // Dialog (rendered on top of everything)
    if let Some(notice) = app.dialog.notice() {
        dialog_popup::render_dialog_popup(frame, app, notice, area);
    }
}
