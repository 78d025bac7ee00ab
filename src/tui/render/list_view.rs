use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::Line;
use ratatui::widgets::Paragraph;

use crate::tui::app::App;

/// Render every card top to bottom, the selected one expanded
pub fn render_list_view(frame: &mut Frame, app: &App, area: Rect) {
    let lines: Vec<Line> = app
        .task_list
        .cards()
        .flat_map(|(card, selected)| card.render(selected, &app.theme))
        .collect();

    let paragraph = Paragraph::new(lines).style(Style::default().bg(app.theme.background));
    frame.render_widget(paragraph, area);
}
