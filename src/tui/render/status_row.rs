use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::tui::app::App;

use super::helpers::{describe_key, spans_width};

const KEY_HINTS: &str = " \u{2191}\u{2193}/jk move  enter/a open  q quit";

/// Render the status row (bottom of screen): key hints on the left, the
/// key debug readout on the right when enabled
pub fn render_status_row(frame: &mut Frame, app: &App, area: Rect) {
    let bg = app.theme.background;
    let width = area.width as usize;
    let dim_style = Style::default().fg(app.theme.dim).bg(bg);

    let mut spans = Vec::new();
    if app.show_key_hints {
        spans.push(Span::styled(KEY_HINTS, dim_style));
    }

    if app.key_debug {
        let readout = match &app.last_key_event {
            Some(key) => format!("key: {} ", describe_key(key)),
            None => "key: - ".to_string(),
        };
        let content_width = spans_width(&spans);
        let readout_width = readout.chars().count();
        if content_width + readout_width < width {
            let padding = width - content_width - readout_width;
            spans.push(Span::styled(" ".repeat(padding), Style::default().bg(bg)));
        }
        spans.push(Span::styled(
            readout,
            Style::default().fg(app.theme.highlight).bg(bg),
        ));
    }

    let paragraph = Paragraph::new(Line::from(spans)).style(Style::default().bg(bg));
    frame.render_widget(paragraph, area);
}
