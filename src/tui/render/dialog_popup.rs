use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};

use crate::tui::app::App;
use crate::tui::dialog::Notice;

use super::helpers::{centered_rect_fixed, wrap_text};

const OK_BUTTON: &str = "[ Ok ]";

/// Render the modal notice centered over everything else
pub fn render_dialog_popup(frame: &mut Frame, app: &App, notice: &Notice, area: Rect) {
    let popup_w: u16 = 40.min(area.width.saturating_sub(2));
    let inner_w = popup_w.saturating_sub(2) as usize;

    let bg = app.theme.background;
    let border_color = match notice {
        Notice::NoAction => app.theme.highlight,
        Notice::ActionFailed(_) => app.theme.red,
    };
    let header_style = Style::default()
        .fg(border_color)
        .bg(bg)
        .add_modifier(Modifier::BOLD);
    let text_style = Style::default().fg(app.theme.text).bg(bg);
    let button_style = Style::default()
        .fg(bg)
        .bg(app.theme.highlight)
        .add_modifier(Modifier::BOLD);

    let mut lines: Vec<Line> = Vec::new();
    lines.push(Line::from(Span::styled(
        format!(" {}", notice.title()),
        header_style,
    )));
    lines.push(Line::from(Span::styled("", text_style)));
    for s in wrap_text(" ", &notice.body(), inner_w) {
        lines.push(Line::from(Span::styled(s, text_style)));
    }
    lines.push(Line::from(Span::styled("", text_style)));

    // Single control, centered
    let pad = inner_w.saturating_sub(OK_BUTTON.len()) / 2;
    lines.push(Line::from(vec![
        Span::styled(" ".repeat(pad), text_style),
        Span::styled(OK_BUTTON, button_style),
    ]));

    // Dynamic height from content + 2 for borders
    let popup_h = ((lines.len() as u16) + 2).min(area.height.saturating_sub(2));

    let overlay_area = centered_rect_fixed(popup_w, popup_h, area);
    frame.render_widget(Clear, overlay_area);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color).bg(bg))
        .style(Style::default().bg(bg));

    let paragraph = Paragraph::new(lines)
        .block(block)
        .style(Style::default().bg(bg));

    frame.render_widget(paragraph, overlay_area);
}
