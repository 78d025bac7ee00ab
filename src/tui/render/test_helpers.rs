use ratatui::Terminal;
use ratatui::backend::TestBackend;
use ratatui::layout::Rect;

use crate::model::task::Task;
use crate::tui::app::App;
use crate::tui::task_list::TaskList;
use crate::tui::theme::Theme;

pub const TERM_W: u16 = 40;
pub const TERM_H: u16 = 12;

/// Render into an in-memory buffer and return plain text (no styles).
pub fn render_to_string<F>(w: u16, h: u16, f: F) -> String
where
    F: FnOnce(&mut ratatui::Frame, Rect),
{
    let backend = TestBackend::new(w, h);
    let mut terminal = Terminal::new(backend).unwrap();
    terminal
        .draw(|frame| {
            let area = frame.area();
            f(frame, area);
        })
        .unwrap();

    let buf = terminal.backend().buffer().clone();
    let w = buf.area.width as usize;
    let lines: Vec<String> = buf
        .content
        .chunks(w)
        .map(|row| {
            let s: String = row.iter().map(|cell| cell.symbol()).collect();
            s.trim_end().to_string()
        })
        .collect();

    // Trim trailing blank lines
    let end = lines
        .iter()
        .rposition(|l| !l.is_empty())
        .map_or(0, |i| i + 1);
    lines[..end].join("\n")
}

/// Build an App over `(summary, description)` pairs, no actions, wrapping.
pub fn app_with_tasks(tasks: &[(&str, &str)]) -> App {
    let tasks = tasks
        .iter()
        .map(|(summary, description)| Task::new(*summary, *description, "gray"))
        .collect();
    let mut app = App::new(TaskList::new(tasks, true), Theme::default());
    app.show_key_hints = false;
    app
}

/// Three tasks, the first with a two-line description.
pub const SIMPLE_TASKS: [(&str, &str); 3] = [
    ("A", "Alpha first\nsecond line"),
    ("B", "Beta"),
    ("C", "Gamma"),
];
