use serde::Serialize;

use crate::tui::render::helpers::line_text;
use crate::tui::task_list::TaskList;
use crate::tui::theme::Theme;

// ---------------------------------------------------------------------------
// JSON output structs
// ---------------------------------------------------------------------------

#[derive(Serialize)]
pub struct TaskJson {
    pub summary: String,
    pub description: String,
    pub color: String,
    pub has_action: bool,
}

#[derive(Serialize)]
pub struct TaskListJson {
    pub wrap: bool,
    pub tasks: Vec<TaskJson>,
}

pub fn task_list_to_json(list: &TaskList) -> TaskListJson {
    TaskListJson {
        wrap: list.wrap,
        tasks: list
            .cards()
            .map(|(card, _)| {
                let task = card.task();
                TaskJson {
                    summary: task.summary.clone(),
                    description: task.description.clone(),
                    color: task.color.clone(),
                    has_action: task.has_action(),
                }
            })
            .collect(),
    }
}

// ---------------------------------------------------------------------------
// Text output
// ---------------------------------------------------------------------------

/// Plain-text rendering of the list: every card collapsed, or every card
/// expanded when `verbose`.
pub fn format_task_list(list: &TaskList, theme: &Theme, verbose: bool) -> String {
    let mut lines = Vec::new();
    for (card, _) in list.cards() {
        for line in card.render(verbose, theme) {
            lines.push(line_text(&line));
        }
    }
    lines.join("\n")
}
