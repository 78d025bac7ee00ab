use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use super::app::App;
use super::card::MissingActionHandler;
use super::dialog::{ModalDialog, Notice};
use super::task_list::TaskList;

/// What a key press asks the app to do
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Quit,
    Prev,
    Next,
    /// Dismiss the dialog if shown, else run the selected task
    Confirm,
    ToggleKeyDebug,
}

impl Command {
    /// Map a key to its command; unbound keys map to `None`
    pub fn from_key(key: KeyEvent) -> Option<Command> {
        match (key.modifiers, key.code) {
            (m, KeyCode::Char('c' | 'd')) if m.contains(KeyModifiers::CONTROL) => {
                Some(Command::Quit)
            }
            (m, KeyCode::Char(_)) if m.intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) => {
                None
            }
            (_, KeyCode::Char('q')) | (_, KeyCode::Esc) => Some(Command::Quit),
            (_, KeyCode::Up) | (_, KeyCode::Char('k')) => Some(Command::Prev),
            (_, KeyCode::Down) | (_, KeyCode::Char('j')) => Some(Command::Next),
            (_, KeyCode::Enter) | (_, KeyCode::Char('a')) => Some(Command::Confirm),
            (_, KeyCode::F(12)) => Some(Command::ToggleKeyDebug),
            _ => None,
        }
    }
}

/// Handle one key event. Each event runs to completion before the next.
pub fn handle_key(app: &mut App, key: KeyEvent) {
    // Quit is terminal
    if app.should_quit {
        return;
    }
    // Releases and repeats are reported by some terminals; act on presses only
    if key.kind != KeyEventKind::Press {
        return;
    }
    if app.key_debug {
        app.last_key_event = Some(key);
    }

    let Some(command) = Command::from_key(key) else {
        return;
    };
    match command {
        Command::Quit => {
            tracing::info!("quit requested");
            app.should_quit = true;
        }
        Command::Prev => app.task_list.prev(),
        Command::Next => app.task_list.next(),
        Command::Confirm => confirm_selection(&app.task_list, &mut app.dialog),
        Command::ToggleKeyDebug => {
            app.key_debug = !app.key_debug;
            app.last_key_event = if app.key_debug { Some(key) } else { None };
            tracing::debug!(enabled = app.key_debug, "key debug toggled");
        }
    }
}

/// The confirm key: a visible dialog takes it and is dismissed; otherwise the
/// selected task's action runs, with `target` as the no-action fallback.
/// Action errors end up in the dialog rather than propagating.
pub fn confirm_selection<T>(task_list: &TaskList, target: &mut T)
where
    T: MissingActionHandler + AsMut<ModalDialog>,
{
    if target.as_mut().is_visible() {
        target.as_mut().hide();
        return;
    }
    if let Err(e) = task_list.run_selected_action(target) {
        tracing::warn!(
            summary = %task_list.selected_card().task().summary,
            error = %e,
            "task action failed"
        );
        target.as_mut().show(Notice::ActionFailed(e.to_string()));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::task::{Task, TaskAction};
    use crate::ops::launch::{ActionError, Launcher, OpenOrStart, Platform, SystemLauncher};
    use crate::tui::theme::Theme;
    use std::cell::Cell;
    use std::rc::Rc;

    #[derive(Debug, Default)]
    struct Counter {
        runs: Cell<usize>,
    }

    impl TaskAction for Counter {
        fn run(&self, _task: &Task) -> Result<(), ActionError> {
            self.runs.set(self.runs.get() + 1);
            Ok(())
        }
    }

    /// Dialog fallback that counts how often the default action fires
    #[derive(Default)]
    struct CountingDialog {
        dialog: ModalDialog,
        defaults: usize,
    }

    impl MissingActionHandler for CountingDialog {
        fn on_missing_action(&mut self, task: &Task) {
            self.defaults += 1;
            self.dialog.on_missing_action(task);
        }
    }

    impl AsMut<ModalDialog> for CountingDialog {
        fn as_mut(&mut self) -> &mut ModalDialog {
            &mut self.dialog
        }
    }

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn ctrl(c: char) -> KeyEvent {
        KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)
    }

    fn app_with(tasks: Vec<Task>, wrap: bool) -> App {
        App::new(TaskList::new(tasks, wrap), Theme::default())
    }

    fn abc() -> Vec<Task> {
        ["A", "B", "C"]
            .into_iter()
            .map(|s| Task::new(s, "", "gray"))
            .collect()
    }

    #[test]
    fn key_map() {
        assert_eq!(Command::from_key(press(KeyCode::Char('q'))), Some(Command::Quit));
        assert_eq!(Command::from_key(press(KeyCode::Esc)), Some(Command::Quit));
        assert_eq!(Command::from_key(ctrl('c')), Some(Command::Quit));
        assert_eq!(Command::from_key(ctrl('d')), Some(Command::Quit));
        assert_eq!(Command::from_key(press(KeyCode::Up)), Some(Command::Prev));
        assert_eq!(Command::from_key(press(KeyCode::Char('k'))), Some(Command::Prev));
        assert_eq!(Command::from_key(press(KeyCode::Down)), Some(Command::Next));
        assert_eq!(Command::from_key(press(KeyCode::Char('j'))), Some(Command::Next));
        assert_eq!(Command::from_key(press(KeyCode::Enter)), Some(Command::Confirm));
        assert_eq!(Command::from_key(press(KeyCode::Char('a'))), Some(Command::Confirm));
        assert_eq!(
            Command::from_key(press(KeyCode::F(12))),
            Some(Command::ToggleKeyDebug)
        );
    }

    #[test]
    fn unbound_keys_map_to_nothing() {
        assert_eq!(Command::from_key(press(KeyCode::Char('x'))), None);
        assert_eq!(Command::from_key(press(KeyCode::Tab)), None);
        assert_eq!(Command::from_key(ctrl('j')), None);
    }

    #[test]
    fn unbound_key_changes_nothing() {
        let mut app = app_with(abc(), true);
        handle_key(&mut app, press(KeyCode::Char('x')));
        assert_eq!(app.task_list.selected_idx(), 0);
        assert!(!app.dialog.is_visible());
        assert!(!app.should_quit);
    }

    #[test]
    fn down_three_times_wraps() {
        let mut app = app_with(abc(), true);
        let mut seen = vec![app.task_list.selected_idx()];
        for _ in 0..3 {
            handle_key(&mut app, press(KeyCode::Down));
            seen.push(app.task_list.selected_idx());
        }
        assert_eq!(seen, vec![0, 1, 2, 0]);
    }

    #[test]
    fn vi_keys_navigate() {
        let mut app = app_with(abc(), false);
        handle_key(&mut app, press(KeyCode::Char('j')));
        handle_key(&mut app, press(KeyCode::Char('j')));
        handle_key(&mut app, press(KeyCode::Char('j')));
        assert_eq!(app.task_list.selected_idx(), 2);
        handle_key(&mut app, press(KeyCode::Char('k')));
        assert_eq!(app.task_list.selected_idx(), 1);
    }

    #[test]
    fn key_release_is_ignored() {
        let mut app = app_with(abc(), true);
        let mut key = press(KeyCode::Down);
        key.kind = KeyEventKind::Release;
        handle_key(&mut app, key);
        assert_eq!(app.task_list.selected_idx(), 0);
    }

    #[test]
    fn quit_is_terminal() {
        let mut app = app_with(abc(), true);
        handle_key(&mut app, press(KeyCode::Char('q')));
        assert!(app.should_quit);

        handle_key(&mut app, press(KeyCode::Down));
        handle_key(&mut app, press(KeyCode::Enter));
        assert_eq!(app.task_list.selected_idx(), 0);
        assert!(!app.dialog.is_visible());
    }

    #[test]
    fn quit_works_while_dialog_is_shown() {
        let mut app = app_with(abc(), true);
        handle_key(&mut app, press(KeyCode::Enter));
        assert!(app.dialog.is_visible());
        handle_key(&mut app, press(KeyCode::Esc));
        assert!(app.should_quit);
    }

    #[test]
    fn confirm_runs_action_once_without_dialog() {
        let counter = Rc::new(Counter::default());
        let task = Task::new("only", "", "gray").with_action(counter.clone());
        let mut app = app_with(vec![task], true);

        handle_key(&mut app, press(KeyCode::Enter));
        assert_eq!(counter.runs.get(), 1);
        assert!(!app.dialog.is_visible());
    }

    #[test]
    fn confirm_on_placeholder_shows_dialog() {
        let mut app = app_with(Vec::new(), true);
        handle_key(&mut app, press(KeyCode::Char('a')));
        assert_eq!(app.dialog.notice(), Some(&Notice::NoAction));
    }

    #[test]
    fn dialog_takes_confirm_before_the_task() {
        let list = TaskList::new(abc(), true);
        let mut target = CountingDialog::default();

        confirm_selection(&list, &mut target);
        assert!(target.dialog.is_visible());
        assert_eq!(target.defaults, 1);

        confirm_selection(&list, &mut target);
        assert!(!target.dialog.is_visible());
        assert_eq!(target.defaults, 1);

        // Every open/close pair fires the default exactly once
        for round in 2..=4 {
            confirm_selection(&list, &mut target);
            assert!(target.dialog.is_visible());
            confirm_selection(&list, &mut target);
            assert!(!target.dialog.is_visible());
            assert_eq!(target.defaults, round);
        }
    }

    #[test]
    fn dismissing_the_dialog_does_not_run_the_next_task() {
        let counter = Rc::new(Counter::default());
        let tasks = vec![
            Task::new("no action", "", "gray"),
            Task::new("action", "", "gray").with_action(counter.clone()),
        ];
        let mut app = app_with(tasks, true);

        handle_key(&mut app, press(KeyCode::Enter));
        assert!(app.dialog.is_visible());
        // Navigation still moves the list underneath
        handle_key(&mut app, press(KeyCode::Down));
        assert_eq!(app.task_list.selected_idx(), 1);
        handle_key(&mut app, press(KeyCode::Enter));
        assert!(!app.dialog.is_visible());
        assert_eq!(counter.runs.get(), 0);

        handle_key(&mut app, press(KeyCode::Enter));
        assert_eq!(counter.runs.get(), 1);
    }

    #[test]
    fn failed_action_is_shown_not_propagated() {
        let launcher: Rc<dyn Launcher> =
            Rc::new(SystemLauncher::new(Platform::Other("plan9".into())));
        let task = Task::new("open", "", "gray")
            .with_action(Rc::new(OpenOrStart::new("notes.txt", launcher)));
        let mut app = app_with(vec![task], true);

        handle_key(&mut app, press(KeyCode::Enter));
        assert_eq!(
            app.dialog.notice(),
            Some(&Notice::ActionFailed("unsupported platform: plan9".into()))
        );
        assert!(!app.should_quit);

        handle_key(&mut app, press(KeyCode::Enter));
        assert!(!app.dialog.is_visible());
    }

    #[test]
    fn f12_toggles_key_debug() {
        let mut app = app_with(abc(), true);
        handle_key(&mut app, press(KeyCode::F(12)));
        assert!(app.key_debug);
        handle_key(&mut app, press(KeyCode::Char('x')));
        assert_eq!(app.last_key_event.map(|k| k.code), Some(KeyCode::Char('x')));

        handle_key(&mut app, press(KeyCode::F(12)));
        assert!(!app.key_debug);
        assert!(app.last_key_event.is_none());
    }
}
