use std::io;
use std::rc::Rc;

use crossterm::cursor::Show;
use crossterm::event::{self, Event, KeyEvent};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;

use crate::model::Config;
use crate::ops::launch::Launcher;

use super::dialog::ModalDialog;
use super::input;
use super::render;
use super::task_list::TaskList;
use super::theme::Theme;

/// Main application state
#[derive(Debug)]
pub struct App {
    pub task_list: TaskList,
    /// Overlay shown for tasks without an action and for failed actions
    pub dialog: ModalDialog,
    pub theme: Theme,
    /// Bottom row with key hints
    pub show_key_hints: bool,
    /// Set once a quit key is pressed; no keys are handled afterwards
    pub should_quit: bool,
    /// Key debug line (F12)
    pub key_debug: bool,
    pub last_key_event: Option<KeyEvent>,
}

impl App {
    pub fn new(task_list: TaskList, theme: Theme) -> Self {
        App {
            task_list,
            dialog: ModalDialog::new(),
            theme,
            show_key_hints: true,
            should_quit: false,
            key_debug: false,
            last_key_event: None,
        }
    }

    pub fn from_config(config: &Config, launcher: &Rc<dyn Launcher>) -> Self {
        let task_list = TaskList::new(config.build_tasks(launcher), config.wrap);
        let mut app = App::new(task_list, Theme::from_config(&config.ui));
        app.show_key_hints = config.ui.show_key_hints;
        app
    }
}

/// Raw mode plus alternate screen, restored when dropped
struct TerminalSession {
    terminal: Terminal<CrosstermBackend<io::Stdout>>,
}

impl TerminalSession {
    fn enter() -> io::Result<Self> {
        enable_raw_mode()?;
        let setup = || -> io::Result<Terminal<CrosstermBackend<io::Stdout>>> {
            execute!(io::stdout(), EnterAlternateScreen)?;
            let mut terminal = Terminal::new(CrosstermBackend::new(io::stdout()))?;
            terminal.clear()?;
            Ok(terminal)
        };
        match setup() {
            Ok(terminal) => Ok(TerminalSession { terminal }),
            Err(e) => {
                restore_terminal();
                Err(e)
            }
        }
    }
}

impl Drop for TerminalSession {
    fn drop(&mut self) {
        restore_terminal();
        let _ = self.terminal.show_cursor();
    }
}

fn restore_terminal() {
    let _ = disable_raw_mode();
    let _ = execute!(io::stdout(), LeaveAlternateScreen, Show);
}

/// Run the TUI application until the user quits
pub fn run(mut app: App) -> Result<(), Box<dyn std::error::Error>> {
    let mut session = TerminalSession::enter()?;

    // Install panic hook to restore terminal on panic
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        restore_terminal();
        original_hook(panic_info);
    }));

    tracing::info!(tasks = app.task_list.len(), wrap = app.task_list.wrap, "tui started");
    let result = run_event_loop(&mut session.terminal, &mut app);
    tracing::info!("tui stopped");

    drop(session);
    result
}

fn run_event_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
) -> Result<(), Box<dyn std::error::Error>> {
    loop {
        terminal.draw(|frame| render::render(frame, app))?;

        // Blocks until the next event; resize events just trigger a redraw
        if let Event::Key(key) = event::read()? {
            input::handle_key(app, key);
        }

        if app.should_quit {
            break;
        }
    }
    Ok(())
}
