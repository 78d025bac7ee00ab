use std::rc::Rc;

use crate::cli::commands::{Cli, Commands, ListArgs};
use crate::cli::output::{format_task_list, task_list_to_json};
use crate::io::config_io::{self, ConfigError};
use crate::model::Config;
use crate::ops::launch::{Launcher, Platform, SystemLauncher};
use crate::tui::{self, App};

// ---------------------------------------------------------------------------
// Dispatch
// ---------------------------------------------------------------------------

pub fn dispatch(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let cwd = std::env::current_dir()?;
    let config = load_config(&cli, &cwd)?;
    let launcher: Rc<dyn Launcher> = Rc::new(SystemLauncher::new(Platform::current()));

    match cli.command {
        // No subcommand → launch TUI
        None => tui::run(App::from_config(&config, &launcher)),
        Some(Commands::List(args)) => cmd_list(&config, &launcher, args),
    }
}

/// Load the config and apply command-line overrides
pub fn load_config(cli: &Cli, cwd: &std::path::Path) -> Result<Config, ConfigError> {
    let mut config = config_io::load_config(cli.config.as_deref(), cwd)?;
    if cli.no_wrap {
        config.wrap = false;
    }
    Ok(config)
}

fn cmd_list(
    config: &Config,
    launcher: &Rc<dyn Launcher>,
    args: ListArgs,
) -> Result<(), Box<dyn std::error::Error>> {
    let app = App::from_config(config, launcher);
    if args.json {
        let out = serde_json::to_string_pretty(&task_list_to_json(&app.task_list))?;
        println!("{}", out);
    } else {
        println!("{}", format_task_list(&app.task_list, &app.theme, args.verbose));
    }
    Ok(())
}
