use std::fmt;
use std::process::{Command, Stdio};
use std::rc::Rc;
use std::thread;

use crate::model::task::{Task, TaskAction};

/// Error type for task actions
#[derive(Debug, thiserror::Error)]
pub enum ActionError {
    #[error("unsupported platform: {0}")]
    UnsupportedPlatform(String),
    #[error("could not launch {program}: {source}")]
    Launch {
        program: String,
        source: std::io::Error,
    },
}

/// Host platform, detected once at startup and passed down
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Platform {
    Linux,
    MacOs,
    Windows,
    Other(String),
}

impl Platform {
    pub fn current() -> Self {
        Platform::from_os(std::env::consts::OS)
    }

    pub fn from_os(os: &str) -> Self {
        match os {
            "linux" => Platform::Linux,
            "macos" => Platform::MacOs,
            "windows" => Platform::Windows,
            other => Platform::Other(other.to_string()),
        }
    }

    /// Command that hands `target` to the desktop's opener
    pub fn opener_command(&self, target: &str) -> Result<OpenerCommand, ActionError> {
        match self {
            Platform::Linux => Ok(OpenerCommand::plain("xdg-open", target)),
            Platform::MacOs => Ok(OpenerCommand::plain("open", target)),
            // `start` treats the first quoted argument as a window title.
            // The line is passed to cmd.exe verbatim, so the target is
            // quoted here to keep `&`, `|` and `^` out of cmd's parser.
            Platform::Windows => Ok(OpenerCommand {
                program: "cmd".to_string(),
                args: vec![
                    "/C".to_string(),
                    "start".to_string(),
                    "\"\"".to_string(),
                    quote_for_cmd(target),
                ],
                raw_args: true,
            }),
            Platform::Other(name) => Err(ActionError::UnsupportedPlatform(name.clone())),
        }
    }
}

/// Wrap a target in double quotes for cmd.exe. Quotes cannot be escaped
/// inside a quoted cmd argument, so embedded ones are percent-encoded.
fn quote_for_cmd(target: &str) -> String {
    format!("\"{}\"", target.replace('"', "%22"))
}

/// Program plus argv for an opener invocation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OpenerCommand {
    pub program: String,
    pub args: Vec<String>,
    /// Args are already quoted for the command line (Windows only)
    pub raw_args: bool,
}

impl OpenerCommand {
    fn plain(program: &str, target: &str) -> Self {
        OpenerCommand {
            program: program.to_string(),
            args: vec![target.to_string()],
            raw_args: false,
        }
    }

    fn to_command(&self) -> Command {
        let mut command = Command::new(&self.program);
        self.push_args(&mut command);
        command
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null());
        command
    }

    #[cfg(windows)]
    fn push_args(&self, command: &mut Command) {
        use std::os::windows::process::CommandExt;
        if self.raw_args {
            for arg in &self.args {
                command.raw_arg(arg);
            }
        } else {
            command.args(&self.args);
        }
    }

    #[cfg(not(windows))]
    fn push_args(&self, command: &mut Command) {
        command.args(&self.args);
    }

    /// Spawn without blocking. The child is reaped on a background thread
    /// so finished openers do not linger as zombies.
    fn spawn_detached(&self) -> Result<u32, ActionError> {
        let mut child = self
            .to_command()
            .spawn()
            .map_err(|source| ActionError::Launch {
                program: self.program.clone(),
                source,
            })?;
        let pid = child.id();
        let reaper = thread::Builder::new()
            .name("opener-reaper".into())
            .spawn(move || match child.wait() {
                Ok(status) => tracing::debug!(pid, %status, "opener exited"),
                Err(e) => tracing::warn!(pid, error = %e, "could not wait on opener"),
            });
        if let Err(e) = reaper {
            tracing::warn!(pid, error = %e, "could not start opener reaper");
        }
        Ok(pid)
    }
}

/// Opens files and URLs with whatever the host would use on double click
pub trait Launcher: fmt::Debug {
    fn open(&self, target: &str) -> Result<(), ActionError>;
}

/// Launcher backed by the platform's opener program
#[derive(Debug, Clone)]
pub struct SystemLauncher {
    platform: Platform,
}

impl SystemLauncher {
    pub fn new(platform: Platform) -> Self {
        SystemLauncher { platform }
    }
}

impl Launcher for SystemLauncher {
    /// Spawns the opener and returns without waiting for it.
    fn open(&self, target: &str) -> Result<(), ActionError> {
        let opener = self.platform.opener_command(target)?;
        let pid = opener.spawn_detached()?;
        tracing::info!(program = %opener.program, path = target, pid, "launched opener");
        Ok(())
    }
}

/// Same as double clicking on a file
#[derive(Debug)]
pub struct OpenOrStart {
    target: String,
    launcher: Rc<dyn Launcher>,
}

impl OpenOrStart {
    pub fn new(target: impl Into<String>, launcher: Rc<dyn Launcher>) -> Self {
        OpenOrStart {
            target: target.into(),
            launcher,
        }
    }

    pub fn target(&self) -> &str {
        &self.target
    }
}

impl TaskAction for OpenOrStart {
    fn run(&self, task: &Task) -> Result<(), ActionError> {
        tracing::debug!(summary = %task.summary, path = %self.target, "opening task target");
        self.launcher.open(&self.target)
    }
}
