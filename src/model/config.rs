use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::rc::Rc;

use crate::model::task::Task;
use crate::ops::launch::{Launcher, OpenOrStart};

/// Configuration from tod.toml
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Cursor wraps around at either end of the list
    #[serde(default = "default_true")]
    pub wrap: bool,
    #[serde(default)]
    pub ui: UiConfig,
    #[serde(default)]
    pub tasks: Vec<TaskConfig>,
}

/// One `[[tasks]]` entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskConfig {
    pub summary: String,
    #[serde(default)]
    pub description: String,
    #[serde(default = "default_color")]
    pub color: String,
    /// File or URL opened when the task is confirmed
    #[serde(default)]
    pub open: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UiConfig {
    #[serde(default = "default_true")]
    pub show_key_hints: bool,
    #[serde(default)]
    pub colors: HashMap<String, String>,
    #[serde(default)]
    pub tag_colors: HashMap<String, String>,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            wrap: true,
            ui: UiConfig::default(),
            tasks: Vec::new(),
        }
    }
}

impl Default for UiConfig {
    fn default() -> Self {
        UiConfig {
            show_key_hints: true,
            colors: HashMap::new(),
            tag_colors: HashMap::new(),
        }
    }
}

fn default_true() -> bool {
    true
}

fn default_color() -> String {
    "gray".to_string()
}

impl TaskConfig {
    fn sample(summary: &str, color: &str) -> Self {
        TaskConfig {
            summary: summary.to_string(),
            description: "Longer description".to_string(),
            color: color.to_string(),
            open: None,
        }
    }

    /// Build the task, wiring `open` to the given launcher
    pub fn to_task(&self, launcher: &Rc<dyn Launcher>) -> Task {
        let task = Task::new(&self.summary, &self.description, &self.color);
        match &self.open {
            Some(target) => task.with_action(Rc::new(OpenOrStart::new(
                target.clone(),
                Rc::clone(launcher),
            ))),
            None => task,
        }
    }
}

impl Config {
    /// Built-in configuration used when no tod.toml exists
    pub fn sample() -> Self {
        let mut first = TaskConfig::sample("task1, summary", "lightblue");
        first.open = Some("https://github.com/".to_string());
        Config {
            tasks: vec![
                first,
                TaskConfig::sample("task2, summary", "orange"),
                TaskConfig::sample("task3, summary", "lightgreen"),
                TaskConfig::sample("task4, summary", "darkred"),
                TaskConfig::sample("task5, summary", "gray"),
                TaskConfig::sample("task6, summary", "darkmagenta"),
            ],
            ..Config::default()
        }
    }

    pub fn build_tasks(&self, launcher: &Rc<dyn Launcher>) -> Vec<Task> {
        self.tasks.iter().map(|t| t.to_task(launcher)).collect()
    }
}
