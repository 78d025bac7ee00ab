pub mod app;
pub mod card;
pub mod dialog;
pub mod input;
pub mod render;
pub mod task_list;
pub mod theme;

pub use app::{App, run};
