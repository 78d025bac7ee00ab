use crate::model::task::Task;
use crate::ops::launch::ActionError;

use super::card::{MissingActionHandler, TaskCard};

/// Ordered cards plus the one selection cursor.
///
/// The list is never empty: building it from no tasks yields a single
/// placeholder card. The selected card is the one at `selected_idx`; cards
/// carry no selection state of their own.
#[derive(Debug, Clone)]
pub struct TaskList {
    cards: Vec<TaskCard>,
    selected_idx: usize,
    /// Cursor cycles past either end instead of stopping
    pub wrap: bool,
}

impl TaskList {
    pub fn new(tasks: Vec<Task>, wrap: bool) -> Self {
        let tasks = if tasks.is_empty() {
            vec![Task::placeholder()]
        } else {
            tasks
        };
        TaskList {
            cards: tasks.into_iter().map(TaskCard::new).collect(),
            selected_idx: 0,
            wrap,
        }
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    pub fn selected_idx(&self) -> usize {
        self.selected_idx
    }

    /// Move the cursor. Setting the current index again is a no-op.
    ///
    /// # Panics
    /// If `idx` is outside the list.
    pub fn set_selected_idx(&mut self, idx: usize) {
        assert!(
            idx < self.cards.len(),
            "selection index {} out of range for {} cards",
            idx,
            self.cards.len()
        );
        self.selected_idx = idx;
    }

    pub fn next(&mut self) {
        let last = self.cards.len() - 1;
        if self.selected_idx == last {
            if self.wrap {
                self.set_selected_idx(0);
            }
        } else {
            self.set_selected_idx(self.selected_idx + 1);
        }
    }

    pub fn prev(&mut self) {
        if self.selected_idx == 0 {
            if self.wrap {
                self.set_selected_idx(self.cards.len() - 1);
            }
        } else {
            self.set_selected_idx(self.selected_idx - 1);
        }
    }

    pub fn selected_card(&self) -> &TaskCard {
        &self.cards[self.selected_idx]
    }

    pub fn is_selected(&self, idx: usize) -> bool {
        idx == self.selected_idx
    }

    /// Cards in display order, each paired with whether it is selected
    pub fn cards(&self) -> impl Iterator<Item = (&TaskCard, bool)> {
        self.cards
            .iter()
            .enumerate()
            .map(move |(i, card)| (card, i == self.selected_idx))
    }

    /// Run the selected task's action, falling back to `fallback` when the
    /// task has none.
    pub fn run_selected_action(
        &self,
        fallback: &mut dyn MissingActionHandler,
    ) -> Result<(), ActionError> {
        self.selected_card().run_action(fallback)
    }
}
