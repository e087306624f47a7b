//! Progress value object for the progress bar.

use serde::Serialize;

use crate::domain::foundation::Percentage;

/// Questions answered versus questions the participant will see.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Progress {
    completed: usize,
    total: usize,
}

impl Progress {
    /// Creates progress, capping `completed` at `total`.
    pub fn new(completed: usize, total: usize) -> Self {
        Self {
            completed: completed.min(total),
            total,
        }
    }

    pub fn completed(&self) -> usize {
        self.completed
    }

    pub fn total(&self) -> usize {
        self.total
    }

    pub fn percentage(&self) -> Percentage {
        Percentage::of(self.completed as u32, self.total as u32)
    }
}
