//! Shell-style recall history for submitted drafts.
//!
//! The state machine is deliberately decoupled from any input widget so
//! the logic stays isolated and easy to test: callers pass the current
//! draft in and adopt whatever comes back. Up recalls older entries,
//! Down returns toward the live draft, and the in-progress edit made
//! before navigation began survives a full round trip.

use serde::{Deserialize, Serialize};

use super::Draft;

/// Maximum entries retained per input mode.
pub const HISTORY_LIMIT: usize = 100;

/// Input mode. Each mode keeps its own history list.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PromptMode {
    #[default]
    Normal,
    Shell,
}

/// Direction of a history navigation step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HistoryDirection {
    Up,
    Down,
}

/// Per-mode bounded history plus the navigation cursor.
///
/// Entries are stored most-recent-first. The cursor is `None` while the
/// user is viewing the live draft; `saved` holds the live draft
/// snapshot taken when navigation began and is only ever populated
/// while the cursor is set.
#[derive(Debug)]
pub struct PromptHistory {
    normal: Vec<Draft>,
    shell: Vec<Draft>,
    capacity: usize,
    cursor: Option<usize>,
    saved: Option<Draft>,
}

impl Default for PromptHistory {
    fn default() -> Self {
        Self::new()
    }
}

impl PromptHistory {
    /// Create a history with the default capacity.
    pub fn new() -> Self {
        Self::with_capacity(HISTORY_LIMIT)
    }

    /// Create a history with a custom per-mode capacity.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            normal: Vec::new(),
            shell: Vec::new(),
            capacity,
            cursor: None,
            saved: None,
        }
    }

    fn entries(&self, mode: PromptMode) -> &Vec<Draft> {
        match mode {
            PromptMode::Normal => &self.normal,
            PromptMode::Shell => &self.shell,
        }
    }

    fn entries_mut(&mut self, mode: PromptMode) -> &mut Vec<Draft> {
        match mode {
            PromptMode::Normal => &mut self.normal,
            PromptMode::Shell => &mut self.shell,
        }
    }

    /// Number of entries recorded for a mode.
    pub fn len(&self, mode: PromptMode) -> usize {
        self.entries(mode).len()
    }

    /// Whether a mode has no entries.
    pub fn is_empty(&self, mode: PromptMode) -> bool {
        self.entries(mode).is_empty()
    }

    /// The recorded entry at `index` (0 = newest) for a mode.
    pub fn entry(&self, mode: PromptMode, index: usize) -> Option<&Draft> {
        self.entries(mode).get(index)
    }

    /// Whether the user is currently browsing history.
    pub fn is_navigating(&self) -> bool {
        self.cursor.is_some()
    }

    /// Record a submitted draft at the front of a mode's history. Blank
    /// drafts and drafts whose flattened text equals the newest entry's
    /// are suppressed. The stored entry is an independent copy.
    pub fn record(&mut self, draft: &Draft, mode: PromptMode) {
        if draft.is_blank() {
            return;
        }
        let capacity = self.capacity;
        let entries = self.entries_mut(mode);
        if entries.first().map(|head| head.text()) == Some(draft.text()) {
            return;
        }
        entries.insert(0, draft.clone());
        entries.truncate(capacity);
    }

    /// One navigation step. Returns the draft the input should now
    /// display, or `None` when the step is clamped at a boundary and
    /// nothing changes.
    pub fn navigate(
        &mut self,
        direction: HistoryDirection,
        mode: PromptMode,
        current: &Draft,
    ) -> Option<Draft> {
        match direction {
            HistoryDirection::Up => match self.cursor {
                None => {
                    let recalled = self.entries(mode).first().cloned()?;
                    self.saved = Some(current.clone());
                    self.cursor = Some(0);
                    Some(recalled)
                }
                Some(index) => {
                    let recalled = self.entries(mode).get(index + 1).cloned()?;
                    self.cursor = Some(index + 1);
                    Some(recalled)
                }
            },
            HistoryDirection::Down => match self.cursor {
                None => None,
                Some(0) => {
                    self.cursor = None;
                    Some(self.saved.take().unwrap_or_else(Draft::empty))
                }
                Some(index) => {
                    let recalled = self.entries(mode).get(index - 1).cloned()?;
                    self.cursor = Some(index - 1);
                    Some(recalled)
                }
            },
        }
    }

    /// Return the cursor to the live draft and drop any snapshot,
    /// leaving history content untouched.
    pub fn reset_navigation(&mut self) {
        self.cursor = None;
        self.saved = None;
    }
}
