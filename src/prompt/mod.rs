//! Prompt input state for Simmer.
//!
//! The prompt subsystem is independent of the entity cache: it is
//! driven only by user input and the submit action. It holds the live
//! multi-part draft, pending image attachments, and a per-mode bounded
//! history with shell-style Up/Down recall.
//!
//! ## Usage
//!
//! ```ignore
//! use simmer::prompt::{Draft, HistoryDirection, PromptStore};
//!
//! let mut store = PromptStore::new();
//! store.set_draft(Draft::from_text("explain this error"));
//! let submitted = store.submit().unwrap();
//!
//! // Later: Up recalls what was submitted
//! store.navigate_history(HistoryDirection::Up);
//! ```

mod draft;
mod history;
mod store;

pub use draft::{ContentPart, Draft, FileSelection, ImageAttachment};
pub use history::{HistoryDirection, PromptHistory, PromptMode, HISTORY_LIMIT};
pub use store::PromptStore;
