//! Prompt input state: mode, live draft, attachments and history.

use super::{ContentPart, Draft, HistoryDirection, ImageAttachment, PromptHistory, PromptMode};

/// State container for the prompt input of one consumer. Construct and
/// inject per consumer; independent instances never share state.
#[derive(Debug, Default)]
pub struct PromptStore {
    mode: PromptMode,
    draft: Draft,
    attachments: Vec<ImageAttachment>,
    history: PromptHistory,
}

impl PromptStore {
    /// Create a store in normal mode with an empty draft.
    pub fn new() -> Self {
        Self::default()
    }

    /// Current input mode.
    pub fn mode(&self) -> PromptMode {
        self.mode
    }

    /// Switch input mode. The live draft, cursor and both history
    /// lists survive the switch; only which list navigation reads from
    /// changes.
    pub fn set_mode(&mut self, mode: PromptMode) {
        self.mode = mode;
    }

    /// The live draft.
    pub fn draft(&self) -> &Draft {
        &self.draft
    }

    /// Replace the live draft with fresh user input. Editing ends any
    /// in-progress history browsing.
    pub fn set_draft(&mut self, draft: Draft) {
        self.draft = draft;
        self.history.reset_navigation();
    }

    /// Current image attachments, in attach order.
    pub fn attachments(&self) -> &[ImageAttachment] {
        &self.attachments
    }

    /// Attach an image.
    pub fn add_image_attachment(&mut self, attachment: ImageAttachment) {
        self.attachments.push(attachment);
    }

    /// Detach an image by id. No-op when the id is unknown.
    pub fn remove_image_attachment(&mut self, id: &str) {
        self.attachments.retain(|a| a.id != id);
    }

    /// Drop every attachment.
    pub fn clear_image_attachments(&mut self) {
        self.attachments.clear();
    }

    /// Record a draft into a mode's history without touching the live
    /// draft; blank and duplicate-of-head commits are suppressed.
    pub fn add_to_history(&mut self, draft: &Draft, mode: PromptMode) {
        self.history.record(draft, mode);
    }

    /// Submit the live draft: record it into the current mode's
    /// history, fold the pending attachments into the returned draft,
    /// and reset the input for the next prompt. Returns `None` when
    /// there is nothing to submit (blank draft, no attachments).
    pub fn submit(&mut self) -> Option<Draft> {
        if self.draft.is_blank() && self.attachments.is_empty() {
            return None;
        }

        self.history.record(&self.draft, self.mode);

        let mut submitted = std::mem::take(&mut self.draft);
        submitted
            .parts
            .extend(self.attachments.drain(..).map(ContentPart::Image));
        self.history.reset_navigation();

        tracing::debug!(mode = ?self.mode, "prompt submitted");
        Some(submitted)
    }

    /// One history navigation step in the current mode, using the live
    /// draft as the navigation anchor. On a successful step the live
    /// draft becomes the recalled entry (or the restored snapshot) and
    /// is returned; a clamped step returns `None` and changes nothing.
    pub fn navigate_history(&mut self, direction: HistoryDirection) -> Option<&Draft> {
        let next = self.history.navigate(direction, self.mode, &self.draft)?;
        self.draft = next;
        Some(&self.draft)
    }

    /// Stop browsing history without touching its content.
    pub fn reset_history_navigation(&mut self) {
        self.history.reset_navigation();
    }

    /// Back to normal mode with no attachments and no navigation in
    /// progress. History persists across resets.
    pub fn reset(&mut self) {
        self.mode = PromptMode::Normal;
        self.attachments.clear();
        self.history.reset_navigation();
    }

    /// Read access to the underlying history.
    pub fn history(&self) -> &PromptHistory {
        &self.history
    }
}
