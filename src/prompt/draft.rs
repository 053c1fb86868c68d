//! Draft value types for the prompt input.
//!
//! Drafts are value objects: every field is owned, so `Clone` produces
//! a fully independent copy. History relies on that — an entry recalled
//! from history can be edited freely without mutating the stored copy.

use serde::{Deserialize, Serialize};

/// A line range within a referenced file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileSelection {
    pub start_line: u32,
    pub end_line: u32,
}

/// An image attached to the draft. Carried out-of-band: it has no
/// position in the flattened text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImageAttachment {
    pub id: String,
    pub filename: String,
    pub mime: String,
    pub data: Vec<u8>,
}

impl ImageAttachment {
    /// Create an attachment with a generated id.
    pub fn new(filename: impl Into<String>, mime: impl Into<String>, data: Vec<u8>) -> Self {
        Self {
            id: uuid::Uuid::new_v4().to_string(),
            filename: filename.into(),
            mime: mime.into(),
            data,
        }
    }
}

/// One piece of the composed prompt. Text, file references and agent
/// mentions carry their byte range into the flattened draft text;
/// images do not participate in the text at all.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ContentPart {
    Text {
        content: String,
        start: usize,
        end: usize,
    },
    File {
        path: String,
        #[serde(skip_serializing_if = "Option::is_none")]
        selection: Option<FileSelection>,
        start: usize,
        end: usize,
    },
    Agent {
        name: String,
        start: usize,
        end: usize,
    },
    Image(ImageAttachment),
}

/// The in-progress, uncommitted prompt content.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Draft {
    pub parts: Vec<ContentPart>,
}

impl Draft {
    /// The canonical empty draft.
    pub fn empty() -> Self {
        Self::default()
    }

    /// A draft holding a single text part spanning its own content.
    pub fn from_text(content: impl Into<String>) -> Self {
        let content = content.into();
        let end = content.len();
        Self {
            parts: vec![ContentPart::Text {
                content,
                start: 0,
                end,
            }],
        }
    }

    /// Flatten to text: the content of all text parts, in order.
    pub fn text(&self) -> String {
        let mut out = String::new();
        for part in &self.parts {
            if let ContentPart::Text { content, .. } = part {
                out.push_str(content);
            }
        }
        out
    }

    /// Whether the flattened text trims to nothing.
    pub fn is_blank(&self) -> bool {
        self.text().trim().is_empty()
    }

    /// Images carried by this draft, in order.
    pub fn images(&self) -> impl Iterator<Item = &ImageAttachment> {
        self.parts.iter().filter_map(|part| match part {
            ContentPart::Image(image) => Some(image),
            _ => None,
        })
    }
}
