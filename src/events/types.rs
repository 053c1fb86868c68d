//! Entity and event types for transport-UI synchronization.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One conversation thread with the coding assistant.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Session {
    pub id: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    pub time: SessionTime,
}

/// Session timestamps.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SessionTime {
    pub created: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated: Option<DateTime<Utc>>,
}

impl Session {
    /// Create a session stamped with the current time.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: None,
            time: SessionTime {
                created: Utc::now(),
                updated: None,
            },
        }
    }

    /// Create a session with a title.
    pub fn with_title(id: impl Into<String>, title: impl Into<String>) -> Self {
        let mut session = Self::new(id);
        session.title = Some(title.into());
        session
    }
}

/// Author of a message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MessageRole {
    User,
    Assistant,
}

/// Message timestamps. `completed` is set once an assistant message
/// finishes generating; user messages never set it.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MessageTime {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub completed: Option<DateTime<Utc>>,
}

/// Error payload attached to a failed assistant message. `data` is an
/// opaque provider payload; its nested `message` field is best-effort.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MessageError {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<serde_json::Value>,
}

/// One turn in a session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Message {
    pub id: String,
    pub role: MessageRole,
    #[serde(default)]
    pub time: MessageTime,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<MessageError>,
}

impl Message {
    /// Create a user message (terminal from birth).
    pub fn user(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            role: MessageRole::User,
            time: MessageTime::default(),
            error: None,
        }
    }

    /// Create an assistant message in its incomplete (streaming) state.
    pub fn assistant(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            role: MessageRole::Assistant,
            time: MessageTime::default(),
            error: None,
        }
    }
}

/// Lifecycle state of an invoked tool. Replaced wholesale by incoming
/// part updates; `Completed` and `Error` are terminal.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum ToolState {
    Pending,
    Running {
        #[serde(skip_serializing_if = "Option::is_none")]
        title: Option<String>,
    },
    Completed {
        title: String,
    },
    Error {
        message: String,
    },
}

/// A tool invocation within an assistant message.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ToolPart {
    pub call_id: String,
    pub name: String,
    pub state: ToolState,
}

/// A content fragment of a message.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum PartKind {
    Text {
        text: String,
        #[serde(skip_serializing_if = "Option::is_none")]
        ignored: Option<bool>,
    },
    Tool(ToolPart),
    File {
        path: String,
        #[serde(skip_serializing_if = "Option::is_none")]
        mime: Option<String>,
    },
    Image {
        filename: String,
        #[serde(skip_serializing_if = "Option::is_none")]
        mime: Option<String>,
    },
    Agent {
        name: String,
    },
}

/// A message part with its identity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Part {
    pub id: String,
    #[serde(flatten)]
    pub kind: PartKind,
}

impl Part {
    /// Create a visible text part.
    pub fn text(id: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            kind: PartKind::Text {
                text: text.into(),
                ignored: None,
            },
        }
    }

    /// Create a tool part in its initial pending state.
    pub fn tool(id: impl Into<String>, call_id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            kind: PartKind::Tool(ToolPart {
                call_id: call_id.into(),
                name: name.into(),
                state: ToolState::Pending,
            }),
        }
    }
}

/// Whether the remote agent is currently working on a session.
/// Independent of message content.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum SessionStatus {
    #[default]
    Idle,
    Busy,
    Retry {
        attempt: u32,
    },
}

/// An entity event pushed by the transport, applied to the cache in
/// arrival order. The transport is responsible for causal ordering per
/// entity; duplicates and updates for unknown ids are absorbed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum SyncEvent {
    SessionsListed {
        project_id: String,
        sessions: Vec<Session>,
    },
    SessionUpserted {
        session: Session,
    },
    SessionRemoved {
        session_id: String,
    },
    MessageAppended {
        session_id: String,
        message: Message,
    },
    MessageReplaced {
        session_id: String,
        message: Message,
    },
    PartAppended {
        message_id: String,
        part: Part,
    },
    PartReplaced {
        message_id: String,
        part: Part,
    },
    StatusChanged {
        session_id: String,
        status: SessionStatus,
    },
}

impl SyncEvent {
    /// Create a session upsert event.
    pub fn session_upserted(session: Session) -> Self {
        Self::SessionUpserted { session }
    }

    /// Create a session removal event.
    pub fn session_removed(session_id: impl Into<String>) -> Self {
        Self::SessionRemoved {
            session_id: session_id.into(),
        }
    }

    /// Create a message append event.
    pub fn message_appended(session_id: impl Into<String>, message: Message) -> Self {
        Self::MessageAppended {
            session_id: session_id.into(),
            message,
        }
    }

    /// Create a message replacement event.
    pub fn message_replaced(session_id: impl Into<String>, message: Message) -> Self {
        Self::MessageReplaced {
            session_id: session_id.into(),
            message,
        }
    }

    /// Create a part append event.
    pub fn part_appended(message_id: impl Into<String>, part: Part) -> Self {
        Self::PartAppended {
            message_id: message_id.into(),
            part,
        }
    }

    /// Create a part replacement event.
    pub fn part_replaced(message_id: impl Into<String>, part: Part) -> Self {
        Self::PartReplaced {
            message_id: message_id.into(),
            part,
        }
    }

    /// Create a status change event.
    pub fn status_changed(session_id: impl Into<String>, status: SessionStatus) -> Self {
        Self::StatusChanged {
            session_id: session_id.into(),
            status,
        }
    }
}
