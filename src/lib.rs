//! Simmer Library
//!
//! Client-side state synchronization for a conversational coding
//! assistant. The crate keeps a consistent, incrementally-updated view
//! of chat sessions, messages and message parts as typed events arrive
//! from the remote agent process, and manages the multi-part prompt
//! draft with shell-style history recall.
//!
//! ## Main Components
//!
//! - [`events`] - Entity/event types and the transport-facing event bus
//! - [`state`] - Entity cache and the pure status derivations over it
//! - [`prompt`] - Prompt draft, image attachments, and recall history
//!
//! ## Quick Start
//!
//! ```ignore
//! use simmer::{EntityCache, EventBus, PromptStore};
//!
//! let bus = EventBus::new();
//! let mut events = bus.subscribe();
//! let mut cache = EntityCache::new();
//! let mut prompt = PromptStore::new();
//!
//! // The transport adapter publishes via bus.sender(); on each UI
//! // tick, drain whatever arrived:
//! events.apply_pending(&mut cache)?;
//! ```
//!
//! Transport connections, HTTP catalog queries, rendering and
//! persistence are collaborators: this crate exposes the event intake,
//! the read selectors, and a serializable snapshot, nothing more.

pub mod events;
pub mod prompt;
pub mod state;

// Re-export commonly used types
pub use events::{
    BusError, EventBus, EventReceiver, EventSender, Message, MessageError, MessageRole, Part,
    PartKind, Session, SessionStatus, SyncEvent, ToolPart, ToolState,
};
pub use prompt::{
    ContentPart, Draft, HistoryDirection, ImageAttachment, PromptHistory, PromptMode, PromptStore,
};
pub use state::{
    error_detail, extract_text, extract_tool_calls, has_error, is_streaming, tool_status_text,
    CacheSnapshot, EntityCache, ErrorDetail,
};
