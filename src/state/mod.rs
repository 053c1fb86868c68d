//! Synchronized entity state and its derivations.
//!
//! [`EntityCache`] is the single source of truth for sessions, messages,
//! parts and per-session agent activity; the functions in [`status`]
//! derive what the UI actually shows (streaming indicators, tool status
//! lines, error summaries) from those raw entities.

mod cache;
mod status;

pub use cache::{CacheSnapshot, EntityCache};
pub use status::{
    error_detail, extract_text, extract_tool_calls, has_error, is_streaming, tool_status_text,
    ErrorDetail,
};
