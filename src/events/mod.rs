//! Event layer for Simmer.
//!
//! This module is the boundary between the real-time transport and the
//! entity cache:
//!
//! - The **transport adapter** publishes typed [`SyncEvent`]s via an
//!   [`EventSender`]
//! - The **cache writer** subscribes and drains events into an
//!   [`crate::state::EntityCache`] in arrival order
//! - Additional subscribers (loggers, bridges) observe the same stream
//!   without affecting the cache
//!
//! ## Architecture
//!
//! ```text
//!     ┌────────────────┐
//!     │   Transport    │  (websocket / SSE — external collaborator)
//!     └───────┬────────┘
//!             │ publish SyncEvent
//!             ▼
//!     ┌────────────────┐
//!     │    EventBus    │
//!     └───────┬────────┘
//!             │ broadcast
//!       ┌─────┴──────┐
//!       ▼            ▼
//! ┌───────────┐ ┌──────────┐
//! │ Cache     │ │  Logger  │
//! │ writer    │ │(optional)│
//! └───────────┘ └──────────┘
//! ```
//!
//! Transport concerns (reconnect, backoff, ordering) stay on the other
//! side of this boundary: events are assumed to arrive in causal order
//! per entity, and duplicate delivery is safe because the cache absorbs
//! unknown-id updates as no-ops.

mod bus;
mod types;

pub use bus::{BusError, EventBus, EventReceiver, EventSender};
pub use types::*;
