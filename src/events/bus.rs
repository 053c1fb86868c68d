//! Event bus carrying entity events from the transport to consumers.

use tokio::sync::broadcast;

use super::{Session, SessionStatus, SyncEvent};
use crate::state::EntityCache;

/// Sender half of the event bus. Held by the transport adapter.
#[derive(Clone)]
pub struct EventSender {
    tx: broadcast::Sender<SyncEvent>,
}

impl EventSender {
    /// Send an event.
    pub fn send(&self, event: SyncEvent) -> Result<(), BusError> {
        self.tx.send(event).map_err(|_| BusError::Closed)?;
        Ok(())
    }

    /// Send a session upsert, ignoring a closed bus.
    pub fn session_upserted(&self, session: Session) {
        let _ = self.send(SyncEvent::session_upserted(session));
    }

    /// Send a session removal, ignoring a closed bus.
    pub fn session_removed(&self, session_id: impl Into<String>) {
        let _ = self.send(SyncEvent::session_removed(session_id));
    }

    /// Send a status change, ignoring a closed bus.
    pub fn status_changed(&self, session_id: impl Into<String>, status: SessionStatus) {
        let _ = self.send(SyncEvent::status_changed(session_id, status));
    }
}

/// Receiver half of the event bus.
pub struct EventReceiver {
    rx: broadcast::Receiver<SyncEvent>,
}

impl EventReceiver {
    /// Receive the next event.
    pub async fn recv(&mut self) -> Result<SyncEvent, BusError> {
        self.rx.recv().await.map_err(|e| match e {
            broadcast::error::RecvError::Closed => BusError::Closed,
            broadcast::error::RecvError::Lagged(n) => BusError::Lagged(n),
        })
    }

    /// Try to receive an event without waiting.
    pub fn try_recv(&mut self) -> Result<Option<SyncEvent>, BusError> {
        match self.rx.try_recv() {
            Ok(event) => Ok(Some(event)),
            Err(broadcast::error::TryRecvError::Empty) => Ok(None),
            Err(broadcast::error::TryRecvError::Closed) => Err(BusError::Closed),
            Err(broadcast::error::TryRecvError::Lagged(n)) => Err(BusError::Lagged(n)),
        }
    }

    /// Drain every ready event into the cache, in arrival order. Returns
    /// the number of events applied. The cache never sees a partially
    /// drained batch mid-event; each event is one atomic mutation.
    pub fn apply_pending(&mut self, cache: &mut EntityCache) -> Result<usize, BusError> {
        let mut applied = 0;
        while let Some(event) = self.try_recv()? {
            tracing::trace!(?event, "applying sync event");
            cache.apply(event);
            applied += 1;
        }
        Ok(applied)
    }
}

/// Broadcast bus for entity events. The transport publishes; the cache
/// writer and any diagnostic taps subscribe independently.
pub struct EventBus {
    tx: broadcast::Sender<SyncEvent>,
}

impl EventBus {
    /// Create a new event bus.
    pub fn new() -> Self {
        let (tx, _) = broadcast::channel(256);
        Self { tx }
    }

    /// Get a sender.
    pub fn sender(&self) -> EventSender {
        EventSender {
            tx: self.tx.clone(),
        }
    }

    /// Subscribe to events.
    pub fn subscribe(&self) -> EventReceiver {
        EventReceiver {
            rx: self.tx.subscribe(),
        }
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new()
    }
}

/// Bus errors.
#[derive(Debug, thiserror::Error)]
pub enum BusError {
    #[error("Channel closed")]
    Closed,
    #[error("Lagged behind by {0} events")]
    Lagged(u64),
}
