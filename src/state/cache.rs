//! Entity cache: the single source of truth for synchronized state.
//!
//! The cache holds sessions, messages, parts and per-session status as
//! plain keyed maps, mutated through `&mut self` so every operation is
//! one indivisible state transition. It never re-sorts: the transport
//! delivers events in causal order per entity, and the cache applies
//! them in arrival order. Updates or removals for unknown ids are
//! absorbed as no-ops rather than raised as errors, which makes
//! duplicate or late delivery harmless.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::events::{Message, Part, Session, SessionStatus, SyncEvent};

/// Keyed entity maps for one consumer (UI instance). Construct one per
/// consumer and inject it; there is no process-wide instance.
#[derive(Debug, Default)]
pub struct EntityCache {
    /// All known sessions by id.
    sessions: HashMap<String, Session>,

    /// Ordered session ids per project, as delivered by the catalog.
    project_sessions: HashMap<String, Vec<String>>,

    /// Messages per session id, in arrival order.
    messages: HashMap<String, Vec<Message>>,

    /// Parts per message id, in arrival order.
    parts: HashMap<String, Vec<Part>>,

    /// Agent activity per session id. Absent means idle.
    status: HashMap<String, SessionStatus>,

    /// The session the consumer is currently looking at.
    current_session: Option<String>,
}

impl EntityCache {
    /// Create an empty cache.
    pub fn new() -> Self {
        Self::default()
    }

    // =========================================================================
    // Mutators
    // =========================================================================

    /// Bulk-replace the session list for a project and upsert each
    /// session into the global map. Existing entries with the same id
    /// are overwritten.
    pub fn set_sessions(&mut self, project_id: impl Into<String>, sessions: Vec<Session>) {
        let project_id = project_id.into();
        let ids: Vec<String> = sessions.iter().map(|s| s.id.clone()).collect();
        for session in sessions {
            self.sessions.insert(session.id.clone(), session);
        }
        self.project_sessions.insert(project_id, ids);
    }

    /// Upsert a session by id.
    pub fn set_session(&mut self, session: Session) {
        self.sessions.insert(session.id.clone(), session);
    }

    /// Remove a session and everything reachable from it: its message
    /// list, the parts of those messages, and its status entry. Clears
    /// the current-session pointer when it pointed here. No-op when the
    /// id is unknown.
    pub fn remove_session(&mut self, session_id: &str) {
        if self.sessions.remove(session_id).is_none() {
            tracing::debug!(session_id, "remove for unknown session absorbed");
        }
        if let Some(messages) = self.messages.remove(session_id) {
            for message in &messages {
                self.parts.remove(&message.id);
            }
        }
        self.status.remove(session_id);
        for ids in self.project_sessions.values_mut() {
            ids.retain(|id| id != session_id);
        }
        if self.current_session.as_deref() == Some(session_id) {
            self.current_session = None;
        }
    }

    /// Append a message to a session's list, creating the list if
    /// absent. Ordering is append order.
    pub fn add_message(&mut self, session_id: impl Into<String>, message: Message) {
        self.messages
            .entry(session_id.into())
            .or_default()
            .push(message);
    }

    /// Replace the message whose id matches, leaving its position
    /// unchanged. No-op when not found.
    pub fn update_message(&mut self, session_id: &str, message: Message) {
        match self
            .messages
            .get_mut(session_id)
            .and_then(|list| list.iter_mut().find(|m| m.id == message.id))
        {
            Some(slot) => *slot = message,
            None => {
                tracing::debug!(session_id, message_id = %message.id, "update for unknown message absorbed");
            }
        }
    }

    /// Append a part to a message's list, creating the list if absent.
    pub fn add_part(&mut self, message_id: impl Into<String>, part: Part) {
        self.parts.entry(message_id.into()).or_default().push(part);
    }

    /// Replace the part whose id matches, leaving its position
    /// unchanged. No-op when not found.
    pub fn update_part(&mut self, message_id: &str, part: Part) {
        match self
            .parts
            .get_mut(message_id)
            .and_then(|list| list.iter_mut().find(|p| p.id == part.id))
        {
            Some(slot) => *slot = part,
            None => {
                tracing::debug!(message_id, part_id = %part.id, "update for unknown part absorbed");
            }
        }
    }

    /// Set the agent activity status for a session.
    pub fn set_status(&mut self, session_id: impl Into<String>, status: SessionStatus) {
        self.status.insert(session_id.into(), status);
    }

    /// Point the consumer at a session (or none).
    pub fn set_current_session(&mut self, session_id: Option<String>) {
        self.current_session = session_id;
    }

    /// Apply one transport event.
    pub fn apply(&mut self, event: SyncEvent) {
        match event {
            SyncEvent::SessionsListed {
                project_id,
                sessions,
            } => self.set_sessions(project_id, sessions),
            SyncEvent::SessionUpserted { session } => self.set_session(session),
            SyncEvent::SessionRemoved { session_id } => self.remove_session(&session_id),
            SyncEvent::MessageAppended {
                session_id,
                message,
            } => self.add_message(session_id, message),
            SyncEvent::MessageReplaced {
                session_id,
                message,
            } => self.update_message(&session_id, message),
            SyncEvent::PartAppended { message_id, part } => self.add_part(message_id, part),
            SyncEvent::PartReplaced { message_id, part } => self.update_part(&message_id, part),
            SyncEvent::StatusChanged { session_id, status } => self.set_status(session_id, status),
        }
    }

    // =========================================================================
    // Selectors
    // =========================================================================

    /// Look up a session by id.
    pub fn session(&self, session_id: &str) -> Option<&Session> {
        self.sessions.get(session_id)
    }

    /// Sessions for a project, in catalog order. Ids missing from the
    /// global map (removed after listing) are skipped.
    pub fn sessions_for_project(&self, project_id: &str) -> Vec<&Session> {
        self.project_sessions
            .get(project_id)
            .map(|ids| ids.iter().filter_map(|id| self.sessions.get(id)).collect())
            .unwrap_or_default()
    }

    /// Messages for a session, in arrival order. Empty when unknown.
    pub fn messages(&self, session_id: &str) -> &[Message] {
        self.messages
            .get(session_id)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Parts for a message, in arrival order. Empty when unknown.
    pub fn parts(&self, message_id: &str) -> &[Part] {
        self.parts
            .get(message_id)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Agent activity for a session. Idle when never reported.
    pub fn status(&self, session_id: &str) -> &SessionStatus {
        self.status
            .get(session_id)
            .unwrap_or(&SessionStatus::Idle)
    }

    /// The session the consumer is currently looking at.
    pub fn current_session(&self) -> Option<&str> {
        self.current_session.as_deref()
    }

    // =========================================================================
    // Persistence surface
    // =========================================================================

    /// Snapshot the persistent subset of the cache. Transient state
    /// (agent activity, the current-session pointer) is excluded; a
    /// storage collaborator serializes the rest.
    pub fn snapshot(&self) -> CacheSnapshot {
        CacheSnapshot {
            sessions: self.sessions.clone(),
            project_sessions: self.project_sessions.clone(),
            messages: self.messages.clone(),
            parts: self.parts.clone(),
        }
    }

    /// Rebuild a cache from a snapshot. Transient state starts fresh.
    pub fn from_snapshot(snapshot: CacheSnapshot) -> Self {
        Self {
            sessions: snapshot.sessions,
            project_sessions: snapshot.project_sessions,
            messages: snapshot.messages,
            parts: snapshot.parts,
            status: HashMap::new(),
            current_session: None,
        }
    }
}

/// The persistable subset of an [`EntityCache`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CacheSnapshot {
    pub sessions: HashMap<String, Session>,
    pub project_sessions: HashMap<String, Vec<String>>,
    pub messages: HashMap<String, Vec<Message>>,
    pub parts: HashMap<String, Vec<Part>>,
}
