//! In-memory session store.

use super::{SessionRecord, SessionStore};
use crossgame_logic::{GameError, GameErrorKind, SessionId};
use std::collections::HashMap;
use tracing::{debug, info, instrument, warn};

/// Session store backed by a `HashMap`, lost when the process exits.
#[derive(Debug, Clone, Default)]
pub struct InMemorySessionStore {
    sessions: HashMap<SessionId, SessionRecord>,
}

impl InMemorySessionStore {
    /// Creates an empty store.
    #[instrument]
    pub fn new() -> Self {
        info!("Creating in-memory session store");
        Self::default()
    }
}

impl SessionStore for InMemorySessionStore {
    #[instrument(skip(self, record), fields(players = record.players().len()))]
    fn save(&mut self, id: SessionId, record: SessionRecord) {
        debug!(session_id = %id, "Session saved");
        self.sessions.insert(id, record);
    }

    #[instrument(skip(self))]
    fn get(&self, id: &str) -> Result<SessionRecord, GameError> {
        self.sessions.get(id).cloned().ok_or_else(|| {
            debug!(session_id = id, "Session not found");
            GameError::new(GameErrorKind::SessionNotFound(id.to_string()))
        })
    }

    #[instrument(skip(self))]
    fn get_mut(&mut self, id: &str) -> Result<&mut SessionRecord, GameError> {
        self.sessions.get_mut(id).ok_or_else(|| {
            debug!(session_id = id, "Session not found");
            GameError::new(GameErrorKind::SessionNotFound(id.to_string()))
        })
    }

    #[instrument(skip(self))]
    fn remove(&mut self, id: &str) {
        if self.sessions.remove(id).is_some() {
            info!(session_id = id, "Session removed");
        } else {
            warn!(session_id = id, "Session is not found, will be skipped");
        }
    }

    fn session_ids(&self) -> Vec<SessionId> {
        self.sessions.keys().cloned().collect()
    }

    fn len(&self) -> usize {
        self.sessions.len()
    }
}
