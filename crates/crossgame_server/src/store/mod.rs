//! Session storage.

mod memory;
mod record;

pub use memory::InMemorySessionStore;
pub use record::SessionRecord;

use crossgame_logic::{GameError, SessionId};

/// Mapping from session id to [`SessionRecord`].
///
/// `get` hands out copies for reading; changes go through `get_mut` or a
/// fresh `save`. No locking is done here; a store is owned by exactly one
/// controller.
pub trait SessionStore {
    /// Inserts or overwrites the record stored under `id`.
    fn save(&mut self, id: SessionId, record: SessionRecord);

    /// Returns a copy of the record stored under `id`.
    ///
    /// # Errors
    ///
    /// Returns `SessionNotFound` if nothing is stored under `id`.
    fn get(&self, id: &str) -> Result<SessionRecord, GameError>;

    /// Returns the stored record for in-place changes.
    ///
    /// # Errors
    ///
    /// Returns `SessionNotFound` if nothing is stored under `id`.
    fn get_mut(&mut self, id: &str) -> Result<&mut SessionRecord, GameError>;

    /// Removes the record stored under `id`; unknown ids are skipped with a warning.
    fn remove(&mut self, id: &str);

    /// Lists the stored session ids.
    fn session_ids(&self) -> Vec<SessionId>;

    /// Number of stored sessions.
    fn len(&self) -> usize;

    /// Returns true when nothing is stored.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
