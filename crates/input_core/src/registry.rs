//! Sessions keyed by field, plus the storage they persist into.

use crate::error::SessionError;
use crate::host::HostElement;
use crate::id::InputId;
use crate::session::EditSession;
use crate::storage::{MemoryStorage, ValueStorage};
use policy::FormatPolicy;
use std::collections::HashMap;
use std::collections::hash_map::Entry;
use std::sync::Arc;

/// Owns one [`EditSession`] per field and routes focus between them.
///
/// At most one field is focused; focusing another blurs the previous one
/// first. Persisted values are loaded at attach and written at blur for
/// fields whose policy sets `persist`.
#[derive(Debug)]
pub struct FieldRegistry<S: ValueStorage = MemoryStorage> {
    sessions: HashMap<InputId, EditSession>,
    storage: S,
    focused: Option<InputId>,
}

impl FieldRegistry<MemoryStorage> {
    pub fn new() -> Self {
        Self::with_storage(MemoryStorage::new())
    }
}

impl Default for FieldRegistry<MemoryStorage> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: ValueStorage> FieldRegistry<S> {
    pub fn with_storage(storage: S) -> Self {
        Self {
            sessions: HashMap::new(),
            storage,
            focused: None,
        }
    }

    /// Bind a field. A persisted value, when present and valid, wins over
    /// `initial`. Re-attaching an id replaces its session.
    pub fn attach(
        &mut self,
        id: InputId,
        host: &HostElement,
        policy: Arc<FormatPolicy>,
        initial: &str,
    ) -> Result<&mut EditSession, SessionError> {
        let mut session = EditSession::new(host, policy, initial)?;
        let key = id.storage_key();
        if session.policy().behavior.persist
            && let Some(saved) = self.storage.load(&key)
        {
            if let Err(err) = session.set_value(&saved) {
                log::warn!(target: "numfield.registry", "dropping persisted {key}: {err}");
                self.storage.clear(&key);
            }
        }
        log::debug!(target: "numfield.registry", "attach {id}");

        if self.focused == Some(id) {
            self.focused = None;
        }
        Ok(match self.sessions.entry(id) {
            Entry::Occupied(mut entry) => {
                entry.insert(session);
                entry.into_mut()
            }
            Entry::Vacant(entry) => entry.insert(session),
        })
    }

    /// Unbind a field and forget anything persisted for it.
    pub fn detach(&mut self, id: InputId) -> Result<(), SessionError> {
        let session = self
            .sessions
            .remove(&id)
            .ok_or(SessionError::UnknownField(id))?;
        if session.policy().behavior.persist {
            self.storage.clear(&id.storage_key());
        }
        if self.focused == Some(id) {
            self.focused = None;
        }
        log::debug!(target: "numfield.registry", "detach {id}");
        session.destroy();
        Ok(())
    }

    pub fn focus(&mut self, id: InputId) -> Result<(), SessionError> {
        if !self.sessions.contains_key(&id) {
            return Err(SessionError::UnknownField(id));
        }
        if let Some(previous) = self.focused.filter(|previous| *previous != id) {
            self.blur(previous)?;
        }
        if let Some(session) = self.sessions.get_mut(&id) {
            session.on_focus_gained();
        }
        self.focused = Some(id);
        Ok(())
    }

    pub fn blur(&mut self, id: InputId) -> Result<(), SessionError> {
        let session = self
            .sessions
            .get_mut(&id)
            .ok_or(SessionError::UnknownField(id))?;
        session.on_focus_lost();
        if session.policy().behavior.persist {
            let key = id.storage_key();
            let raw = session.raw_value();
            if raw.is_empty() {
                self.storage.clear(&key);
            } else {
                self.storage.save(&key, &raw);
            }
        }
        if self.focused == Some(id) {
            self.focused = None;
        }
        Ok(())
    }

    pub fn focused(&self) -> Option<InputId> {
        self.focused
    }

    pub fn session(&self, id: InputId) -> Option<&EditSession> {
        self.sessions.get(&id)
    }

    pub fn session_mut(&mut self, id: InputId) -> Option<&mut EditSession> {
        self.sessions.get_mut(&id)
    }

    /// Every field's raw value, ordered by id, for form serialization.
    pub fn raw_values(&self) -> Vec<(InputId, String)> {
        let mut values: Vec<_> = self
            .sessions
            .iter()
            .map(|(id, session)| (*id, session.raw_value()))
            .collect();
        values.sort_by_key(|(id, _)| *id);
        values
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    pub fn len(&self) -> usize {
        self.sessions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sessions.is_empty()
    }
}
