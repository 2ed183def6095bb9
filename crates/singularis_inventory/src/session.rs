//! Owning sessions
//!
//! A session is the controlling entity an inventory belongs to (one per
//! player controller). The host owns sessions in a [`SessionRegistry`];
//! an inventory only keeps a [`SessionHandle`], which is valid only while
//! the session exists in that registry and must be re-checked, not trusted.

use serde::{Deserialize, Serialize};
use singularis_core::{Handle, HandleMap};

/// Non-owning reference to a [`Session`]
pub type SessionHandle = Handle<Session>;

/// What kind of entity controls a session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum SessionKind {
    /// Player controller on this machine
    LocalPlayer,
    /// Player controller replicated from elsewhere
    RemotePlayer,
    /// Anything that is not a player controller (AI, props, ...)
    NonPlayer,
}

/// Controlling entity
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Session {
    /// Name for diagnostics
    pub name: String,
    /// Controller kind
    pub kind: SessionKind,
}

impl Session {
    pub fn new(name: impl Into<String>, kind: SessionKind) -> Self {
        Self {
            name: name.into(),
            kind,
        }
    }

    /// Local player controller
    pub fn local_player(name: impl Into<String>) -> Self {
        Self::new(name, SessionKind::LocalPlayer)
    }

    pub fn is_player(&self) -> bool {
        matches!(self.kind, SessionKind::LocalPlayer | SessionKind::RemotePlayer)
    }

    pub fn is_local(&self) -> bool {
        self.kind == SessionKind::LocalPlayer
    }
}

/// Host-owned set of live sessions
#[derive(Default)]
pub struct SessionRegistry {
    sessions: HandleMap<Session>,
}

impl SessionRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a session
    pub fn spawn(&mut self, session: Session) -> SessionHandle {
        log::debug!("Session '{}' ({:?}) started", session.name, session.kind);
        self.sessions.insert(session)
    }

    /// End a session. Handles to it stop resolving.
    pub fn despawn(&mut self, handle: SessionHandle) -> Option<Session> {
        let session = self.sessions.remove(handle)?;
        log::debug!("Session '{}' ended", session.name);
        Some(session)
    }

    pub fn get(&self, handle: SessionHandle) -> Option<&Session> {
        self.sessions.get(handle)
    }

    pub fn is_alive(&self, handle: SessionHandle) -> bool {
        self.sessions.contains(handle)
    }

    pub fn len(&self) -> usize {
        self.sessions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sessions.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_session_kinds() {
        assert!(Session::local_player("p1").is_local());
        assert!(Session::new("p2", SessionKind::RemotePlayer).is_player());
        assert!(!Session::new("p2", SessionKind::RemotePlayer).is_local());
        assert!(!Session::new("npc", SessionKind::NonPlayer).is_player());
    }

    #[test]
    fn test_handle_invalidated_on_despawn() {
        let mut sessions = SessionRegistry::new();
        let handle = sessions.spawn(Session::local_player("p1"));
        assert!(sessions.is_alive(handle));

        assert_eq!(sessions.despawn(handle).map(|s| s.name), Some("p1".to_string()));
        assert!(!sessions.is_alive(handle));
        assert!(sessions.get(handle).is_none());
        assert!(sessions.despawn(handle).is_none());
        assert!(sessions.is_empty());
    }
}
