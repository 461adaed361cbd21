//! Session / auth gate abstraction

use tokio::sync::watch;

use crate::types::Session;

/// Session Gate Trait
///
/// The core never authenticates anyone; it only asks whether a session exists.
pub trait SessionGate: Send + Sync {
    /// The active session, if any
    fn current_session(&self) -> Option<Session>;

    /// Change notifications (sign-in / sign-out)
    fn subscribe(&self) -> watch::Receiver<Option<Session>>;
}

/// In-memory session gate
pub struct InMemorySessionGate {
    tx: watch::Sender<Option<Session>>,
}

impl InMemorySessionGate {
    #[must_use]
    pub fn new() -> Self {
        let (tx, _rx) = watch::channel(None);
        Self { tx }
    }

    pub fn sign_in(&self, session: Session) {
        log::info!("Session started for {}", session.email);
        self.tx.send_replace(Some(session));
    }

    pub fn sign_out(&self) {
        if self.tx.send_replace(None).is_some() {
            log::info!("Session ended");
        }
    }
}

impl Default for InMemorySessionGate {
    fn default() -> Self {
        Self::new()
    }
}

impl SessionGate for InMemorySessionGate {
    fn current_session(&self) -> Option<Session> {
        self.tx.borrow().clone()
    }

    fn subscribe(&self) -> watch::Receiver<Option<Session>> {
        self.tx.subscribe()
    }
}
