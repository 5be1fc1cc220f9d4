//! Credential store: the process-wide authenticated-identity container
//!
//! [`CredentialStore`] holds the current session state -- the authenticated
//! [`UserProfile`] or `None` -- and notifies subscribers on every change via
//! a `tokio::sync::watch` channel. It is a pure state container: no
//! validation, no I/O, no knowledge of tokens (those are cookies owned by
//! the transport layer).
//!
//! Mutation discipline: only the session coordinator and the explicit auth
//! calls (login/logout) write to the store. Everything else subscribes or
//! reads.

use tokio::sync::watch;

use crate::models::UserProfile;

/// Cloneable handle to the shared identity state.
///
/// All clones observe the same state; `subscribe` returns a receiver that
/// yields the current value immediately and every change afterwards.
///
/// # Examples
///
/// ```
/// use eventa_client::session::CredentialStore;
///
/// let store = CredentialStore::new();
/// assert!(store.current().is_none());
/// store.clear();
/// assert!(store.current().is_none());
/// ```
#[derive(Debug, Clone)]
pub struct CredentialStore {
    tx: watch::Sender<Option<UserProfile>>,
}

impl CredentialStore {
    /// Creates an empty store (no authenticated identity).
    pub fn new() -> Self {
        let (tx, _rx) = watch::channel(None);
        Self { tx }
    }

    /// Replaces the current identity. Subscribers are notified even when
    /// the new identity equals the old one -- a renewal is a state change.
    pub fn set(&self, profile: UserProfile) {
        self.tx.send_replace(Some(profile));
    }

    /// Clears the identity, returning the store to the signed-out state.
    pub fn clear(&self) {
        self.tx.send_replace(None);
    }

    /// The current identity, if any.
    pub fn current(&self) -> Option<UserProfile> {
        self.tx.borrow().clone()
    }

    /// True when an identity is present.
    pub fn is_authenticated(&self) -> bool {
        self.tx.borrow().is_some()
    }

    /// Subscribes to identity changes.
    ///
    /// The receiver starts with the current value; use
    /// `watch::Receiver::changed` to await updates.
    pub fn subscribe(&self) -> watch::Receiver<Option<UserProfile>> {
        self.tx.subscribe()
    }
}

impl Default for CredentialStore {
    fn default() -> Self {
        Self::new()
    }
}
