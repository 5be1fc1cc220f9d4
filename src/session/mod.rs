//! Session subsystem: credential state, renewal, and the single-flight
//! coordinator
//!
//! This module owns everything about the authenticated session:
//!
//! - [`store::CredentialStore`] -- the identity container with
//!   change notification.
//! - [`renewal::RenewalOperation`] -- the one idempotent refresh exchange.
//! - [`coordinator::SessionCoordinator`] -- the state machine that detects
//!   authorization failures, runs at most one concurrent renewal, parks
//!   concurrent callers, and replays them after settlement.
//!
//! The coordinator is the only component allowed to mutate renewal state,
//! and (together with explicit login/logout) the only writer of the
//! credential store.

pub mod coordinator;
pub mod renewal;
pub mod store;

pub use coordinator::{SessionCoordinator, SessionOutcome};
pub use renewal::RenewalOperation;
pub use store::CredentialStore;

/// Navigation collaborator invoked when the session terminally expires.
///
/// The crate never performs navigation itself; hosts plug in whatever
/// "go to sign-in" means for them (a router push, a UI event, a log line).
/// Called exactly once per expired renewal cycle, after the credential
/// store has been cleared.
pub trait Navigator: Send + Sync + std::fmt::Debug {
    /// Sends the user to the sign-in entry point.
    fn redirect_to_sign_in(&self);
}

/// Default [`Navigator`] that only records the event in the log.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullNavigator;

impl Navigator for NullNavigator {
    fn redirect_to_sign_in(&self) {
        tracing::debug!("session expired; no navigator installed");
    }
}
