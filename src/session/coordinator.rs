//! The session coordinator: single-flight renewal with queued replays
//!
//! Every request the façade issues passes through
//! [`SessionCoordinator::execute`]. Responses other than HTTP 401 pass
//! straight back to the caller -- including 4xx/5xx failures, which the
//! façade turns into `ApiError` values. A 401 on an interceptable path
//! engages the renewal protocol:
//!
//! - The first such caller becomes the *leader*: it flips the state from
//!   `Idle` to `RenewalInFlight` (one synchronous mutex scope, so two
//!   callers can never both observe `Idle`), runs the renewal operation,
//!   settles the cycle, and replays its own request.
//! - Callers whose 401 arrives while a renewal is in flight become
//!   *waiters*: each parks on a oneshot receiver, is resumed with the
//!   settlement outcome, and replays its own request on `Renewed` or
//!   resolves to the session-expired error on `Expired`.
//!
//! Settlement order on success is fixed: the renewed identity is committed
//! to the credential store *before* any waiter is resumed, so no replay can
//! be dispatched ahead of the commit. On failure the store is cleared,
//! every parked caller is failed, and the navigator is signalled exactly
//! once.
//!
//! Loop termination: a descriptor carries an immutable `attempt` counter.
//! Replays re-enter `execute` with `attempt = 1`; a 401 on such a
//! descriptor is forwarded as-is and never starts or joins another renewal
//! cycle, so one logical request experiences at most one cycle.
//!
//! The renewal path and the logout path are never intercepted; a 401 from
//! either passes through untouched. Intercepting the renewal endpoint's own
//! failures would recurse; intercepting logout would renew a session the
//! caller is tearing down.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use tokio::sync::oneshot;

use crate::config::ClientConfig;
use crate::error::ApiError;
use crate::session::renewal::RenewalOperation;
use crate::session::store::CredentialStore;
use crate::session::Navigator;
use crate::transport::{RequestDescriptor, Transport, WireResponse};

/// Status code classified as an authorization failure.
const UNAUTHORIZED: u16 = 401;

/// How a renewal cycle settled.
///
/// Created exactly once per cycle, at settlement, and delivered to the
/// leader and every waiter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionOutcome {
    /// The credential store holds the renewed identity; replay.
    Renewed,
    /// Renewal failed permanently; the store is cleared and the caller
    /// receives the session-expired error.
    Expired,
}

/// Coordination state: at most one renewal in flight, with parked callers.
///
/// Owned exclusively by the coordinator. The mutex is held only for
/// synchronous check-and-transition; never across an await point.
#[derive(Debug, Default)]
struct RenewalState {
    in_flight: bool,
    waiters: Vec<oneshot::Sender<SessionOutcome>>,
}

/// What `execute` decided to do about a 401, under one lock acquisition.
enum Role {
    /// This caller starts the renewal cycle.
    Leader,
    /// A cycle is already in flight; park until it settles.
    Waiter(oneshot::Receiver<SessionOutcome>),
}

/// Wraps a [`Transport`] with the single-flight renewal protocol.
///
/// One coordinator instance per client; independent clients (and tests)
/// get independent renewal state.
#[derive(Debug)]
pub struct SessionCoordinator {
    transport: Arc<dyn Transport>,
    store: CredentialStore,
    renewal: RenewalOperation,
    navigator: Arc<dyn Navigator>,
    logout_path: String,
    state: Mutex<RenewalState>,
}

impl SessionCoordinator {
    /// Creates a coordinator over `transport`.
    ///
    /// The refresh and logout paths from `config` form the interception
    /// exclusion list; the refresh path is also where the renewal operation
    /// posts.
    pub fn new(
        transport: Arc<dyn Transport>,
        store: CredentialStore,
        navigator: Arc<dyn Navigator>,
        config: &ClientConfig,
    ) -> Self {
        let renewal = RenewalOperation::new(Arc::clone(&transport), config.refresh_path.clone());
        Self {
            transport,
            store,
            renewal,
            navigator,
            logout_path: config.logout_path.clone(),
            state: Mutex::new(RenewalState::default()),
        }
    }

    /// The credential store this coordinator commits to.
    pub fn store(&self) -> &CredentialStore {
        &self.store
    }

    /// Sends a request, transparently renewing the session on a 401.
    ///
    /// # Errors
    ///
    /// - Transport-level failures surface as `ApiError { status: 0 }` and
    ///   never engage renewal.
    /// - A 401 whose renewal cycle settles as expired surfaces as
    ///   `ApiError { status: 401, message: "Session expired" }`.
    ///
    /// Responses with error statuses -- including 401s on exempt paths and
    /// second 401s on replayed requests -- are returned as `Ok` for the
    /// façade to classify.
    pub async fn execute(&self, request: RequestDescriptor) -> Result<WireResponse, ApiError> {
        let mut request = request;
        loop {
            let response = self
                .transport
                .send(&request)
                .await
                .map_err(|e| ApiError::transport(&e))?;

            if response.status != UNAUTHORIZED || self.is_exempt(&request.path) {
                return Ok(response);
            }

            if request.attempt > 0 {
                // Second 401 for this logical request: one renewal cycle is
                // the limit. Forward the server's own response.
                tracing::warn!(
                    path = %request.path,
                    "replayed request was rejected again; not renewing"
                );
                return Ok(response);
            }

            match self.classify_caller() {
                Role::Leader => {
                    let outcome = self.run_renewal_cycle().await;
                    if outcome == SessionOutcome::Expired {
                        return Err(ApiError::session_expired());
                    }
                }
                Role::Waiter(rx) => {
                    tracing::debug!(path = %request.path, "awaiting in-flight session renewal");
                    // A dropped sender can only mean the leader's task died;
                    // treat it as an expired session rather than hanging.
                    let outcome = rx.await.unwrap_or(SessionOutcome::Expired);
                    if outcome == SessionOutcome::Expired {
                        return Err(ApiError::session_expired());
                    }
                }
            }

            request = request.next_attempt();
        }
    }

    /// True when `path` is the renewal or logout endpoint (query string
    /// ignored).
    fn is_exempt(&self, path: &str) -> bool {
        let path = path.split('?').next().unwrap_or(path);
        path == self.renewal.refresh_path() || path == self.logout_path
    }

    /// Decides leader-or-waiter for a fresh authorization failure.
    ///
    /// Check and transition happen under one lock acquisition: two callers
    /// can never both observe `Idle`.
    fn classify_caller(&self) -> Role {
        let mut state = self.state_guard();
        if state.in_flight {
            let (tx, rx) = oneshot::channel();
            state.waiters.push(tx);
            Role::Waiter(rx)
        } else {
            state.in_flight = true;
            Role::Leader
        }
    }

    /// Runs the renewal operation once and settles the cycle.
    ///
    /// Commit ordering is the point of this function: on success the store
    /// is updated *before* the state is reset and the waiters resumed, so
    /// every replay observes the new credential. On failure the store is
    /// cleared first, then the waiters are failed, then the navigator is
    /// signalled once.
    async fn run_renewal_cycle(&self) -> SessionOutcome {
        tracing::debug!("authorization failure; starting session renewal");

        let outcome = match self.renewal.renew().await {
            Ok(identity) => {
                self.store.set(identity);
                SessionOutcome::Renewed
            }
            Err(e) => {
                tracing::warn!(error = %e, "session renewal failed; forcing sign-out");
                self.store.clear();
                SessionOutcome::Expired
            }
        };

        let waiters = {
            let mut state = self.state_guard();
            state.in_flight = false;
            std::mem::take(&mut state.waiters)
        };

        tracing::debug!(waiters = waiters.len(), ?outcome, "session renewal settled");

        for waiter in waiters {
            // A waiter whose caller has gone away is simply unobserved.
            let _ = waiter.send(outcome);
        }

        if outcome == SessionOutcome::Expired {
            self.navigator.redirect_to_sign_in();
        }

        outcome
    }

    /// Acquires the state lock. Settlement must drain the waiters even if
    /// some other task panicked while holding the guard, so poisoning is
    /// recovered rather than propagated; the two-field state is written
    /// atomically under the lock and cannot be observed half-updated.
    fn state_guard(&self) -> MutexGuard<'_, RenewalState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}
