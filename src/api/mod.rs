//! Typed endpoint wrappers
//!
//! Ordinary request/response plumbing over the façade: each function builds
//! a path and a body, delegates to [`ApiClient`](crate::client::ApiClient),
//! and returns the typed envelope. All session handling -- renewal,
//! single-flight, forced sign-out -- happens underneath, in the coordinator.

pub mod auth;
pub mod events;
pub mod orders;
pub mod users;

pub use auth::AuthApi;
pub use events::EventsApi;
pub use orders::OrdersApi;
pub use users::UsersApi;
