//! Eventa client - session-authenticated HTTP access layer
//!
//! This library provides a typed client for the Eventa ticketing API. Its
//! core is the session coordinator: when the short-lived access credential
//! expires, concurrent requests that fail authorization share one renewal
//! of the credential (single-flight), are transparently replayed after it
//! succeeds, and are all signed out together when it fails permanently.
//!
//! # Architecture
//!
//! The library is organized into the following modules:
//!
//! - `client`: the request façade (`ApiClient`) all callers go through
//! - `session`: credential store, renewal operation, and the single-flight
//!   coordinator
//! - `transport`: the HTTP seam (`Transport` trait, reqwest implementation)
//! - `api`: thin typed endpoint wrappers (auth, events, orders, users)
//! - `envelope` / `models`: the service's response envelope and domain DTOs
//! - `config`: client configuration
//! - `error`: error types, including the uniform `ApiError`
//!
//! # Example
//!
//! ```no_run
//! use eventa_client::{ApiClient, ClientConfig};
//! use eventa_client::models::EventSummary;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let config = ClientConfig::load("eventa.yaml")?;
//!     let client = ApiClient::new(config)?;
//!
//!     match client.get::<Vec<EventSummary>>("/events").await {
//!         Ok(envelope) => println!("{}", envelope.message),
//!         Err(e) => eprintln!("request failed: {e}"),
//!     }
//!     Ok(())
//! }
//! ```

pub mod api;
pub mod client;
pub mod config;
pub mod envelope;
pub mod error;
pub mod models;
pub mod session;
pub mod transport;

// Re-export commonly used types
pub use client::ApiClient;
pub use config::ClientConfig;
pub use envelope::{Envelope, Pagination};
pub use error::{ApiError, ClientError, ErrorCode, Result};
pub use session::{CredentialStore, Navigator, NullNavigator, SessionCoordinator};
pub use transport::{Method, RequestDescriptor, Transport, WireResponse};
