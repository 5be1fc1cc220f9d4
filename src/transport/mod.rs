//! Transport abstraction and implementations
//!
//! This module defines the [`Transport`] trait that all transport
//! implementations must satisfy, together with the wire-level request and
//! response types. Concrete implementations live in submodules:
//!
//! - [`http::HttpTransport`] -- reqwest-backed HTTP transport with a cookie
//!   store (the session credentials ride on cookies, opaque to this crate).
//! - [`fake::FakeTransport`] -- in-process fake used in tests (cfg(test)
//!   only).
//!
//! # Design
//!
//! The [`Transport`] trait is intentionally minimal: one
//! [`RequestDescriptor`] in, one [`WireResponse`] or [`TransportError`] out.
//! A transport performs exactly one HTTP exchange; it never retries,
//! inspects envelopes, or reacts to status codes. Classification of 401s and
//! the renewal protocol belong to the session coordinator.
//!
//! A [`TransportError`] means no HTTP response exists at all. Responses with
//! error statuses are ordinary [`WireResponse`] values.

use std::collections::HashMap;

use crate::error::TransportError;

/// HTTP method of a [`RequestDescriptor`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    Get,
    Post,
    Put,
    Delete,
}

impl Method {
    /// Method name as sent on the wire.
    pub fn as_str(&self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Put => "PUT",
            Method::Delete => "DELETE",
        }
    }
}

impl std::fmt::Display for Method {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Everything needed to (re)send one logical request.
///
/// A descriptor is immutable once built; the only thing that changes between
/// the original dispatch and a post-renewal replay is the `attempt` counter,
/// and that change produces a *new* descriptor via
/// [`next_attempt`](Self::next_attempt). The coordinator reads `attempt` to
/// decide between enqueue-as-waiter and forward-as-terminal; it never
/// mutates a descriptor in place.
///
/// # Examples
///
/// ```
/// use eventa_client::transport::RequestDescriptor;
///
/// let request = RequestDescriptor::get("/events");
/// assert_eq!(request.attempt, 0);
///
/// let replay = request.next_attempt();
/// assert_eq!(replay.attempt, 1);
/// assert_eq!(replay.path, "/events");
/// ```
#[derive(Debug, Clone)]
pub struct RequestDescriptor {
    /// HTTP method
    pub method: Method,

    /// Request path relative to the configured base URL, e.g. `/orders`
    pub path: String,

    /// Extra headers for this request (merged over the transport's own)
    pub headers: HashMap<String, String>,

    /// JSON body, when the method carries one
    pub body: Option<serde_json::Value>,

    /// How many renewal cycles this logical request has already been
    /// through. 0 on first dispatch, 1 on a post-renewal replay.
    pub attempt: u8,
}

impl RequestDescriptor {
    /// Builds a descriptor with the given method and path and no body.
    pub fn new(method: Method, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
            headers: HashMap::new(),
            body: None,
            attempt: 0,
        }
    }

    /// GET descriptor for `path`.
    pub fn get(path: impl Into<String>) -> Self {
        Self::new(Method::Get, path)
    }

    /// POST descriptor for `path` with no body.
    pub fn post(path: impl Into<String>) -> Self {
        Self::new(Method::Post, path)
    }

    /// PUT descriptor for `path` with no body.
    pub fn put(path: impl Into<String>) -> Self {
        Self::new(Method::Put, path)
    }

    /// DELETE descriptor for `path`.
    pub fn delete(path: impl Into<String>) -> Self {
        Self::new(Method::Delete, path)
    }

    /// Attaches a JSON body.
    pub fn with_body(mut self, body: serde_json::Value) -> Self {
        self.body = Some(body);
        self
    }

    /// Adds one header.
    pub fn with_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(name.into(), value.into());
        self
    }

    /// The identical request, one renewal cycle later.
    pub fn next_attempt(&self) -> Self {
        let mut replay = self.clone();
        replay.attempt += 1;
        replay
    }
}

/// A raw HTTP response: status, headers, body. No interpretation applied.
#[derive(Debug, Clone)]
pub struct WireResponse {
    /// HTTP status code
    pub status: u16,

    /// Response headers (names lowercased)
    pub headers: HashMap<String, String>,

    /// Response body as text
    pub body: String,
}

impl WireResponse {
    /// True for 2xx statuses.
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Abstraction over HTTP transport implementations.
///
/// The production implementation is [`http::HttpTransport`]; tests use
/// [`fake::FakeTransport`]. Used polymorphically through
/// `Arc<dyn Transport>`.
///
/// # Errors
///
/// `send` returns [`TransportError`] only when the exchange produced no HTTP
/// response (connect failure, timeout, bad URL). Error statuses come back as
/// `Ok` responses.
#[async_trait::async_trait]
pub trait Transport: Send + Sync + std::fmt::Debug {
    /// Performs one HTTP exchange for the given descriptor.
    async fn send(&self, request: &RequestDescriptor)
        -> std::result::Result<WireResponse, TransportError>;
}

pub mod http;

#[cfg(test)]
pub mod fake;
