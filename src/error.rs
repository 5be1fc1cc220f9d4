//! Error types for the Eventa client
//!
//! This module defines all error types used throughout the crate, using
//! `thiserror` for ergonomic error handling. The public-facing [`ApiError`]
//! is the uniform failure value returned by the request façade regardless of
//! where the failure originated (network, server envelope, or the session
//! coordinator).

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Crate-internal error type for client operations
///
/// This enum covers failures in configuration loading, transport setup, and
/// serialization. Request failures that callers are expected to render are
/// carried by [`ApiError`] instead.
#[derive(Error, Debug)]
pub enum ClientError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// Transport-level errors (connection, TLS, timeouts)
    #[error("Transport error: {0}")]
    Transport(#[from] TransportError),

    /// JSON serialization/deserialization errors
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// YAML parsing errors
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors raised by a [`Transport`](crate::transport::Transport)
/// implementation while performing a single HTTP exchange.
///
/// A `TransportError` means the request never produced an HTTP response at
/// all. Responses with error status codes are *not* transport errors; they
/// are returned as ordinary [`WireResponse`](crate::transport::WireResponse)
/// values and classified downstream.
#[derive(Error, Debug)]
pub enum TransportError {
    /// The underlying HTTP request failed (DNS, connect, TLS, timeout)
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The request path could not be joined onto the configured base URL
    #[error("invalid request URL: {0}")]
    InvalidUrl(String),

    /// Catch-all for test doubles and non-HTTP transports
    #[error("{0}")]
    Other(String),
}

/// Errors raised by the renewal operation.
///
/// Every variant is permanent from the coordinator's point of view: the
/// coordinator never retries a failed renewal, it settles the cycle as
/// expired.
#[derive(Error, Debug)]
pub enum RenewalError {
    /// The refresh request itself failed at the transport level
    #[error("renewal transport failure: {0}")]
    Transport(#[from] TransportError),

    /// The refresh endpoint rejected the refresh credential
    #[error("renewal rejected with status {status}: {message}")]
    Rejected {
        /// HTTP status returned by the refresh endpoint
        status: u16,
        /// Message from the response envelope, when one could be parsed
        message: String,
    },

    /// The refresh endpoint answered 2xx but the body was not a valid
    /// success envelope carrying an identity
    #[error("renewal response was malformed: {0}")]
    Malformed(String),
}

/// Machine-readable error codes used by the Eventa API error envelope.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ErrorCode {
    ValidationError,
    Unauthorized,
    Forbidden,
    NotFound,
    InternalServerError,
    BadRequest,
    Conflict,
}

/// The uniform failure value returned by the request façade.
///
/// Every failure path -- a transport failure, a server error envelope, or an
/// expiry synthesized by the session coordinator -- is normalized into this
/// shape before it reaches the caller.
///
/// `status` is the HTTP status of the failing response; `0` means the
/// request never produced an HTTP response (network unreachable, timeout).
///
/// # Examples
///
/// ```
/// use eventa_client::error::ApiError;
///
/// let expired = ApiError::session_expired();
/// assert_eq!(expired.status, 401);
/// assert_eq!(expired.message, "Session expired");
/// ```
#[derive(Error, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[error("API error {status}: {message}")]
pub struct ApiError {
    /// HTTP status of the failing response, or 0 when no response exists
    pub status: u16,

    /// Human-readable message from the error envelope or the failure itself
    pub message: String,

    /// Machine-readable code from the error envelope, when present
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub code: Option<ErrorCode>,

    /// Per-field validation messages from the error envelope, when present
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub errors: Option<HashMap<String, Vec<String>>>,
}

impl ApiError {
    /// The terminal error delivered when a renewal cycle settles as expired.
    ///
    /// Matches the behaviour callers see on forced logout: status 401 with a
    /// fixed message, no field errors.
    pub fn session_expired() -> Self {
        Self {
            status: 401,
            message: "Session expired".to_string(),
            code: Some(ErrorCode::Unauthorized),
            errors: None,
        }
    }

    /// Wraps a transport-level failure. No HTTP response exists, so the
    /// status is 0.
    pub fn transport(err: &TransportError) -> Self {
        Self {
            status: 0,
            message: err.to_string(),
            code: None,
            errors: None,
        }
    }

    /// Builds an error from a response status and an optional parsed error
    /// envelope body.
    pub fn from_status(status: u16, message: impl Into<String>) -> Self {
        Self {
            status,
            message: message.into(),
            code: None,
            errors: None,
        }
    }
}

/// Result type alias for Eventa client operations
///
/// This is a convenience alias that uses `anyhow::Error` as the error type,
/// allowing for rich error context and easy error propagation.
pub type Result<T> = anyhow::Result<T>;
