//! The Eventa API response envelope
//!
//! Every endpoint of the service answers with one uniform JSON body:
//!
//! ```json
//! { "success": true, "message": "...", "data": { ... }, "pagination": { ... } }
//! ```
//!
//! on success, and
//!
//! ```json
//! { "success": false, "message": "...", "code": "VALIDATION_ERROR", "errors": { ... } }
//! ```
//!
//! on failure. This module defines the typed envelope plus the pagination
//! block shared by the list endpoints. The request façade deserializes every
//! body through [`Envelope`] and converts unsuccessful envelopes into
//! [`ApiError`](crate::error::ApiError).

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::error::{ApiError, ErrorCode};

/// Pagination block returned by list endpoints.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Pagination {
    /// 1-based page number
    pub page: u32,
    /// Page size requested
    pub limit: u32,
    /// Total matching items across all pages
    #[serde(alias = "total")]
    pub total_items: u64,
    /// Total number of pages
    pub total_pages: u32,
}

/// The uniform response body wrapper.
///
/// `data` is `None` for error envelopes and for success envelopes with no
/// payload (e.g. logout acknowledgements, where `T` is
/// `serde_json::Value` or `()`-like).
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
#[serde(bound(deserialize = "T: Deserialize<'de>"))]
pub struct Envelope<T> {
    /// Whether the request was accepted by the service
    pub success: bool,

    /// Human-readable outcome message
    #[serde(default)]
    pub message: String,

    /// The typed payload, present on success
    #[serde(default)]
    pub data: Option<T>,

    /// Machine-readable error code, present on failure
    #[serde(default)]
    pub code: Option<ErrorCode>,

    /// Per-field validation messages, present on validation failure
    #[serde(default)]
    pub errors: Option<HashMap<String, Vec<String>>>,

    /// Pagination block, present on list responses
    #[serde(default)]
    pub pagination: Option<Pagination>,
}

impl<T> Envelope<T> {
    /// Converts an unsuccessful envelope into an [`ApiError`] carrying the
    /// given HTTP status.
    ///
    /// Call only when `success` is false; on a success envelope the message
    /// is still propagated but the error carries no code or field errors
    /// beyond what the envelope held.
    pub fn into_api_error(self, status: u16) -> ApiError {
        ApiError {
            status,
            message: if self.message.is_empty() {
                format!("request failed with status {}", status)
            } else {
                self.message
            },
            code: self.code,
            errors: self.errors,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Deserialize, PartialEq)]
    struct Payload {
        id: u32,
    }

    #[test]
    fn test_success_envelope_deserializes() {
        let body = r#"{"success":true,"message":"ok","data":{"id":7}}"#;
        let envelope: Envelope<Payload> = serde_json::from_str(body).expect("deserialize");
        assert!(envelope.success);
        assert_eq!(envelope.message, "ok");
        assert_eq!(envelope.data, Some(Payload { id: 7 }));
        assert!(envelope.code.is_none());
        assert!(envelope.pagination.is_none());
    }

    #[test]
    fn test_error_envelope_deserializes_with_code_and_errors() {
        let body = r#"{
            "success": false,
            "message": "validation failed",
            "code": "VALIDATION_ERROR",
            "errors": { "email": ["must be a valid address"] }
        }"#;
        let envelope: Envelope<Payload> = serde_json::from_str(body).expect("deserialize");
        assert!(!envelope.success);
        assert_eq!(envelope.code, Some(ErrorCode::ValidationError));
        let errors = envelope.errors.as_ref().expect("field errors");
        assert_eq!(errors["email"], vec!["must be a valid address"]);
        assert!(envelope.data.is_none());
    }

    #[test]
    fn test_missing_optional_fields_default() {
        let body = r#"{"success":true}"#;
        let envelope: Envelope<Payload> = serde_json::from_str(body).expect("deserialize");
        assert!(envelope.success);
        assert!(envelope.message.is_empty());
        assert!(envelope.data.is_none());
    }

    #[test]
    fn test_pagination_deserializes_camel_case() {
        let body = r#"{
            "success": true,
            "message": "events",
            "data": {"id": 1},
            "pagination": {"page": 2, "limit": 10, "totalItems": 41, "totalPages": 5}
        }"#;
        let envelope: Envelope<Payload> = serde_json::from_str(body).expect("deserialize");
        let pagination = envelope.pagination.expect("pagination");
        assert_eq!(pagination.page, 2);
        assert_eq!(pagination.limit, 10);
        assert_eq!(pagination.total_items, 41);
        assert_eq!(pagination.total_pages, 5);
    }

    #[test]
    fn test_pagination_accepts_total_alias() {
        // Some endpoints emit "total" instead of "totalItems".
        let body = r#"{"page":1,"limit":20,"total":3,"totalPages":1}"#;
        let pagination: Pagination = serde_json::from_str(body).expect("deserialize");
        assert_eq!(pagination.total_items, 3);
    }

    #[test]
    fn test_into_api_error_carries_envelope_fields() {
        let body = r#"{
            "success": false,
            "message": "not allowed",
            "code": "FORBIDDEN"
        }"#;
        let envelope: Envelope<Payload> = serde_json::from_str(body).expect("deserialize");
        let error = envelope.into_api_error(403);
        assert_eq!(error.status, 403);
        assert_eq!(error.message, "not allowed");
        assert_eq!(error.code, Some(ErrorCode::Forbidden));
    }

    #[test]
    fn test_into_api_error_synthesizes_message_when_empty() {
        let body = r#"{"success":false}"#;
        let envelope: Envelope<Payload> = serde_json::from_str(body).expect("deserialize");
        let error = envelope.into_api_error(500);
        assert_eq!(error.message, "request failed with status 500");
    }
}
