//! In-process fake transport for unit and integration tests
//!
//! [`FakeTransport`] replaces real network I/O in tests. Unlike a message
//! stream, callers of [`Transport::send`] need a paired response per
//! request, so the fake is handler-based: the test supplies one async
//! closure that receives every dispatched [`RequestDescriptor`] and returns
//! the [`WireResponse`] (or [`TransportError`]) for it.
//!
//! Every dispatched descriptor is also appended to an internal log, in
//! dispatch order, so tests can assert on what was sent and when.
//!
//! # Example
//!
//! ```
//! use eventa_client::transport::fake::FakeTransport;
//! use eventa_client::transport::{RequestDescriptor, Transport};
//!
//! # #[tokio::main]
//! # async fn main() {
//! let transport = FakeTransport::always(200, r#"{"success":true,"message":"ok"}"#);
//!
//! let response = transport
//!     .send(&RequestDescriptor::get("/events"))
//!     .await
//!     .unwrap();
//! assert_eq!(response.status, 200);
//! assert_eq!(transport.requests().len(), 1);
//! # }
//! ```

use std::collections::HashMap;
use std::sync::Mutex;

use futures::future::BoxFuture;

use crate::error::TransportError;
use crate::transport::{RequestDescriptor, Transport, WireResponse};

type Handler = Box<
    dyn Fn(RequestDescriptor) -> BoxFuture<'static, Result<WireResponse, TransportError>>
        + Send
        + Sync,
>;

/// Handler-backed fake transport with a dispatch log.
pub struct FakeTransport {
    handler: Handler,
    log: Mutex<Vec<RequestDescriptor>>,
}

impl std::fmt::Debug for FakeTransport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FakeTransport")
            .field("dispatched", &self.log.lock().unwrap().len())
            .finish()
    }
}

impl FakeTransport {
    /// Creates a fake whose responses come from the given async handler.
    ///
    /// The handler receives each dispatched descriptor by value (it is also
    /// logged) and may await -- e.g. on a
    /// [`Notify`](tokio::sync::Notify) -- to hold a response open while the
    /// test arranges concurrent callers.
    pub fn new<F>(handler: F) -> Self
    where
        F: Fn(RequestDescriptor) -> BoxFuture<'static, Result<WireResponse, TransportError>>
            + Send
            + Sync
            + 'static,
    {
        Self {
            handler: Box::new(handler),
            log: Mutex::new(Vec::new()),
        }
    }

    /// Creates a fake that answers every request with one fixed status and
    /// body.
    pub fn always(status: u16, body: &str) -> Self {
        let body = body.to_string();
        Self::new(move |_request| {
            let body = body.clone();
            Box::pin(async move { Ok(response(status, &body)) })
        })
    }

    /// Creates a fake that fails every request at the transport level.
    pub fn unreachable() -> Self {
        Self::new(|_request| {
            Box::pin(async { Err(TransportError::Other("connection refused".to_string())) })
        })
    }

    /// All descriptors dispatched so far, in order.
    pub fn requests(&self) -> Vec<RequestDescriptor> {
        self.log.lock().unwrap().clone()
    }

    /// Number of dispatches whose path equals `path`.
    pub fn count_for_path(&self, path: &str) -> usize {
        self.log
            .lock()
            .unwrap()
            .iter()
            .filter(|r| r.path == path)
            .count()
    }
}

/// Builds a [`WireResponse`] with the given status and body and no headers.
pub fn response(status: u16, body: &str) -> WireResponse {
    WireResponse {
        status,
        headers: HashMap::new(),
        body: body.to_string(),
    }
}

#[async_trait::async_trait]
impl Transport for FakeTransport {
    async fn send(
        &self,
        request: &RequestDescriptor,
    ) -> std::result::Result<WireResponse, TransportError> {
        self.log.lock().unwrap().push(request.clone());
        (self.handler)(request.clone()).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::transport::Method;

    #[tokio::test]
    async fn test_always_returns_fixed_response() {
        let transport = FakeTransport::always(204, "");
        let response = transport
            .send(&RequestDescriptor::delete("/orders/1"))
            .await
            .unwrap();
        assert_eq!(response.status, 204);
        assert!(response.body.is_empty());
    }

    #[tokio::test]
    async fn test_unreachable_returns_transport_error() {
        let transport = FakeTransport::unreachable();
        let result = transport.send(&RequestDescriptor::get("/events")).await;
        assert!(matches!(result, Err(TransportError::Other(_))));
    }

    #[tokio::test]
    async fn test_log_records_dispatch_order() {
        let transport = FakeTransport::always(200, "{}");
        transport
            .send(&RequestDescriptor::get("/events"))
            .await
            .unwrap();
        transport
            .send(&RequestDescriptor::post("/orders"))
            .await
            .unwrap();

        let requests = transport.requests();
        assert_eq!(requests.len(), 2);
        assert_eq!(requests[0].path, "/events");
        assert_eq!(requests[0].method, Method::Get);
        assert_eq!(requests[1].path, "/orders");
        assert_eq!(requests[1].method, Method::Post);
    }

    #[tokio::test]
    async fn test_count_for_path() {
        let transport = FakeTransport::always(200, "{}");
        for _ in 0..3 {
            transport
                .send(&RequestDescriptor::get("/user/me"))
                .await
                .unwrap();
        }
        transport
            .send(&RequestDescriptor::get("/events"))
            .await
            .unwrap();

        assert_eq!(transport.count_for_path("/user/me"), 3);
        assert_eq!(transport.count_for_path("/events"), 1);
        assert_eq!(transport.count_for_path("/orders"), 0);
    }

    #[tokio::test]
    async fn test_handler_sees_attempt_counter() {
        let transport = FakeTransport::new(|request| {
            Box::pin(async move {
                let status = if request.attempt == 0 { 401 } else { 200 };
                Ok(response(status, "{}"))
            })
        });

        let first = transport.send(&RequestDescriptor::get("/orders")).await;
        assert_eq!(first.unwrap().status, 401);

        let replay = transport
            .send(&RequestDescriptor::get("/orders").next_attempt())
            .await;
        assert_eq!(replay.unwrap().status, 200);
    }

    #[test]
    fn test_fake_transport_is_object_safe() {
        let transport = FakeTransport::always(200, "{}");
        let _boxed: Box<dyn Transport> = Box::new(transport);
    }
}
