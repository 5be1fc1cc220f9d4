//! Order endpoints

use uuid::Uuid;

use crate::client::ApiClient;
use crate::envelope::Envelope;
use crate::error::ApiError;
use crate::models::{CreateOrderRequest, Order};

/// Typed wrapper over the order endpoints. All of them require an
/// authenticated session; on an expired credential the coordinator renews
/// transparently underneath these calls.
#[derive(Debug, Clone)]
pub struct OrdersApi {
    client: ApiClient,
}

impl OrdersApi {
    pub fn new(client: ApiClient) -> Self {
        Self { client }
    }

    /// Places an order. The returned order carries the payment URL when the
    /// service created a checkout session.
    pub async fn create(&self, request: &CreateOrderRequest) -> Result<Envelope<Order>, ApiError> {
        self.client.post("/orders", request).await
    }

    /// Lists the current user's orders.
    pub async fn list_mine(&self) -> Result<Envelope<Vec<Order>>, ApiError> {
        self.client.get("/orders/me").await
    }

    /// Fetches one order.
    pub async fn detail(&self, id: Uuid) -> Result<Envelope<Order>, ApiError> {
        self.client.get(&format!("/orders/{}", id)).await
    }

    /// Cancels a pending order.
    pub async fn cancel(&self, id: Uuid) -> Result<Envelope<Order>, ApiError> {
        self.client
            .delete(&format!("/orders/{}", id))
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use crate::config::ClientConfig;
    use crate::session::NullNavigator;
    use crate::transport::fake::FakeTransport;
    use crate::transport::Method;

    #[tokio::test]
    async fn test_create_posts_wire_shape() {
        let transport = Arc::new(FakeTransport::always(
            200,
            r#"{"success":true,"message":"created","data":null}"#,
        ));
        let client = ApiClient::with_transport(
            ClientConfig::default(),
            transport.clone(),
            Arc::new(NullNavigator),
        );
        let api = OrdersApi::new(client);

        let result = api
            .create(&CreateOrderRequest {
                event_id: Uuid::nil(),
                order_details: vec![],
                fullname: "Ana Widodo".to_string(),
                email: "ana@example.com".to_string(),
                phone: "+62811111111".to_string(),
            })
            .await;
        assert!(result.is_ok());

        let requests = transport.requests();
        assert_eq!(requests[0].method, Method::Post);
        assert_eq!(requests[0].path, "/orders");
        assert!(requests[0].body.as_ref().unwrap()["orderDetails"].is_array());
    }
}
