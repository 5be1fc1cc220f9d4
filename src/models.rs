//! Domain types for the Eventa ticketing API
//!
//! Request and response DTOs shared by the typed endpoint wrappers in
//! [`crate::api`]. Field names follow the service's camelCase wire format;
//! timestamps are RFC-3339 strings handled by `chrono`, identifiers are
//! UUIDs.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Role of an authenticated user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
    Moderator,
    User,
}

/// The authenticated identity held by the credential store.
///
/// Returned by the login, current-user, and session-renewal endpoints.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    pub id: Uuid,
    pub email: String,
    pub fullname: String,
    #[serde(default)]
    pub avatar: Option<String>,
    pub role: Role,
    #[serde(default)]
    pub balance: Option<i64>,
    pub joined_at: DateTime<Utc>,
}

/// Login request body.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub remember_me: Option<bool>,
}

/// Registration request body.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegisterRequest {
    pub email: String,
    pub fullname: String,
    pub password: String,
}

/// Password change request body.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChangePasswordRequest {
    pub current_password: String,
    pub new_password: String,
    pub confirm_password: String,
}

/// Profile update request body.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateProfileRequest {
    pub fullname: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar_url: Option<String>,
}

/// Lifecycle status of an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EventStatus {
    Active,
    Ongoing,
    Done,
    Cancelled,
}

/// One event as returned by the listing endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventSummary {
    pub id: Uuid,
    pub title: String,
    pub image: String,
    pub description: String,
    pub location: String,
    pub is_available: bool,
    pub start_price: i64,
    pub start_time: u32,
    pub end_time: u32,
    pub date: DateTime<Utc>,
    pub status: EventStatus,
    pub created_at: DateTime<Utc>,
}

/// One event with its ticket classes, as returned by the detail endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventDetail {
    pub id: Uuid,
    pub title: String,
    pub image: String,
    pub description: String,
    pub location: String,
    pub is_available: bool,
    pub start_price: i64,
    pub start_time: u32,
    pub end_time: u32,
    pub date: DateTime<Utc>,
    pub status: EventStatus,
    #[serde(default)]
    pub tickets: Vec<TicketType>,
    pub created_at: DateTime<Utc>,
}

/// A purchasable ticket class within an event.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TicketType {
    pub id: Uuid,
    pub name: String,
    pub price: i64,
    pub sold: u32,
    pub quota: u32,
    #[serde(default)]
    pub limit: Option<u32>,
    pub is_refundable: bool,
    #[serde(default)]
    pub refund_percent: Option<u8>,
    pub created_at: DateTime<Utc>,
}

/// One line of an order request: which ticket class and how many.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderLine {
    pub ticket_id: Uuid,
    pub quantity: u32,
}

/// Order creation request body.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateOrderRequest {
    pub event_id: Uuid,
    pub order_details: Vec<OrderLine>,
    pub fullname: String,
    pub email: String,
    pub phone: String,
}

/// Payment status of an order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    Pending,
    Paid,
    Cancelled,
    Refunded,
}

/// One order as returned by the order endpoints.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub id: Uuid,
    pub event_id: Uuid,
    pub event_name: String,
    #[serde(default)]
    pub event_image: Option<String>,
    pub fullname: String,
    pub email: String,
    pub phone: String,
    #[serde(default)]
    pub payment_url: Option<String>,
    pub total_price: i64,
    pub status: OrderStatus,
    pub created_at: DateTime<Utc>,
}

/// Query parameters accepted by the event listing endpoint.
///
/// Serialized with `serde_urlencoded` semantics by the caller; fields that
/// are `None` are omitted.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EventQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<EventStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u32>,
}
