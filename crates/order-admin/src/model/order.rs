use crate::model::wire;
use crate::model::{LineItem, OrderStatus};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Identifier assigned by the remote store (`_id`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct OrderId(pub String);

impl OrderId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for OrderId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl From<String> for OrderId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl Display for OrderId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Represents a customer order mirrored from the remote store.
///
/// # Mirror Framework
/// This struct implements the [`MirrorEntity`](mirror_framework::MirrorEntity) trait,
/// allowing it to be held by a [`MirrorActor`](mirror_framework::MirrorActor).
///
/// See [`impl MirrorEntity for Order`](#impl-MirrorEntity-for-Order) for details on:
/// - Update payloads ([`OrderUpdate`])
/// - Filtering ([`StatusFilter`](crate::model::StatusFilter))
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    #[serde(rename = "_id")]
    pub id: OrderId,
    #[serde(default, deserialize_with = "wire::nullable_text")]
    pub name: String,
    #[serde(default, deserialize_with = "wire::nullable_text")]
    pub email: String,
    #[serde(default, deserialize_with = "wire::nullable_text")]
    pub address: String,
    #[serde(default, deserialize_with = "wire::text_or_number")]
    pub phone: String,
    #[serde(default, deserialize_with = "wire::nullable_text")]
    pub payment_method: String,
    /// Decimal amount as text, exactly as stored.
    #[serde(default, deserialize_with = "wire::text_or_number")]
    pub total: String,
    /// ISO-8601 timestamp as stored; see [`Order::placed_at`].
    #[serde(default)]
    pub order_date: Option<String>,
    #[serde(default)]
    pub status: Option<OrderStatus>,
    #[serde(default, deserialize_with = "wire::line_items")]
    pub items: Vec<LineItem>,
}

/// An acknowledged change to one mirrored order.
#[derive(Debug, Clone, PartialEq)]
pub enum OrderUpdate {
    /// Replace the status and nothing else.
    Status(OrderStatus),
}

impl Order {
    /// Creates an order with only identity and status set.
    ///
    /// Remote documents are normally decoded from JSON; this is for callers that build
    /// orders by hand (fixtures, demos).
    pub fn new(id: impl Into<OrderId>, status: Option<OrderStatus>) -> Self {
        Self {
            id: id.into(),
            name: String::new(),
            email: String::new(),
            address: String::new(),
            phone: String::new(),
            payment_method: String::new(),
            total: String::new(),
            order_date: None,
            status,
            items: Vec::new(),
        }
    }

    /// Order timestamp, when present and well-formed.
    pub fn placed_at(&self) -> Option<DateTime<Utc>> {
        let raw = self.order_date.as_deref()?;
        DateTime::parse_from_rfc3339(raw)
            .ok()
            .map(|date| date.with_timezone(&Utc))
    }

    /// Calendar date for list display; falls back to the raw value when it does not parse.
    pub fn placed_on(&self) -> String {
        match (self.placed_at(), self.order_date.as_deref()) {
            (Some(date), _) => date.format("%Y-%m-%d").to_string(),
            (None, Some(raw)) => raw.to_string(),
            (None, None) => String::new(),
        }
    }
}
