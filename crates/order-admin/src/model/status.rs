//! Order status vocabulary and the status filter.
//!
//! The canonical set is `pending`, `dispatch`, `success`, `cancelled`. Documents written by
//! other tools may carry labels outside that set (`confirmed`, `delivered`, or a different
//! capitalisation); those are kept verbatim as [`OrderStatus::Other`] and never match a
//! canonical filter bucket.

use serde::{Deserialize, Serialize};
use std::fmt::Display;

/// Status of an order as stored in the remote document.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum OrderStatus {
    Pending,
    Dispatch,
    Success,
    Cancelled,
    /// A label outside the canonical set, preserved exactly as received.
    Other(String),
}

impl OrderStatus {
    /// Statuses an operator can assign.
    pub const CANONICAL: [OrderStatus; 4] = [
        OrderStatus::Pending,
        OrderStatus::Dispatch,
        OrderStatus::Success,
        OrderStatus::Cancelled,
    ];

    /// Wire value.
    pub fn as_str(&self) -> &str {
        match self {
            OrderStatus::Pending => "pending",
            OrderStatus::Dispatch => "dispatch",
            OrderStatus::Success => "success",
            OrderStatus::Cancelled => "cancelled",
            OrderStatus::Other(label) => label,
        }
    }

    /// Human-facing label used in status pickers.
    pub fn label(&self) -> &str {
        match self {
            OrderStatus::Pending => "Pending",
            OrderStatus::Dispatch => "Dispatch",
            OrderStatus::Success => "Completed",
            OrderStatus::Cancelled => "Cancelled",
            OrderStatus::Other(label) => label,
        }
    }

    pub fn is_canonical(&self) -> bool {
        !matches!(self, OrderStatus::Other(_))
    }
}

impl From<&str> for OrderStatus {
    fn from(value: &str) -> Self {
        match value {
            "pending" => OrderStatus::Pending,
            "dispatch" => OrderStatus::Dispatch,
            "success" => OrderStatus::Success,
            "cancelled" => OrderStatus::Cancelled,
            other => OrderStatus::Other(other.to_string()),
        }
    }
}

impl From<String> for OrderStatus {
    fn from(value: String) -> Self {
        match OrderStatus::from(value.as_str()) {
            OrderStatus::Other(_) => OrderStatus::Other(value),
            known => known,
        }
    }
}

impl From<OrderStatus> for String {
    fn from(status: OrderStatus) -> Self {
        match status {
            OrderStatus::Other(label) => label,
            known => known.as_str().to_string(),
        }
    }
}

impl Display for OrderStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Which orders the list view shows.
///
/// Matching is exact: `Status(Dispatch)` admits only orders whose status is exactly
/// `dispatch`. Orders without a status only appear under `All`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum StatusFilter {
    #[default]
    All,
    Status(OrderStatus),
}

impl StatusFilter {
    pub const ALL_LABEL: &'static str = "All";

    /// Filter tabs offered by the dashboard, in display order.
    pub fn tabs() -> [StatusFilter; 4] {
        [
            StatusFilter::All,
            StatusFilter::Status(OrderStatus::Pending),
            StatusFilter::Status(OrderStatus::Dispatch),
            StatusFilter::Status(OrderStatus::Success),
        ]
    }

    pub fn admits(&self, status: Option<&OrderStatus>) -> bool {
        match self {
            StatusFilter::All => true,
            StatusFilter::Status(wanted) => status == Some(wanted),
        }
    }

    /// Tab caption: the wire value with its first letter upper-cased.
    pub fn label(&self) -> String {
        match self {
            StatusFilter::All => Self::ALL_LABEL.to_string(),
            StatusFilter::Status(status) => {
                let value = status.as_str();
                let mut chars = value.chars();
                match chars.next() {
                    Some(first) => first.to_uppercase().chain(chars).collect(),
                    None => String::new(),
                }
            }
        }
    }
}

impl From<&str> for StatusFilter {
    fn from(value: &str) -> Self {
        if value == Self::ALL_LABEL {
            StatusFilter::All
        } else {
            StatusFilter::Status(OrderStatus::from(value))
        }
    }
}

impl From<String> for StatusFilter {
    fn from(value: String) -> Self {
        StatusFilter::from(value.as_str())
    }
}

impl From<OrderStatus> for StatusFilter {
    fn from(status: OrderStatus) -> Self {
        StatusFilter::Status(status)
    }
}

impl Display for StatusFilter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StatusFilter::All => f.write_str(Self::ALL_LABEL),
            StatusFilter::Status(status) => f.write_str(status.as_str()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_labels_are_preserved() {
        assert_eq!(OrderStatus::from("dispatch"), OrderStatus::Dispatch);
        assert_eq!(
            OrderStatus::from("Dispatch"),
            OrderStatus::Other("Dispatch".to_string())
        );
        assert_eq!(
            OrderStatus::from("confirmed".to_string()).as_str(),
            "confirmed"
        );
    }

    #[test]
    fn test_filter_matches_exactly() {
        let dispatch = StatusFilter::from("dispatch");
        assert!(dispatch.admits(Some(&OrderStatus::Dispatch)));
        assert!(!dispatch.admits(Some(&OrderStatus::Other("confirmed".into()))));
        assert!(!dispatch.admits(Some(&OrderStatus::Other("Dispatch".into()))));
        assert!(!dispatch.admits(None));

        assert!(StatusFilter::from("All").admits(None));
        // only the exact "All" disables filtering
        assert_eq!(
            StatusFilter::from("all"),
            StatusFilter::Status(OrderStatus::Other("all".into()))
        );
    }

    #[test]
    fn test_tab_labels() {
        let labels: Vec<String> = StatusFilter::tabs().iter().map(StatusFilter::label).collect();
        assert_eq!(labels, vec!["All", "Pending", "Dispatch", "Success"]);
        assert_eq!(OrderStatus::Success.label(), "Completed");
    }

    #[test]
    fn test_status_serializes_as_plain_string() {
        let json = serde_json::to_string(&OrderStatus::Cancelled).unwrap();
        assert_eq!(json, "\"cancelled\"");
        let parsed: OrderStatus = serde_json::from_str("\"delivered\"").unwrap();
        assert_eq!(parsed, OrderStatus::Other("delivered".into()));
    }
}
