//! Read-only projections rendered by the dashboard.

use crate::model::{ItemImage, Order, OrderId, OrderStatus};
use serde::Serialize;

/// One line of the order table.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OrderRow {
    pub id: OrderId,
    pub name: String,
    pub placed_on: String,
    pub address: String,
    pub email: String,
    /// Total prefixed with `$`.
    pub total: String,
    pub status: Option<OrderStatus>,
}

impl From<&Order> for OrderRow {
    fn from(order: &Order) -> Self {
        Self {
            id: order.id.clone(),
            name: order.name.clone(),
            placed_on: order.placed_on(),
            address: order.address.clone(),
            email: order.email.clone(),
            total: format!("${}", order.total),
            status: order.status.clone(),
        }
    }
}

/// A line item with its placeholders resolved.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ItemLine {
    pub name: String,
    pub image: ItemImage,
}

/// Everything the detail panel shows for the selected order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OrderDetail {
    pub id: OrderId,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub address: String,
    pub payment_method: String,
    pub total: String,
    pub status: Option<OrderStatus>,
    pub items: Vec<ItemLine>,
}

impl From<&Order> for OrderDetail {
    fn from(order: &Order) -> Self {
        Self {
            id: order.id.clone(),
            name: order.name.clone(),
            email: order.email.clone(),
            phone: order.phone.clone(),
            address: order.address.clone(),
            payment_method: order.payment_method.clone(),
            total: format!("${}", order.total),
            status: order.status.clone(),
            items: order
                .items
                .iter()
                .map(|item| ItemLine {
                    name: item.display_name().to_string(),
                    image: item.image(),
                })
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{LineItem, NO_IMAGE, UNKNOWN_PRODUCT};

    #[test]
    fn test_row_formats_total_and_date() {
        let mut order = Order::new("ord-1", Some(OrderStatus::Pending));
        order.total = "19.99".into();
        order.order_date = Some("2025-03-01T08:00:00Z".into());

        let row = OrderRow::from(&order);
        assert_eq!(row.total, "$19.99");
        assert_eq!(row.placed_on, "2025-03-01");
    }

    #[test]
    fn test_detail_resolves_item_placeholders() {
        let mut order = Order::new("ord-2", None);
        order.items = vec![
            LineItem::new("Pizza", "https://cdn.example/pizza.png"),
            LineItem::default(),
        ];

        let detail = OrderDetail::from(&order);
        assert_eq!(detail.items[0].name, "Pizza");
        assert_eq!(detail.items[1].name, UNKNOWN_PRODUCT);
        assert_eq!(detail.items[1].image, ItemImage::Unavailable);
        assert_eq!(detail.items[1].image.to_string(), NO_IMAGE);
    }
}
