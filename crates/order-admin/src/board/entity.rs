use crate::model::{Order, OrderId, OrderUpdate, StatusFilter};
use mirror_framework::MirrorEntity;
use std::convert::Infallible;

/// Implementation of the mirror contract for orders.
///
/// - **Filter**: [`StatusFilter`]. `All` (the default) admits every order.
/// - **Update**: [`OrderUpdate::Status`] replaces `status` and leaves every other field alone.
///   It cannot fail, hence `Infallible`.
impl MirrorEntity for Order {
    type Id = OrderId;
    type Update = OrderUpdate;
    type Filter = StatusFilter;
    type Error = Infallible;

    fn id(&self) -> &OrderId {
        &self.id
    }

    fn matches(&self, filter: &StatusFilter) -> bool {
        filter.admits(self.status.as_ref())
    }

    fn apply(&mut self, update: OrderUpdate) -> Result<(), Infallible> {
        match update {
            OrderUpdate::Status(status) => self.status = Some(status),
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{LineItem, OrderStatus};

    #[test]
    fn test_status_update_touches_only_status() {
        let mut order = Order::new("ord-1", Some(OrderStatus::Pending));
        order.name = "Bilal".into();
        order.total = "12.00".into();
        order.items.push(LineItem::new("Fries", "https://cdn.example/fries.png"));
        let before = order.clone();

        order.apply(OrderUpdate::Status(OrderStatus::Dispatch)).unwrap();

        assert_eq!(order.status, Some(OrderStatus::Dispatch));
        order.status = before.status.clone();
        assert_eq!(order, before);
    }

    #[test]
    fn test_unknown_labels_fall_out_of_canonical_buckets() {
        for label in ["confirmed", "Dispatch", "delivered"] {
            let order = Order::new("ord-x", Some(OrderStatus::from(label)));
            assert!(order.matches(&StatusFilter::All));
            for tab in StatusFilter::tabs().into_iter().skip(1) {
                assert!(!order.matches(&tab), "{label} matched {tab:?}");
            }
        }
    }

    #[test]
    fn test_missing_status_only_under_all() {
        let order = Order::new("ord-y", None);
        assert!(order.matches(&StatusFilter::All));
        assert!(!order.matches(&StatusFilter::from("pending")));
    }
}
