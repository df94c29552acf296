use mirror_framework::mock::MockMirror;
use mirror_framework::FrameworkError;
use order_admin::auth::{ConfiguredCredentials, Session};
use order_admin::board::{
    self, BoardError, DeleteOutcome, OrderBoard, DELETE_FAILED, DELETE_SUCCEEDED, STATUS_FAILED,
};
use order_admin::config::{AdminCredentials, Secret};
use order_admin::model::{ItemImage, LineItem, Order, OrderId, OrderStatus, StatusFilter};
use order_admin::notify::{AutoConfirm, ChannelNotifier, Notice, NoticeLevel};
use order_admin::store::{MockStore, StoreCall, StoreError};
use std::sync::Arc;
use tokio::sync::mpsc::UnboundedReceiver;
use tokio::sync::Notify;

fn session() -> Session {
    let policy = ConfiguredCredentials::from(AdminCredentials {
        email: "ops@example.com".into(),
        password: Secret::new("pw"),
    });
    Session::login(&policy, "ops@example.com", "pw").unwrap()
}

fn order(id: &str, status: OrderStatus) -> Order {
    let mut order = Order::new(id, Some(status));
    order.name = format!("Customer {id}");
    order.total = "10.00".into();
    order
}

fn ids(orders: &[Order]) -> Vec<&str> {
    orders.iter().map(|o| o.id.as_str()).collect()
}

fn server_error() -> StoreError {
    StoreError::Status {
        status: 500,
        body: "internal".into(),
    }
}

/// Board over a live mirror actor.
fn live_board(store: Arc<MockStore>, confirm: bool) -> (OrderBoard, UnboundedReceiver<Notice>) {
    let (actor, mirror) = board::new_mirror();
    tokio::spawn(actor.run());
    let (notifier, notices) = ChannelNotifier::new();
    let board = OrderBoard::new(
        session(),
        mirror,
        store,
        Arc::new(notifier),
        Arc::new(AutoConfirm(confirm)),
    );
    (board, notices)
}

async fn loaded(store: &Arc<MockStore>, orders: Vec<Order>, confirm: bool) -> (OrderBoard, UnboundedReceiver<Notice>) {
    store.expect_fetch().return_ok(orders);
    let (board, notices) = live_board(store.clone(), confirm);
    board.load().await.unwrap();
    (board, notices)
}

#[tokio::test]
async fn test_filter_change_and_delete_scenario() {
    let store = Arc::new(MockStore::new());
    let (board, mut notices) = loaded(
        &store,
        vec![order("1", OrderStatus::Pending), order("2", OrderStatus::Dispatch)],
        true,
    )
    .await;

    board.set_filter("dispatch").await.unwrap();
    assert_eq!(ids(&board.filtered_orders().await.unwrap()), vec!["2"]);

    store.expect_set_status("1").return_ok(());
    board
        .change_status(&OrderId::from("1"), OrderStatus::Success)
        .await
        .unwrap();
    let orders = board.orders().await.unwrap();
    assert_eq!(ids(&orders), vec!["1", "2"]);
    assert_eq!(orders[0].status, Some(OrderStatus::Success));
    assert_eq!(orders[1].status, Some(OrderStatus::Dispatch));
    assert_eq!(
        notices.recv().await,
        Some(Notice::success("Status updated to success"))
    );

    store.expect_delete("2").return_ok(());
    let outcome = board.delete_order(&OrderId::from("2")).await.unwrap();
    assert_eq!(outcome, DeleteOutcome::Deleted);
    let orders = board.orders().await.unwrap();
    assert_eq!(ids(&orders), vec!["1"]);
    assert_eq!(orders[0].status, Some(OrderStatus::Success));
    assert_eq!(notices.recv().await, Some(Notice::success(DELETE_SUCCEEDED)));

    assert_eq!(
        store.calls(),
        vec![
            StoreCall::Fetch,
            StoreCall::SetStatus(OrderId::from("1"), OrderStatus::Success),
            StoreCall::Delete(OrderId::from("2")),
        ]
    );
    store.verify();
}

#[tokio::test]
async fn test_filtered_orders_preserves_order_and_is_repeatable() {
    let store = Arc::new(MockStore::new());
    let (board, _notices) = loaded(
        &store,
        vec![
            order("a", OrderStatus::Pending),
            order("b", OrderStatus::Success),
            order("c", OrderStatus::Pending),
            order("d", OrderStatus::from("confirmed")),
        ],
        true,
    )
    .await;

    assert_eq!(ids(&board.filtered_orders().await.unwrap()), vec!["a", "b", "c", "d"]);

    board.set_filter(OrderStatus::Pending).await.unwrap();
    let first = board.filtered_orders().await.unwrap();
    let second = board.filtered_orders().await.unwrap();
    assert_eq!(ids(&first), vec!["a", "c"]);
    assert_eq!(first, second);

    board.set_filter(StatusFilter::ALL_LABEL).await.unwrap();
    assert_eq!(board.rows().await.unwrap().len(), 4);

    // Case-sensitive: "Pending" is not "pending".
    board.set_filter("Pending").await.unwrap();
    assert!(board.filtered_orders().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_failed_status_change_leaves_mirror_unchanged() {
    let store = Arc::new(MockStore::new());
    let (board, mut notices) =
        loaded(&store, vec![order("1", OrderStatus::Pending)], true).await;
    let before = board.orders().await.unwrap();

    store.expect_set_status("1").return_err(server_error());
    let result = board
        .change_status(&OrderId::from("1"), OrderStatus::Dispatch)
        .await;

    assert!(matches!(
        result,
        Err(BoardError::Store(StoreError::Status { status: 500, .. }))
    ));
    assert_eq!(board.orders().await.unwrap(), before);
    assert_eq!(notices.recv().await, Some(Notice::error(STATUS_FAILED)));
    store.verify();
}

#[tokio::test]
async fn test_failed_delete_leaves_mirror_unchanged() {
    let store = Arc::new(MockStore::new());
    let (board, mut notices) = loaded(
        &store,
        vec![order("1", OrderStatus::Pending), order("2", OrderStatus::Dispatch)],
        true,
    )
    .await;
    let before = board.orders().await.unwrap();

    store.expect_delete("2").return_err(server_error());
    let result = board.delete_order(&OrderId::from("2")).await;

    assert!(matches!(result, Err(BoardError::Store(_))));
    assert_eq!(board.orders().await.unwrap(), before);
    let notice = notices.recv().await.unwrap();
    assert_eq!(notice.level, NoticeLevel::Error);
    assert_eq!(notice.message, DELETE_FAILED);
}

#[tokio::test]
async fn test_failed_load_keeps_previous_mirror() {
    let store = Arc::new(MockStore::new());
    let (board, _notices) = loaded(&store, vec![order("1", OrderStatus::Pending)], true).await;

    store.expect_fetch().return_err(server_error());
    assert!(matches!(board.load().await, Err(BoardError::Store(_))));
    assert_eq!(ids(&board.orders().await.unwrap()), vec!["1"]);

    store.expect_fetch().return_ok(vec![order("9", OrderStatus::Dispatch)]);
    assert_eq!(board.load().await.unwrap(), 1);
    assert_eq!(ids(&board.orders().await.unwrap()), vec!["9"]);
    store.verify();
}

#[tokio::test]
async fn test_load_drops_duplicate_ids() {
    let store = Arc::new(MockStore::new());
    store.expect_fetch().return_ok(vec![
        order("1", OrderStatus::Pending),
        order("1", OrderStatus::Success),
        order("2", OrderStatus::Dispatch),
    ]);
    let (board, _notices) = live_board(store.clone(), true);

    assert_eq!(board.load().await.unwrap(), 2);
    let orders = board.orders().await.unwrap();
    assert_eq!(ids(&orders), vec!["1", "2"]);
    assert_eq!(orders[0].status, Some(OrderStatus::Pending));
}

#[tokio::test]
async fn test_declined_confirmation_makes_no_remote_call() {
    let store = Arc::new(MockStore::new());
    let (board, mut notices) = loaded(&store, vec![order("1", OrderStatus::Pending)], false).await;

    let outcome = board.delete_order(&OrderId::from("1")).await.unwrap();

    assert_eq!(outcome, DeleteOutcome::Declined);
    assert_eq!(store.calls(), vec![StoreCall::Fetch]);
    assert_eq!(ids(&board.orders().await.unwrap()), vec!["1"]);
    assert!(notices.try_recv().is_err());
}

#[tokio::test]
async fn test_selection_and_detail() {
    let store = Arc::new(MockStore::new());
    let mut with_items = order("1", OrderStatus::Pending);
    with_items.phone = "555-0100".into();
    with_items.items = vec![
        LineItem::new("Burger", "https://cdn.example/burger.png"),
        LineItem {
            name: Some("Shake".into()),
            image_url: None,
        },
    ];
    let (board, _notices) = loaded(&store, vec![with_items, order("2", OrderStatus::Dispatch)], true).await;

    assert!(!board.detail_visible().await.unwrap());
    assert!(board.detail().await.unwrap().is_none());

    board.select_for_detail(&OrderId::from("1")).await.unwrap();
    assert!(board.detail_visible().await.unwrap());
    let detail = board.detail().await.unwrap().unwrap();
    assert_eq!(detail.phone, "555-0100");
    assert_eq!(detail.total, "$10.00");
    assert_eq!(detail.items.len(), 2);
    assert_eq!(detail.items[1].name, "Shake");
    assert_eq!(detail.items[1].image, ItemImage::Unavailable);

    // An unknown id is accepted but shows nothing.
    board.select_for_detail(&OrderId::from("missing")).await.unwrap();
    assert!(board.detail_visible().await.unwrap());
    assert!(board.detail().await.unwrap().is_none());

    board.clear_selection().await.unwrap();
    assert!(!board.detail_visible().await.unwrap());
}

#[tokio::test]
async fn test_detail_follows_status_change_and_delete() {
    let store = Arc::new(MockStore::new());
    let (board, _notices) = loaded(&store, vec![order("1", OrderStatus::Pending)], true).await;
    board.select_for_detail(&OrderId::from("1")).await.unwrap();

    store.expect_set_status("1").return_ok(());
    board
        .change_status(&OrderId::from("1"), OrderStatus::Cancelled)
        .await
        .unwrap();
    let detail = board.detail().await.unwrap().unwrap();
    assert_eq!(detail.status, Some(OrderStatus::Cancelled));

    store.expect_delete("1").return_ok(());
    board.delete_order(&OrderId::from("1")).await.unwrap();
    assert!(board.detail().await.unwrap().is_none());
}

#[tokio::test]
async fn test_mutations_on_different_ids_complete_in_either_order() {
    let store = Arc::new(MockStore::new());
    let (board, _notices) = loaded(
        &store,
        vec![order("1", OrderStatus::Pending), order("2", OrderStatus::Pending)],
        true,
    )
    .await;

    let gate = Arc::new(Notify::new());
    store.expect_delete("1").gated(gate.clone()).return_ok(());
    store.expect_set_status("2").return_ok(());

    let slow_delete = tokio::spawn({
        let board = board.clone();
        async move { board.delete_order(&OrderId::from("1")).await }
    });

    board
        .change_status(&OrderId::from("2"), OrderStatus::Dispatch)
        .await
        .unwrap();
    assert_eq!(ids(&board.orders().await.unwrap()), vec!["1", "2"]);

    gate.notify_one();
    assert_eq!(slow_delete.await.unwrap().unwrap(), DeleteOutcome::Deleted);

    let orders = board.orders().await.unwrap();
    assert_eq!(ids(&orders), vec!["2"]);
    assert_eq!(orders[0].status, Some(OrderStatus::Dispatch));
    store.verify();
}

#[tokio::test]
async fn test_acknowledgement_for_deleted_order_is_ignored() {
    let store = Arc::new(MockStore::new());
    let (board, mut notices) = loaded(&store, vec![order("1", OrderStatus::Pending)], true).await;

    let gate = Arc::new(Notify::new());
    store.expect_set_status("1").gated(gate.clone()).return_ok(());
    store.expect_delete("1").return_ok(());

    let slow_update = tokio::spawn({
        let board = board.clone();
        async move {
            board
                .change_status(&OrderId::from("1"), OrderStatus::Success)
                .await
        }
    });

    board.delete_order(&OrderId::from("1")).await.unwrap();
    gate.notify_one();

    assert!(slow_update.await.unwrap().is_ok());
    assert!(board.orders().await.unwrap().is_empty());
    assert_eq!(notices.recv().await, Some(Notice::success(DELETE_SUCCEEDED)));
    assert_eq!(
        notices.recv().await,
        Some(Notice::success("Status updated to success"))
    );
}

#[tokio::test]
async fn test_mirror_failures_surface_as_communication_errors() {
    let store = Arc::new(MockStore::new());
    let mut mirror = MockMirror::<Order>::new();
    let (notifier, _notices) = ChannelNotifier::new();
    let board = OrderBoard::new(
        session(),
        mirror.client(),
        store.clone(),
        Arc::new(notifier),
        Arc::new(AutoConfirm(true)),
    );

    store.expect_fetch().return_ok(vec![order("1", OrderStatus::Pending)]);
    mirror.expect_replace().return_err(FrameworkError::ActorClosed);
    assert!(matches!(
        board.load().await,
        Err(BoardError::ActorCommunicationError(_))
    ));

    store.expect_set_status("1").return_ok(());
    mirror
        .expect_update(OrderId::from("1"))
        .return_err(FrameworkError::ActorDropped);
    assert!(matches!(
        board
            .change_status(&OrderId::from("1"), OrderStatus::Dispatch)
            .await,
        Err(BoardError::ActorCommunicationError(_))
    ));

    mirror.verify();
    store.verify();
}
