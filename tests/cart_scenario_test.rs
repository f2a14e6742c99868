mod common;

use common::{memory_app, quantities, screen, ScriptedPrompt};
use small_cart::core::router::{Area, UiEvent};
use small_cart::domain::view::CartView;
use small_cart::{MemoryStore, RecordingNotifier};

fn click_add(app: &common::TestApp<MemoryStore>, id: &str) -> UiEvent {
    UiEvent::Click {
        area: Area::Products,
        target: app.product_view().add_control(id).unwrap().clone(),
    }
}

fn click_dec(app: &common::TestApp<MemoryStore>, id: &str) -> UiEvent {
    UiEvent::Click {
        area: Area::Cart,
        target: app.cart_view().rows().iter().find(|r| r.id == id).unwrap().decrement.clone(),
    }
}

/// add p1 twice, p2 once, drop p1 to zero, then clear with confirmation
#[tokio::test]
async fn test_add_change_clear_scenario() {
    let store = MemoryStore::new();
    let notifier = RecordingNotifier::new();
    let prompt = ScriptedPrompt::answering(&[true]);
    let mut app = memory_app(store.clone(), notifier.clone(), prompt.clone()).await;

    let add_p1 = click_add(&app, "p1");
    app.handle(add_p1.clone()).await;
    app.handle(add_p1).await;
    let add_p2 = click_add(&app, "p2");
    app.handle(add_p2).await;

    assert_eq!(quantities(app.store().lines()), vec![("p1", 2), ("p2", 1)]);
    assert_eq!(app.store().calculate_total(), 6200);
    assert_eq!(app.cart_view().total(), 6200);

    let dec = click_dec(&app, "p1");
    app.handle(dec.clone()).await;
    app.handle(dec).await;

    assert_eq!(quantities(app.store().lines()), vec![("p2", 1)]);
    assert_eq!(app.store().calculate_total(), 1200);

    app.handle(UiEvent::ClearRequested).await;

    assert!(app.store().lines().is_empty());
    assert_eq!(app.store().calculate_total(), 0);
    assert_eq!(app.cart_view(), &CartView::Empty);
    assert_eq!(prompt.asked(), 1);

    assert_eq!(
        notifier.messages(),
        vec![
            "Women's Kurti added to cart",
            "Women's Kurti added to cart",
            "Linen Shirt added to cart",
            "Cart cleared",
        ]
    );

    // 3 adds + 2 decrements + 1 clear
    assert_eq!(store.write_count().await, 6);
    assert!(screen(&app).contains("Your cart is empty."));
}

#[tokio::test]
async fn test_declined_clear_leaves_cart_alone() {
    let store = MemoryStore::new();
    let notifier = RecordingNotifier::new();
    let prompt = ScriptedPrompt::answering(&[false]);
    let mut app = memory_app(store.clone(), notifier.clone(), prompt.clone()).await;

    let add = click_add(&app, "p2");
    app.handle(add).await;
    let writes = store.write_count().await;

    app.handle(UiEvent::ClearRequested).await;

    assert_eq!(prompt.asked(), 1);
    assert_eq!(quantities(app.store().lines()), vec![("p2", 1)]);
    assert_eq!(store.write_count().await, writes);
    assert_eq!(notifier.messages(), vec!["Linen Shirt added to cart"]);
}

#[tokio::test]
async fn test_clear_on_empty_cart_asks_nothing() {
    let store = MemoryStore::new();
    let notifier = RecordingNotifier::new();
    let prompt = ScriptedPrompt::answering(&[true]);
    let mut app = memory_app(store.clone(), notifier.clone(), prompt.clone()).await;

    app.handle(UiEvent::ClearRequested).await;

    assert_eq!(prompt.asked(), 0);
    assert_eq!(store.write_count().await, 0);
    assert!(notifier.messages().is_empty());
}

#[tokio::test]
async fn test_remove_and_increment_do_not_notify() {
    let notifier = RecordingNotifier::new();
    let mut app = memory_app(
        MemoryStore::new(),
        notifier.clone(),
        ScriptedPrompt::default(),
    )
    .await;

    let add = click_add(&app, "p1");
    app.handle(add).await;

    let row = app.cart_view().rows()[0].clone();
    app.handle(UiEvent::Click {
        area: Area::Cart,
        target: row.increment.clone(),
    })
    .await;
    assert_eq!(quantities(app.store().lines()), vec![("p1", 2)]);
    assert_eq!(app.cart_view().rows()[0].subtotal, 5000);

    app.handle(UiEvent::Click {
        area: Area::Cart,
        target: row.remove.clone(),
    })
    .await;
    assert!(app.store().lines().is_empty());

    assert_eq!(notifier.messages().len(), 1);
}

#[tokio::test]
async fn test_clicks_for_unknown_products_change_nothing() {
    let store = MemoryStore::new();
    let notifier = RecordingNotifier::new();
    let mut app = memory_app(store.clone(), notifier.clone(), ScriptedPrompt::default()).await;

    let mut ghost = app.product_view().add_control("p1").unwrap().clone();
    ghost.product_id = Some("p404".to_string());
    app.handle(UiEvent::Click {
        area: Area::Products,
        target: ghost,
    })
    .await;

    assert!(app.store().lines().is_empty());
    assert_eq!(store.write_count().await, 0);
    assert!(notifier.messages().is_empty());
}
