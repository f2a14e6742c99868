mod common;

use common::{memory_app, quantities, screen, ScriptedPrompt};
use small_cart::core::session::{execute, Command, Flow};
use small_cart::domain::view::ProductView;
use small_cart::{MemoryStore, RecordingNotifier};

async fn run(app: &mut common::TestApp<MemoryStore>, line: &str) -> Flow {
    let command: Command = line.parse().unwrap();
    execute(app, command).await
}

#[tokio::test]
async fn test_search_filters_and_hides_add_controls() {
    let mut app = memory_app(
        MemoryStore::new(),
        RecordingNotifier::new(),
        ScriptedPrompt::default(),
    )
    .await;

    assert_eq!(run(&mut app, "search   linen  ").await, Flow::Continue);
    assert_eq!(app.filter(), "linen");
    assert_eq!(app.product_view().cards().len(), 1);

    // p1 is filtered out, so there is nothing to click
    assert_eq!(
        run(&mut app, "add p1").await,
        Flow::Notice("No visible product 'p1'".to_string())
    );
    assert!(app.store().lines().is_empty());

    run(&mut app, "search").await;
    assert_eq!(app.product_view().cards().len(), 2);
}

#[tokio::test]
async fn test_search_without_matches_shows_placeholder() {
    let mut app = memory_app(
        MemoryStore::new(),
        RecordingNotifier::new(),
        ScriptedPrompt::default(),
    )
    .await;

    run(&mut app, "search hat").await;

    assert_eq!(app.product_view(), &ProductView::NoMatches);
    assert!(screen(&app).contains("No products found."));

    run(&mut app, "enter").await;
    assert!(app.focused().is_none());
    assert_eq!(
        run(&mut app, "press").await,
        Flow::Notice("Nothing is focused".to_string())
    );
}

#[tokio::test]
async fn test_enter_then_press_adds_first_visible_product() {
    let notifier = RecordingNotifier::new();
    let mut app = memory_app(MemoryStore::new(), notifier.clone(), ScriptedPrompt::default()).await;

    run(&mut app, "search shirt").await;
    run(&mut app, "enter").await;
    assert_eq!(
        app.focused().and_then(|c| c.product_id.as_deref()),
        Some("p2")
    );
    assert!(app.store().lines().is_empty());

    run(&mut app, "press").await;

    assert_eq!(quantities(app.store().lines()), vec![("p2", 1)]);
    assert_eq!(notifier.messages(), vec!["Linen Shirt added to cart"]);
}

#[tokio::test]
async fn test_cart_commands() {
    let prompt = ScriptedPrompt::answering(&[true]);
    let mut app = memory_app(MemoryStore::new(), RecordingNotifier::new(), prompt.clone()).await;

    run(&mut app, "add p1").await;
    run(&mut app, "inc p1").await;
    run(&mut app, "inc p1").await;
    run(&mut app, "add p2").await;
    run(&mut app, "dec p1").await;
    assert_eq!(quantities(app.store().lines()), vec![("p1", 2), ("p2", 1)]);
    assert_eq!(run(&mut app, "total").await, Flow::Notice("Total: 6200".to_string()));

    assert_eq!(
        run(&mut app, "inc p9").await,
        Flow::Notice("'p9' is not in the cart".to_string())
    );

    run(&mut app, "rm p2").await;
    assert_eq!(quantities(app.store().lines()), vec![("p1", 2)]);

    run(&mut app, "clear").await;
    assert!(app.store().lines().is_empty());
    assert_eq!(prompt.asked(), 1);

    assert_eq!(run(&mut app, "quit").await, Flow::Quit);
}

#[tokio::test]
async fn test_restart_shows_stored_cart() {
    let store = MemoryStore::new();
    {
        let mut app =
            memory_app(store.clone(), RecordingNotifier::new(), ScriptedPrompt::default()).await;
        run(&mut app, "add p2").await;
        run(&mut app, "add p2").await;
    }

    let app = memory_app(store, RecordingNotifier::new(), ScriptedPrompt::default()).await;

    assert_eq!(app.cart_view().total(), 2400);
    assert!(screen(&app).contains("1200 AFN x 2 = 2400 AFN"));
}
