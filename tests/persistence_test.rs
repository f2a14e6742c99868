mod common;

use common::{quantities, two_product_catalog};
use small_cart::core::persistence::DEFAULT_STORAGE_KEY;
use small_cart::{CartPersistence, CartStore, FileStore};
use tempfile::TempDir;

#[tokio::test]
async fn test_cart_survives_restart() {
    let temp_dir = TempDir::new().unwrap();

    {
        let persistence = CartPersistence::with_default_key(FileStore::new(temp_dir.path()));
        let mut cart = CartStore::open(two_product_catalog(), persistence).await;
        cart.add_to_cart("p2").await;
        cart.add_to_cart("p1").await;
        cart.add_to_cart("p2").await;
    }

    let stored = temp_dir.path().join(format!("{}.json", DEFAULT_STORAGE_KEY));
    assert!(stored.exists());

    let persistence = CartPersistence::with_default_key(FileStore::new(temp_dir.path()));
    let reopened = CartStore::open(two_product_catalog(), persistence).await;

    assert_eq!(quantities(reopened.lines()), vec![("p2", 2), ("p1", 1)]);
    assert_eq!(reopened.calculate_total(), 2 * 1200 + 2500);
}

#[tokio::test]
async fn test_cleared_cart_reloads_empty() {
    let temp_dir = TempDir::new().unwrap();
    let persistence = CartPersistence::new(FileStore::new(temp_dir.path()), "cart");
    let mut cart = CartStore::open(two_product_catalog(), persistence.clone()).await;
    cart.add_to_cart("p1").await;
    cart.clear_cart().await;

    let reopened = CartStore::open(two_product_catalog(), persistence).await;
    assert!(reopened.is_empty());
}

#[tokio::test]
async fn test_malformed_file_starts_empty_and_is_replaced() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("shopping_cart_v1.json");
    tokio::fs::write(&path, "this is not json").await.unwrap();

    let persistence = CartPersistence::with_default_key(FileStore::new(temp_dir.path()));
    let mut cart = CartStore::open(two_product_catalog(), persistence).await;
    assert!(cart.is_empty());

    cart.add_to_cart("p1").await;

    let raw = tokio::fs::read_to_string(&path).await.unwrap();
    let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
    assert_eq!(value["version"], 1);
    assert_eq!(value["lines"][0]["id"], "p1");
}

#[tokio::test]
async fn test_legacy_array_file_is_loaded() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("shopping_cart_v1.json");
    tokio::fs::write(
        &path,
        r#"[{"id":"p1","name":"Old Kurti","price":2000,"qty":3}]"#,
    )
    .await
    .unwrap();

    let persistence = CartPersistence::with_default_key(FileStore::new(temp_dir.path()));
    let mut cart = CartStore::open(two_product_catalog(), persistence).await;

    assert_eq!(cart.lines()[0].name, "Old Kurti");
    assert_eq!(cart.calculate_total(), 6000);

    // 舊的價格快照保留
    cart.add_to_cart("p1").await;
    assert_eq!(cart.lines()[0].price, 2000);
    assert_eq!(cart.lines()[0].qty, 4);
}
