#![allow(dead_code)]

use async_trait::async_trait;
use small_cart::core::Prompt;
use small_cart::domain::model::Product;
use small_cart::{
    CartPersistence, CartStore, Catalog, MemoryStore, RecordingNotifier, ShopApp, TerminalSurface,
};
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

/// Answers confirmations from a fixed script and counts the questions.
#[derive(Clone, Default)]
pub struct ScriptedPrompt {
    answers: Arc<Mutex<VecDeque<bool>>>,
    asked: Arc<Mutex<usize>>,
}

impl ScriptedPrompt {
    pub fn answering(answers: &[bool]) -> Self {
        Self {
            answers: Arc::new(Mutex::new(answers.iter().copied().collect())),
            asked: Arc::new(Mutex::new(0)),
        }
    }

    pub fn asked(&self) -> usize {
        *self.asked.lock().unwrap()
    }
}

#[async_trait]
impl Prompt for ScriptedPrompt {
    async fn confirm(&mut self, _message: &str) -> bool {
        *self.asked.lock().unwrap() += 1;
        self.answers.lock().unwrap().pop_front().unwrap_or(false)
    }
}

pub type TestApp<K> = ShopApp<K, TerminalSurface<Vec<u8>>, RecordingNotifier, ScriptedPrompt>;

pub fn two_product_catalog() -> Arc<Catalog> {
    Arc::new(
        Catalog::new(vec![
            Product::new("p1", "Women's Kurti", 2500, "https://example.com/p1.jpg"),
            Product::new("p2", "Linen Shirt", 1200, "https://example.com/p2.jpg"),
        ])
        .unwrap(),
    )
}

pub async fn memory_app(
    store: MemoryStore,
    notifier: RecordingNotifier,
    prompt: ScriptedPrompt,
) -> TestApp<MemoryStore> {
    let cart = CartStore::open(
        two_product_catalog(),
        CartPersistence::with_default_key(store),
    )
    .await;
    let mut app = ShopApp::new(cart, TerminalSurface::new(Vec::new(), "AFN"), notifier, prompt);
    app.start();
    app
}

pub fn screen<K: small_cart::core::KeyValueStore>(app: &TestApp<K>) -> String {
    String::from_utf8_lossy(app.surface().output()).to_string()
}

pub fn quantities(lines: &[small_cart::domain::model::CartLine]) -> Vec<(&str, u32)> {
    lines.iter().map(|l| (l.id.as_str(), l.qty)).collect()
}
