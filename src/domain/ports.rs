use crate::domain::view::{CartView, Control, ProductView};
use crate::utils::error::Result;
use async_trait::async_trait;

/// Durable string slots addressed by key.
pub trait KeyValueStore: Send + Sync {
    fn get(&self, key: &str) -> impl std::future::Future<Output = Result<Option<String>>> + Send;
    fn set(&self, key: &str, value: &str) -> impl std::future::Future<Output = Result<()>> + Send;
}

/// Where rendered views end up. Each call replaces what was shown before.
pub trait Surface: Send {
    fn show_products(&mut self, view: &ProductView);
    fn show_cart(&mut self, view: &CartView);
    fn show_focus(&mut self, control: Option<&Control>);
}

/// Fire-and-forget toast messages.
pub trait Notifier: Send + Sync {
    fn notify(&self, message: &str);
}

#[async_trait]
pub trait Prompt: Send {
    /// Ask a yes/no question. Only `true` lets the caller proceed.
    async fn confirm(&mut self, message: &str) -> bool;
}
