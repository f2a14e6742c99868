pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use crate::config::CliArgs;
pub use crate::config::{AppConfig, StorageBackend};

pub use crate::adapters::{FileStore, MemoryStore, RecordingNotifier, TerminalSurface, ToastNotifier};
pub use crate::core::{
    cart_store::CartStore, catalog::Catalog, persistence::CartPersistence, shop::ShopApp,
};
pub use crate::utils::error::{CartError, Result};
