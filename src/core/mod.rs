pub mod cart_store;
pub mod catalog;
pub mod persistence;
pub mod renderer;
pub mod router;
pub mod session;
pub mod shop;

pub use crate::domain::model::{CartChange, CartLine, Product};
pub use crate::domain::ports::{KeyValueStore, Notifier, Prompt, Surface};
pub use crate::utils::error::Result;
