use crate::domain::model::CartLine;
use crate::domain::ports::KeyValueStore;
use crate::utils::error::{CartError, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

pub const DEFAULT_STORAGE_KEY: &str = "shopping_cart_v1";
pub const SCHEMA_VERSION: u32 = 1;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CartSnapshot {
    pub version: u32,
    pub saved_at: DateTime<Utc>,
    pub lines: Vec<CartLine>,
}

// 舊格式是沒有版本號的陣列，讀取時仍然接受
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum StoredCart {
    Versioned(CartSnapshot),
    Legacy(Vec<CartLine>),
}

/// Serialize cart lines into the current snapshot layout.
pub fn encode(lines: &[CartLine]) -> Result<String> {
    let snapshot = CartSnapshot {
        version: SCHEMA_VERSION,
        saved_at: Utc::now(),
        lines: lines.to_vec(),
    };
    Ok(serde_json::to_string(&snapshot)?)
}

/// Parse a stored value into cart lines.
///
/// Accepts the versioned snapshot and the legacy bare array. Lines with a
/// zero quantity are dropped and repeated ids keep their first occurrence.
pub fn decode(raw: &str) -> Result<Vec<CartLine>> {
    let lines = match serde_json::from_str::<StoredCart>(raw)? {
        StoredCart::Versioned(snapshot) if snapshot.version == SCHEMA_VERSION => snapshot.lines,
        StoredCart::Versioned(snapshot) => {
            return Err(CartError::ValidationError {
                message: format!(
                    "Unsupported cart snapshot version {} (expected {})",
                    snapshot.version, SCHEMA_VERSION
                ),
            })
        }
        StoredCart::Legacy(lines) => lines,
    };

    let mut seen = HashSet::new();
    let total = lines.len();
    let kept: Vec<CartLine> = lines
        .into_iter()
        .filter(|line| line.qty > 0 && seen.insert(line.id.clone()))
        .collect();

    if kept.len() != total {
        tracing::warn!(
            "Dropped {} invalid cart line(s) from stored snapshot",
            total - kept.len()
        );
    }

    Ok(kept)
}

/// Moves the cart between memory and a key-value slot.
#[derive(Debug, Clone)]
pub struct CartPersistence<K: KeyValueStore> {
    store: K,
    key: String,
}

impl<K: KeyValueStore> CartPersistence<K> {
    pub fn new(store: K, key: impl Into<String>) -> Self {
        Self {
            store,
            key: key.into(),
        }
    }

    pub fn with_default_key(store: K) -> Self {
        Self::new(store, DEFAULT_STORAGE_KEY)
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub async fn save(&self, lines: &[CartLine]) -> Result<()> {
        let payload = encode(lines)?;
        self.store.set(&self.key, &payload).await
    }

    /// Load the stored cart. Missing, unreadable or malformed data all yield
    /// an empty cart.
    pub async fn load(&self) -> Vec<CartLine> {
        let raw = match self.store.get(&self.key).await {
            Ok(Some(raw)) => raw,
            Ok(None) => {
                tracing::debug!("No stored cart under '{}'", self.key);
                return Vec::new();
            }
            Err(e) => {
                tracing::warn!("Could not read stored cart '{}': {}", self.key, e);
                return Vec::new();
            }
        };

        match decode(&raw) {
            Ok(lines) => lines,
            Err(e) => {
                tracing::warn!("Ignoring malformed stored cart '{}': {}", self.key, e);
                Vec::new()
            }
        }
    }
}
