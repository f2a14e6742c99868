use crate::core::catalog::Catalog;
use crate::core::persistence::DEFAULT_STORAGE_KEY;
use crate::domain::model::Product;
use crate::utils::error::{CartError, Result};
use crate::utils::validation::{
    validate_non_empty_string, validate_path, validate_range, validate_storage_key, Validate,
};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub storage: StorageConfig,
    pub notification: NotificationConfig,
    pub display: DisplayConfig,
    /// Replaces the built-in catalog when non-empty.
    pub catalog: Vec<Product>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StorageBackend {
    #[default]
    File,
    Memory,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct StorageConfig {
    pub backend: StorageBackend,
    pub path: String,
    pub key: String,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            backend: StorageBackend::File,
            path: "./.small-cart".to_string(),
            key: DEFAULT_STORAGE_KEY.to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct NotificationConfig {
    pub timeout_ms: u64,
}

impl Default for NotificationConfig {
    fn default() -> Self {
        Self { timeout_ms: 1600 }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    pub currency: String,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            currency: "AFN".to_string(),
        }
    }
}

impl AppConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;
        Ok(toml::from_str(&processed_content)?)
    }

    /// 替換環境變數 (例如 ${CART_DIR})，未設定的保留原樣
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| CartError::ConfigError {
            message: format!("Invalid substitution pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    /// The configured catalog, or the built-in one when none is given.
    pub fn catalog(&self) -> Result<Catalog> {
        if self.catalog.is_empty() {
            Ok(Catalog::builtin())
        } else {
            Catalog::new(self.catalog.clone())
        }
    }

    pub fn notification_timeout(&self) -> Duration {
        Duration::from_millis(self.notification.timeout_ms)
    }
}

impl Validate for AppConfig {
    fn validate(&self) -> Result<()> {
        if self.storage.backend == StorageBackend::File {
            validate_path("storage.path", &self.storage.path)?;
        }
        validate_storage_key("storage.key", &self.storage.key)?;
        validate_range("notification.timeout_ms", self.notification.timeout_ms, 100, 60_000)?;
        validate_non_empty_string("display.currency", &self.display.currency)?;
        self.catalog()?.validate()
    }
}
