use thiserror::Error;

#[derive(Error, Debug)]
pub enum CartError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value for '{field}': {value} ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Validation error: {message}")]
    ValidationError { message: String },
}

impl CartError {
    /// 給終端使用者看的簡短訊息
    pub fn user_friendly_message(&self) -> String {
        match self {
            CartError::IoError(e) => format!("Could not access a file: {}", e),
            CartError::SerializationError(_) => "Stored data could not be read or written".to_string(),
            CartError::TomlError(_) => "The configuration file is not valid TOML".to_string(),
            CartError::ConfigError { message } => format!("Configuration problem: {}", message),
            CartError::InvalidConfigValueError { field, reason, .. } => {
                format!("Setting '{}' is invalid: {}", field, reason)
            }
            CartError::ValidationError { message } => message.clone(),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            CartError::IoError(_) => "Check that the storage directory exists and is writable",
            CartError::SerializationError(_) => "Remove the stored cart file to start with an empty cart",
            CartError::TomlError(_) => "Fix the syntax of the configuration file",
            CartError::ConfigError { .. } | CartError::InvalidConfigValueError { .. } => {
                "Review the configuration file and command-line flags"
            }
            CartError::ValidationError { .. } => "Check the input and try again",
        }
    }
}

pub type Result<T> = std::result::Result<T, CartError>;
