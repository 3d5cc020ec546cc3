use crate::domain::model::CostCenter;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ViewerError {
    #[error("HTTP request failed: {0}")]
    HttpError(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Config file parse error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error("Cost center index fetch failed with HTTP status {status}")]
    IndexUnavailable { status: u16 },

    #[error("Inventory fetch for cost center {cost_center} failed with HTTP status {status}")]
    DatasetUnavailable { cost_center: CostCenter, status: u16 },

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value for {field}: '{value}' ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing required configuration field: {field}")]
    MissingConfigError { field: String },
}

impl ViewerError {
    pub fn user_friendly_message(&self) -> String {
        match self {
            ViewerError::IndexUnavailable { status } => {
                format!("Could not load the cost center index (HTTP {}).", status)
            }
            ViewerError::DatasetUnavailable {
                cost_center,
                status,
            } => format!(
                "Could not load the inventory for cost center {} (HTTP {}).",
                cost_center, status
            ),
            ViewerError::HttpError(e) => format!("Network request failed: {}", e),
            ViewerError::SerializationError(e) => {
                format!("The fetched data could not be parsed: {}", e)
            }
            other => other.to_string(),
        }
    }

    pub fn recovery_suggestion(&self) -> String {
        match self {
            ViewerError::IndexUnavailable { .. } => {
                "Check that the base URL is correct and the index file is published.".to_string()
            }
            ViewerError::DatasetUnavailable { cost_center, .. } => format!(
                "Check that {}.json exists under the dataset directory.",
                cost_center
            ),
            ViewerError::HttpError(_) => {
                "Check the network connection and the base URL.".to_string()
            }
            ViewerError::SerializationError(_) => {
                "Check that the published JSON matches the expected dataset layout.".to_string()
            }
            ViewerError::TomlError(_) => "Fix the TOML syntax in the config file.".to_string(),
            ViewerError::IoError(_) => "Check file paths and permissions.".to_string(),
            ViewerError::ConfigError { .. }
            | ViewerError::InvalidConfigValueError { .. }
            | ViewerError::MissingConfigError { .. } => {
                "Review the command line flags and the config file.".to_string()
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, ViewerError>;
