pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use adapters::http::HttpInventorySource;
pub use config::{CliConfig, FileConfig, Settings};
pub use core::viewer::Viewer;
pub use domain::model::{CostCenter, InventoryItem};
pub use utils::error::{Result, ViewerError};
