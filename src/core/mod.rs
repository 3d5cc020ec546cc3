pub mod render;
pub mod session;
pub mod viewer;

pub use crate::domain::model::{CostCenter, InventoryItem};
pub use crate::domain::ports::{ConfigProvider, InventorySource};
pub use crate::utils::error::Result;
