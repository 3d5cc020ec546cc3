use crate::domain::model::{CostCenter, InventoryItem};
use crate::utils::error::Result;
use async_trait::async_trait;

#[async_trait]
pub trait InventorySource: Send + Sync {
    /// Fetch the cost center index, sorted ascending.
    async fn fetch_cost_centers(&self) -> Result<Vec<CostCenter>>;

    /// Fetch the full inventory dataset for one cost center.
    async fn fetch_inventory(&self, cost_center: CostCenter) -> Result<Vec<InventoryItem>>;
}

pub trait ConfigProvider: Send + Sync {
    fn base_url(&self) -> &str;
    fn index_file(&self) -> &str;
    fn dataset_dir(&self) -> &str;
    fn timeout_seconds(&self) -> u64;
}
