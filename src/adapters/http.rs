use crate::domain::model::{CostCenter, InventoryItem};
use crate::domain::ports::{ConfigProvider, InventorySource};
use crate::utils::error::{Result, ViewerError};
use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;

/// Fetches the cost center index and per-cost-center datasets published as
/// static JSON files under a base URL.
pub struct HttpInventorySource<C: ConfigProvider> {
    config: C,
    client: Client,
}

impl<C: ConfigProvider> HttpInventorySource<C> {
    pub fn new(config: C) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds()))
            .build()?;
        Ok(Self { config, client })
    }

    fn url_for(&self, path: &str) -> String {
        format!("{}/{}", self.config.base_url().trim_end_matches('/'), path)
    }
}

#[async_trait]
impl<C: ConfigProvider> InventorySource for HttpInventorySource<C> {
    async fn fetch_cost_centers(&self) -> Result<Vec<CostCenter>> {
        let url = self.url_for(self.config.index_file());
        tracing::debug!("Fetching cost center index from: {}", url);

        let response = self.client.get(&url).send().await?;
        tracing::debug!("Index response status: {}", response.status());

        if !response.status().is_success() {
            return Err(ViewerError::IndexUnavailable {
                status: response.status().as_u16(),
            });
        }

        let mut centers: Vec<CostCenter> = response.json().await?;
        // The selector is populated in ascending numeric order.
        centers.sort();

        tracing::debug!("Index lists {} cost centers", centers.len());
        Ok(centers)
    }

    async fn fetch_inventory(&self, cost_center: CostCenter) -> Result<Vec<InventoryItem>> {
        let path = format!("{}/{}.json", self.config.dataset_dir(), cost_center);
        let url = self.url_for(&path);
        tracing::debug!("Fetching inventory dataset from: {}", url);

        let response = self.client.get(&url).send().await?;
        tracing::debug!("Dataset response status: {}", response.status());

        if !response.status().is_success() {
            return Err(ViewerError::DatasetUnavailable {
                cost_center,
                status: response.status().as_u16(),
            });
        }

        let items: Vec<InventoryItem> = response.json().await?;
        tracing::debug!(
            "Loaded {} inventory rows for cost center {}",
            items.len(),
            cost_center
        );
        Ok(items)
    }
}
