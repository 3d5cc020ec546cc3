pub mod cli;
pub mod file;

pub use cli::CliConfig;
pub use file::FileConfig;

use crate::domain::model::CostCenter;
use crate::domain::ports::ConfigProvider;
use crate::utils::error::{Result, ViewerError};
use crate::utils::validation::{
    validate_non_empty_string, validate_range, validate_url, Validate,
};

pub const DEFAULT_INDEX_FILE: &str = "cc_index.json";
pub const DEFAULT_DATASET_DIR: &str = "por_centro_custo";
pub const DEFAULT_TIMEOUT_SECONDS: u64 = 30;

/// Effective configuration after merging CLI flags over the optional config
/// file. Flags win; file values fill the gaps; the rest falls back to the
/// published dataset layout.
#[derive(Debug, Clone)]
pub struct Settings {
    pub base_url: String,
    pub index_file: String,
    pub dataset_dir: String,
    pub timeout_seconds: u64,
    pub cost_center: Option<CostCenter>,
    pub equipment: Option<String>,
    pub list: bool,
    pub verbose: bool,
}

impl Settings {
    pub fn resolve(cli: CliConfig) -> Result<Self> {
        let file = match &cli.config {
            Some(path) => FileConfig::from_file(path)?,
            None => FileConfig::default(),
        };
        let source = file.source.unwrap_or_default();
        let defaults = file.defaults.unwrap_or_default();

        let base_url = cli
            .base_url
            .or(source.base_url)
            .ok_or_else(|| ViewerError::MissingConfigError {
                field: "base_url".to_string(),
            })?;

        Ok(Self {
            base_url,
            index_file: cli
                .index_file
                .or(source.index_file)
                .unwrap_or_else(|| DEFAULT_INDEX_FILE.to_string()),
            dataset_dir: cli
                .dataset_dir
                .or(source.dataset_dir)
                .unwrap_or_else(|| DEFAULT_DATASET_DIR.to_string()),
            timeout_seconds: cli
                .timeout_seconds
                .or(source.timeout_seconds)
                .unwrap_or(DEFAULT_TIMEOUT_SECONDS),
            cost_center: cli.cost_center.or(defaults.cost_center).map(CostCenter),
            equipment: cli.equipment.or(defaults.equipment),
            list: cli.list,
            verbose: cli.verbose,
        })
    }
}

impl ConfigProvider for Settings {
    fn base_url(&self) -> &str {
        &self.base_url
    }

    fn index_file(&self) -> &str {
        &self.index_file
    }

    fn dataset_dir(&self) -> &str {
        &self.dataset_dir
    }

    fn timeout_seconds(&self) -> u64 {
        self.timeout_seconds
    }
}

impl Validate for Settings {
    fn validate(&self) -> Result<()> {
        validate_url("base_url", &self.base_url)?;
        validate_non_empty_string("index_file", &self.index_file)?;
        validate_non_empty_string("dataset_dir", &self.dataset_dir)?;
        validate_range("timeout_seconds", self.timeout_seconds, 1, 300)?;
        Ok(())
    }
}
