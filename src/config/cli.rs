use clap::Parser;

#[derive(Debug, Clone, Parser)]
#[command(name = "cc-inventory")]
#[command(about = "Cost-center inventory viewer for static JSON datasets")]
pub struct CliConfig {
    #[arg(long, help = "Base URL the datasets are published under")]
    pub base_url: Option<String>,

    #[arg(long, help = "Index file name relative to the base URL")]
    pub index_file: Option<String>,

    #[arg(long, help = "Directory holding the per-cost-center JSON files")]
    pub dataset_dir: Option<String>,

    #[arg(long, help = "Cost center to load (omit for interactive mode)")]
    pub cost_center: Option<u32>,

    #[arg(long, help = "Filter rows by equipment name substring")]
    pub equipment: Option<String>,

    #[arg(long, help = "Print the cost center index and exit")]
    pub list: bool,

    #[arg(long, help = "HTTP request timeout in seconds")]
    pub timeout_seconds: Option<u64>,

    #[arg(long, help = "Path to a TOML config file")]
    pub config: Option<String>,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}
