use cc_inventory::core::render;
use cc_inventory::utils::{logger, validation::Validate};
use cc_inventory::{CliConfig, HttpInventorySource, Settings, Viewer, ViewerError};
use clap::Parser;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    logger::init_cli_logger(cli.verbose);
    tracing::info!("Starting cc-inventory");

    let settings = match Settings::resolve(cli) {
        Ok(settings) => settings,
        Err(e) => {
            tracing::error!("❌ Configuration failed: {}", e);
            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 {}", e.recovery_suggestion());
            std::process::exit(2);
        }
    };

    if settings.verbose {
        tracing::debug!("Effective settings: {:?}", settings);
    }

    if let Err(e) = settings.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        eprintln!("❌ {}", e.user_friendly_message());
        eprintln!("💡 {}", e.recovery_suggestion());
        std::process::exit(2);
    }

    let source = match HttpInventorySource::new(settings.clone()) {
        Ok(source) => source,
        Err(e) => return fail(e),
    };
    let mut viewer = Viewer::new(source);

    if settings.list {
        match viewer.load_index().await {
            Ok(centers) => println!("{}", render::render_cost_centers(&centers)),
            Err(e) => return fail(e),
        }
        return Ok(());
    }

    match settings.cost_center {
        Some(cost_center) => {
            match viewer
                .run_once(cost_center, settings.equipment.as_deref())
                .await
            {
                Ok(table) => println!("{}", table),
                Err(e) => return fail(e),
            }
        }
        None => {
            let stdin = std::io::stdin();
            let mut stdout = std::io::stdout();
            if let Some(term) = settings.equipment.as_deref() {
                viewer.set_filter(term);
            }
            if let Err(e) = viewer.run_interactive(stdin.lock(), &mut stdout).await {
                return fail(e);
            }
        }
    }

    Ok(())
}

fn fail(e: ViewerError) -> anyhow::Result<()> {
    tracing::error!("❌ Viewer failed: {}", e);
    eprintln!("❌ {}", e.user_friendly_message());
    eprintln!("💡 {}", e.recovery_suggestion());
    std::process::exit(1);
}
