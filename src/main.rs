use clap::Parser;
use pacsync::core::{PackageLister, ToolAvailability};
use pacsync::utils::{logger, validation::Validate};
use pacsync::{CliConfig, MirrorSyncPipeline, PaclistTool, SyncConfig, SyncEngine};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = CliConfig::parse();

    // 初始化日誌
    logger::init_cli_logger(cli.verbose);

    tracing::info!("Starting pacsync CLI");
    if cli.verbose {
        tracing::debug!("CLI config: {:?}", cli);
    }

    // 驗證配置
    let config = SyncConfig::from_cli(&cli);
    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        eprintln!("❌ {}", e);
        std::process::exit(1);
    }

    // paclist 必須存在才能繼續
    let lister = PaclistTool::default();
    if lister.probe().await == ToolAvailability::Unavailable {
        println!("Please install `pacman-contrib` package.");
        std::process::exit(1);
    }

    let pipeline = MirrorSyncPipeline::new(lister, config);
    let engine = SyncEngine::new(pipeline);

    match engine.run().await {
        Ok(summary) => {
            tracing::info!("✅ Sync completed successfully!");
            println!("✅ {}", summary);
        }
        Err(e) => {
            tracing::error!("❌ Sync failed: {}", e);
            eprintln!("❌ {}", e);
            std::process::exit(1);
        }
    }

    Ok(())
}
