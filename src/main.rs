use city_distance::core::ConfigProvider;
use city_distance::utils::{logger, validation::Validate};
use city_distance::{CliConfig, Server, TomlConfig};
use clap::Parser;

#[tokio::main]
async fn main() {
    let cli = CliConfig::parse();

    if cli.log_json {
        logger::init_json_logger(cli.verbose);
    } else {
        logger::init_cli_logger(cli.verbose);
    }

    tracing::info!("Starting city-distance");
    if cli.verbose {
        tracing::debug!("CLI config: {:?}", cli);
    }

    if let Err(e) = run(cli).await {
        tracing::error!("❌ {e:#}");
        std::process::exit(1);
    }
}

async fn run(cli: CliConfig) -> anyhow::Result<()> {
    match &cli.config {
        Some(path) => {
            tracing::info!("Loading configuration from {}", path);
            let config = TomlConfig::from_file(path)?;
            serve(&config).await
        }
        None => serve(&cli).await,
    }
}

async fn serve<C: ConfigProvider + Validate>(config: &C) -> anyhow::Result<()> {
    config
        .validate()
        .map_err(|e| anyhow::anyhow!("configuration validation failed: {e}"))?;

    let server = Server::from_config(config).await?;
    server.run_until(shutdown_signal()).await?;
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("failed to listen for shutdown signal: {e}");
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}
