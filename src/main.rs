use std::sync::Arc;

use clap::Parser;
use color_eyre::eyre::{Result, WrapErr};
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use albumgen::application::{
    GenerateModulesUseCase, ResolveDimensionsUseCase, RetryingDimensionFetcher,
};
use albumgen::domain::AccessToken;
use albumgen::infrastructure::{
    AppConfig, CatalogClient, CliArgs, ConfigStore, ElmModuleWriter, HttpHeaderFetcher,
};

fn init_logging(config: &AppConfig) -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.log_level.to_string()));

    if let Some(log_path) = &config.log_path {
        if let Some(parent) = log_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(log_path)?;

        let file_layer = fmt::layer()
            .with_writer(file)
            .with_ansi(false)
            .with_target(true)
            .with_thread_ids(false);

        tracing_subscriber::registry()
            .with(filter)
            .with(file_layer)
            .init();

        info!(path = %log_path.display(), "Logging initialized");
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(fmt::layer().with_writer(std::io::stderr))
            .init();
    }

    Ok(())
}

fn load_config(args: &CliArgs) -> Result<AppConfig> {
    let store = match &args.config {
        Some(path) => Some(ConfigStore::at(path)),
        None => ConfigStore::platform().ok(),
    };

    let mut config = match &store {
        Some(store) => {
            let mut config = store.load()?;
            config.config = Some(store.path().to_path_buf());
            config
        }
        None => AppConfig::default(),
    };

    config.merge_with_args(args);
    config.validate()?;
    Ok(config)
}

fn create_use_case(config: &AppConfig, args: &CliArgs) -> Result<GenerateModulesUseCase> {
    let token = args.token.as_deref().and_then(AccessToken::new);
    if token.is_none() {
        warn!("No access token configured, catalog requests are unauthenticated");
    }

    let catalog = CatalogClient::new(&config.source.base_url, &config.source.user_agent, token)?;

    let header_fetcher = HttpHeaderFetcher::new(
        &config
            .fetch
            .header_fetch_config(&config.source.user_agent),
    )
    .wrap_err("Failed to create image HTTP client")?;
    info!(
        header_threshold = header_fetcher.header_threshold(),
        "Image header fetcher ready"
    );
    let fetcher = RetryingDimensionFetcher::new(
        Arc::new(header_fetcher),
        config.fetch.retry_policy(),
    );

    Ok(GenerateModulesUseCase::new(
        Arc::new(catalog),
        Arc::new(ElmModuleWriter::new(&args.destination)),
        ResolveDimensionsUseCase::new(Arc::new(fetcher)),
    ))
}

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;
    let _ = dotenvy::dotenv();

    let args = CliArgs::parse();
    let config = load_config(&args)?;

    init_logging(&config)?;
    if let Some(path) = &config.config {
        info!(path = %path.display(), "Using configuration file");
    }

    info!(
        version = albumgen::VERSION,
        destination = %args.destination.display(),
        "Starting albumgen"
    );

    let use_case = create_use_case(&config, &args)?;
    let report = use_case.execute().await?;

    for failure in &report.failed {
        warn!(artist_id = %failure.artist_id, reason = %failure.reason, "Artist skipped");
    }

    report.into_result()?;
    Ok(())
}
