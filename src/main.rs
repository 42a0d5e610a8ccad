use anyhow::Context;
use tracing_subscriber::EnvFilter;
use vimeo_thumbnail::config::{self, Config};
use vimeo_thumbnail::server;

fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let config = config::load_from_env()?;

    init_tracing(&config)?;
    config.print_summary();

    tokio::runtime::Builder::new_multi_thread()
        .worker_threads(config.web_concurrency)
        .enable_all()
        .build()
        .context("Failed to build Tokio runtime")?
        .block_on(server::run(config))
}

fn init_tracing(config: &Config) -> anyhow::Result<()> {
    let filter = EnvFilter::try_new(&config.log_level)
        .with_context(|| format!("Invalid RUST_LOG filter '{}'", config.log_level))?;

    let builder = tracing_subscriber::fmt().with_env_filter(filter);

    if config.log_format == "json" {
        builder.json().init();
    } else {
        builder.init();
    }

    Ok(())
}
