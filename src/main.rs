use std::sync::Arc;
use std::time::Duration;

use anyhow::Context;
use clap::Parser;

use todoview::api::HttpGateway;
use todoview::config::Config;
use todoview::logging::init_tracing;
use todoview::ui::runtime;

/// Terminal browser for JSONPlaceholder users and their todos.
#[derive(Debug, Parser)]
#[command(name = "todoview", version, about)]
struct Cli {
    /// Override the API base URL from the config file.
    #[arg(long)]
    base_url: Option<String>,
}

fn main() -> anyhow::Result<()> {
    init_tracing();

    let cli = Cli::parse();
    let mut config = Config::load().context("failed to load configuration")?;
    if let Some(base_url) = cli.base_url {
        config.api.base_url = base_url;
        config.validate().context("invalid --base-url")?;
    }

    let gateway = HttpGateway::new(
        &config.api.base_url,
        Duration::from_secs(u64::from(config.api.connect_timeout_seconds)),
    )
    .context("failed to build HTTP client")?;

    // Fetch tasks run on this runtime; the UI loop stays on the main
    // thread and observes them through watch channels.
    let runtime_handle = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .context("failed to start tokio runtime")?;
    let _guard = runtime_handle.enter();

    runtime::run(Arc::new(gateway)).context("UI loop failed")?;
    Ok(())
}
