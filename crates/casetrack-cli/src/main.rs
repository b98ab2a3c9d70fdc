use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;

use casetrack_infrastructure::ClientConfig;
use casetrack_infrastructure::config::{ENV_API_URL, ENV_TAB};

mod app;
mod render;
mod repl;
mod terminal;

#[derive(Parser, Debug)]
#[command(name = "casetrack")]
#[command(about = "Terminal client for the FIR case-tracking service", long_about = None)]
struct Cli {
    /// API base URL
    #[arg(long, env = ENV_API_URL)]
    api_url: Option<String>,

    /// Resume the session role of a named tab (default: a fresh tab)
    #[arg(long, env = ENV_TAB, conflicts_with = "new_tab")]
    tab: Option<String>,

    /// Start in a fresh tab even if the config file names one
    #[arg(long)]
    new_tab: bool,

    /// Config file (defaults to the platform config directory)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Directory for tab and profile state
    #[arg(long)]
    data_dir: Option<PathBuf>,

    /// Log filter, e.g. `debug` or `casetrack_application=trace`
    #[arg(long)]
    log: Option<String>,
}

impl Cli {
    fn into_config(self) -> Result<ClientConfig> {
        let mut config = match &self.config {
            Some(path) => ClientConfig::load_from(path),
            None => ClientConfig::load(),
        }
        .context("Failed to load configuration")?;

        if let Some(url) = self.api_url {
            config.api_url = url;
        }
        if let Some(tab) = self.tab {
            config.tab_id = Some(tab);
        }
        if self.new_tab || config.tab_id.is_none() {
            config.tab_id = Some(uuid::Uuid::new_v4().to_string());
        }
        if let Some(dir) = self.data_dir {
            config.data_dir = Some(dir);
        }
        if let Some(level) = self.log {
            config.log_level = level;
        }
        Ok(config)
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let config = Cli::parse().into_config()?;

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&config.log_level)),
        )
        .init();

    let app = app::App::build(config)?;
    repl::run(app).await
}
