use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use tracing_subscriber::EnvFilter;

use termfolio::config::{Config, ConfigStore, ThemeMode};

fn main() -> anyhow::Result<()> {
    init_tracing();

    let cli = Cli::parse();
    let path = cli.config.unwrap_or_else(Config::config_path);
    let config = Config::load_from(&path)
        .with_context(|| format!("loading config from {}", path.display()))?;
    tracing::info!(config = %path.display(), "starting termfolio");

    let store = ConfigStore::new(config, path);
    termfolio::ui::run(store, cli.theme).context("running UI")?;
    Ok(())
}

fn init_tracing() {
    // Stderr only: stdout belongs to the alternate screen.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .try_init();
}

#[derive(Parser, Debug)]
#[command(author, version, about = "Personal portfolio for the terminal", long_about = None)]
struct Cli {
    /// Start with this theme instead of the persisted preference.
    #[arg(long, value_enum)]
    theme: Option<ThemeMode>,

    /// Use an alternate config file.
    #[arg(long)]
    config: Option<PathBuf>,
}
