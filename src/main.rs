use anyhow::{Context, Result};
use hugo_autodeploy::config::{Config, CONFIG_FILE};
use hugo_autodeploy::deploy::Tools;
use hugo_autodeploy::tui;
use std::path::Path;

#[tokio::main]
async fn main() -> Result<()> {
    // Log to a file so the alternate screen stays clean.
    let log_file = std::fs::File::create("hugo-autodeploy.log")?;
    tracing_subscriber::fmt()
        .with_env_filter("hugo_autodeploy=info")
        .with_writer(log_file)
        .with_ansi(false)
        .init();

    let config = Config::load(Path::new(CONFIG_FILE))?;

    // Resolve the external tools up front; a missing binary is reported here
    // instead of mid-run.
    let hugo = which::which(&config.tools.hugo)
        .with_context(|| format!("`{}` not found on PATH (install Hugo first)", config.tools.hugo))?;
    let git = which::which(&config.tools.git)
        .with_context(|| format!("`{}` not found on PATH (install Git first)", config.tools.git))?;
    let tools = Tools { hugo, git };
    tracing::info!(hugo = %tools.hugo.display(), git = %tools.git.display(), "tools resolved");

    tui::run_tui(config, tools).await
}
