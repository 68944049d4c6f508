use anyhow::Result;
use noc_console::config::Config;
use noc_console::{logger, ui};

#[tokio::main]
async fn main() -> Result<()> {
    if std::env::args().skip(1).any(|arg| arg == "--generate-config") {
        let path = Config::get_default_config_path()?;
        Config::generate_default_config(&path)?;
        return Ok(());
    }

    let (config, config_path) = Config::load()?;
    logger::init(&config.logging)?;

    // Logged only now so the line reaches the log buffer
    match config_path {
        Some(path) => log::info!("Loaded config from {}", path.display()),
        None => log::info!("No config file found, using defaults"),
    }

    // Run the TUI application
    ui::run_app(config).await?;

    Ok(())
}
