// Scout Desk entry point.
//
// Startup sequence:
// 1. Initialize tracing (log to file, not terminal)
// 2. Load config
// 3. Generate the synthetic dataset
// 4. Run the TUI event loop (blocking until the user quits)

use scout_desk::config;
use scout_desk::data::generate;
use scout_desk::tui;

use anyhow::Context;
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 1. Initialize tracing (log to file, not the terminal the TUI owns)
    init_tracing()?;
    info!("Scout Desk starting up");

    // 2. Load config
    let config = config::load_config().context("failed to load configuration")?;
    info!(
        "Config loaded: {} agents, {} players, {} contracts, draft classes {:?}",
        config.dataset.agents,
        config.dataset.players,
        config.dataset.contracts,
        config.dataset.draft_years
    );

    // 3. Generate the session dataset
    let dataset = generate::generate(&config.dataset);

    // 4. Run the TUI (blocks until the user presses 'q' or Ctrl+C)
    tui::run(dataset, config).await.context("TUI error")?;

    info!("Scout Desk shut down cleanly");
    Ok(())
}

/// Initialize tracing to log to a file (not the terminal, which is used by the TUI).
fn init_tracing() -> anyhow::Result<()> {
    use tracing_subscriber::fmt;
    use tracing_subscriber::EnvFilter;

    let log_dir = std::env::current_dir()?.join("logs");
    std::fs::create_dir_all(&log_dir)?;

    let log_file = std::fs::File::create(log_dir.join("scoutdesk.log"))?;

    let subscriber = fmt::Subscriber::builder()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("scout_desk=info,warn")),
        )
        .with_writer(log_file)
        .with_ansi(false)
        .with_target(true)
        .finish();

    tracing::subscriber::set_global_default(subscriber)
        .context("failed to set tracing subscriber")?;

    Ok(())
}
