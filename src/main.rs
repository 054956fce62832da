use clap::Parser;
use color_eyre::eyre::Result;
use tracing::info;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use routeoptimize::application::AppShell;
use routeoptimize::infrastructure::{
    AppConfig, CliArgs, StorageManager, TimerQueue, build_shell_view, demo_packages,
    demo_settings,
};
use routeoptimize::presentation::App;

fn init_logging(config: &AppConfig) -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.log_level.to_string()));

    if let Some(log_path) = config.effective_log_path() {
        if let Some(parent) = log_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(&log_path)?;

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
        tracing_subscriber::registry().with(filter).init();
    }

    Ok(())
}

fn create_app() -> Result<App> {
    let args = CliArgs::parse();
    let storage = StorageManager::new()?;
    let loaded = storage.load_config(args.config.as_deref())?;
    let mut config = loaded.config;
    config.merge_with_args(args);

    init_logging(&config)?;
    info!(path = %loaded.path.display(), source = %loaded.source, "Configuration loaded");

    let policy = config.shell_policy();
    info!(
        version = routeoptimize::VERSION,
        strict_elements = policy.strict_elements,
        "Starting RouteOptimize"
    );

    let cards = demo_packages();
    let rows = demo_settings();
    let view = build_shell_view(&cards, &rows);
    let shell = AppShell::new(view, TimerQueue::new(), policy, cards, rows)?;

    Ok(App::new(shell, &config.ui))
}

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;

    let app = create_app()?;

    let mut terminal = ratatui::init();

    let result = app.run(&mut terminal).await;

    ratatui::restore();

    result
}
