mod app;
mod cli;
mod event;
mod terminal;
mod ui;

use app::App;
use clap::Parser;
use cli::CliArgs;
use color_eyre::eyre::WrapErr;
use color_eyre::Result;
use env_logger::{Env, Target};
use event::HeadlessOptions;
use std::fs::File;
use std::path::Path;
use ufo_radar::config::{init_app_config, RadarConfig};
use ufo_radar::dataset;

const INTERACTIVE_LOG_FILE: &str = "ufo_radar.log";

#[tokio::main]
async fn main() -> Result<()> {
    // Setup error handling
    color_eyre::install()?;

    let args = CliArgs::parse();
    args.apply_env_overrides();
    let config = init_app_config()?;

    let interactive = !args.headless && is_terminal();
    init_logging(&config, interactive)?;

    // Parsing the full dataset takes a moment, keep it off the runtime threads
    let path = config.dataset_path.clone();
    let settings = config.session;
    let session = tokio::task::spawn_blocking(move || dataset::load_session(&path, settings))
        .await?
        .wrap_err_with(|| {
            format!(
                "failed to load sightings from {}",
                config.dataset_path.display()
            )
        })?;

    let report = session.load_report();
    log::info!(
        "loaded {} of {} rows from {} ({} dropped: {} malformed, {} outside radar)",
        report.accepted,
        report.rows,
        config.dataset_path.display(),
        report.dropped(),
        report.malformed,
        report.outside_radar
    );

    if !interactive {
        let dataset_name = config.dataset_path.display().to_string();
        return event::run_headless(
            session,
            &dataset_name,
            HeadlessOptions {
                ticks: args.ticks,
                json: args.json,
            },
        );
    }

    // Setup terminal
    let mut terminal = terminal::setup_terminal()?;
    let mut app = App::new(session, &config);

    // Run the application
    let result = event::run(&mut terminal, &mut app);

    // Restore terminal
    terminal::cleanup_terminal_state(true, true);

    result
}

fn init_logging(config: &RadarConfig, interactive: bool) -> Result<()> {
    let level = if config.debug { "debug" } else { "warn" };
    let mut builder = env_logger::Builder::from_env(Env::default().default_filter_or(level));

    // stderr shares the screen with the TUI
    let log_file = match (&config.log_file, interactive) {
        (Some(path), _) => Some(path.as_path()),
        (None, true) => Some(Path::new(INTERACTIVE_LOG_FILE)),
        (None, false) => None,
    };

    if let Some(path) = log_file {
        let file = File::create(path)
            .wrap_err_with(|| format!("failed to open log file {}", path.display()))?;
        builder.target(Target::Pipe(Box::new(file)));
    }

    builder.try_init()?;
    Ok(())
}

// Check if we're running in a terminal
fn is_terminal() -> bool {
    atty::is(atty::Stream::Stdout)
}
