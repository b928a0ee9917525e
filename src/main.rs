// src/main.rs
use clap::Parser;

use nba_games::cli::Args;
use nba_games::config::Config;
use nba_games::error::AppError;
use nba_games::logging::setup_logging;
use nba_games::scrape::create_http_client;
use nba_games::store::GameStore;
use nba_games::update::update_games;

fn main() -> Result<(), AppError> {
    let args = Args::parse();

    // Validate argument combinations
    if args.start > args.stop {
        return Err(AppError::config_error(format!(
            "--start {} is after --stop {}",
            args.start, args.stop
        )));
    }

    if args.list_config {
        Config::display()?;
        return Ok(());
    }

    let (log_file_path, _guard) = setup_logging(&args)?;
    tracing::info!("Logs are being written to: {log_file_path}");

    // Load config first to fail early if there's an issue
    let config = Config::load()?;
    let client = create_http_client(config.http_timeout_seconds)?;
    let store = GameStore::new(config.cache_path());

    update_games(
        &client,
        &config,
        &store,
        args.start,
        args.stop,
        args.rebuild,
    )?;

    Ok(())
}
