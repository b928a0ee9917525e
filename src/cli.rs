use chrono::{Datelike, Local};
use clap::Parser;
use clap::builder::styling::{AnsiColor, Effects, Styles};

fn get_styles() -> Styles {
    Styles::styled()
        .header(AnsiColor::Cyan.on_default().effects(Effects::BOLD))
        .usage(AnsiColor::Cyan.on_default().effects(Effects::BOLD))
        .literal(AnsiColor::Green.on_default())
        .placeholder(AnsiColor::Yellow.on_default())
        .error(AnsiColor::Red.on_default().effects(Effects::BOLD))
        .valid(AnsiColor::Green.on_default())
        .invalid(AnsiColor::Red.on_default())
}

/// The season currently being played or about to start, by its ending
/// year. A season spanning two calendar years is identified by the later
/// one, so the season that starts this autumn ends next year.
pub fn current_season() -> i32 {
    Local::now().year() + 1
}

/// NBA game score puller
///
/// Pulls NBA game schedules and final scores from basketball-reference.com
/// and maintains a deduplicated local cache of every game seen across runs.
/// Seasons are identified by their ending year: `--start 2018 --stop 2019`
/// covers the 2017-18 and 2018-19 seasons.
#[derive(Parser, Debug)]
#[command(about, long_about = None)]
#[command(styles = get_styles())]
pub struct Args {
    /// First season to pull, by ending year. Defaults to the season
    /// currently being played or about to start.
    #[arg(long, value_name = "SEASON", default_value_t = current_season())]
    pub start: i32,

    /// Last season to pull, by ending year.
    #[arg(long, value_name = "SEASON", default_value_t = current_season())]
    pub stop: i32,

    /// Ignore the existing cache and replace it with freshly pulled data
    /// for the given range only.
    #[arg(long)]
    pub rebuild: bool,

    /// List current configuration settings
    #[arg(long = "list-config", short = 'l', help_heading = "Configuration")]
    pub list_config: bool,

    /// Specify a custom log file path. If not provided, logs will be
    /// written to the default location.
    #[arg(long = "log-file", help_heading = "Debug")]
    pub log_file: Option<String>,
}
