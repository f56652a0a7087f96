// src/main.rs
use clap::Parser;
use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Duration;

use window_activity::commands::{run, summary, watch};
use window_activity::config::{self, AppConfig};
use window_activity::errors::AppResult;
use window_activity::types::Commands;

#[derive(Parser, Debug)]
#[command(name = config::APP_NAME, version, about = "Logs the foreground window to a CSV file")]
struct Cli {
    /// CSV file receiving the activity rows
    #[arg(long, global = true, default_value = config::DEFAULT_OUTPUT_FILE)]
    output: PathBuf,

    /// Replay a scripted fake session instead of querying the OS
    #[arg(long, global = true)]
    dry_run: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

fn dispatch(cli: Cli) -> AppResult<()> {
    let command = cli.command.unwrap_or(Commands::Watch {
        interval: config::WATCH_INTERVAL_SECONDS,
        idle_time: config::IDLE_TIME_SECONDS,
        grace_period: config::GRACE_PERIOD_SECONDS,
    });

    match command {
        Commands::Track { interval } => {
            let app_config = AppConfig::for_track()
                .with_output(cli.output)
                .with_interval(Duration::from_secs(interval))
                .with_dry_run(cli.dry_run);
            run::execute(&app_config)
        }
        Commands::Watch { interval, idle_time, grace_period } => {
            let app_config = AppConfig::default()
                .with_output(cli.output)
                .with_interval(Duration::from_secs(interval))
                .with_idle_time(Duration::from_secs(idle_time))
                .with_grace_period(Duration::from_secs(grace_period))
                .with_dry_run(cli.dry_run);
            watch::execute(&app_config)
        }
        Commands::Summary { date, json } => summary::execute(&cli.output, date, json),
    }
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    log::debug!("Parsed arguments: {:?}", cli);

    match dispatch(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{}", e);
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}
