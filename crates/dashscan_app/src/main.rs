mod logging;
mod report;
mod settings;

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::anyhow;
use clap::Parser;
use dashscan_core::validate_username;
use dashscan_engine::{EngineEvent, EngineHandle, SearchConfig};
use engine_logging::engine_info;
use log::LevelFilter;

use crate::logging::LogDestination;

const RUN_ID: u64 = 1;

/// Find the earliest submission of a user that contains an em dash.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Username to search
    username: String,

    /// Consider stories as well as comments
    #[arg(long)]
    include_stories: bool,

    /// Only accept the true em dash (U+2014)
    #[arg(long)]
    strict: bool,

    /// RON settings file with transport overrides
    #[arg(long, default_value = settings::DEFAULT_SETTINGS_FILE)]
    settings: PathBuf,

    /// Where log output goes
    #[arg(long, value_enum, default_value_t = LogDestination::Terminal)]
    log: LogDestination,

    /// Log per-item decisions
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    let level = if cli.verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    };
    logging::initialize(cli.log, level);

    match run(&cli) {
        Ok(code) => code,
        Err(err) => {
            eprintln!("error: {err:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: &Cli) -> anyhow::Result<ExitCode> {
    let username = match validate_username(&cli.username) {
        Ok(name) => name,
        Err(err) => {
            eprintln!("invalid username: {err}");
            return Ok(ExitCode::from(2));
        }
    };

    let settings = settings::load(&cli.settings);
    let engine = EngineHandle::new(settings.client_settings())
        .map_err(|err| anyhow!("failed to create HTTP client: {err}"))?;

    let config = SearchConfig::new(username)
        .with_include_stories(cli.include_stories)
        .with_strict_mode(cli.strict);
    engine_info!(
        "Searching {} (stories={}, strict={})",
        username,
        config.include_stories,
        config.strict_mode
    );
    engine.submit(RUN_ID, config);

    loop {
        match engine.recv() {
            Some(EngineEvent::Progress { event, .. }) => {
                println!("{}", report::progress_line(event));
            }
            Some(EngineEvent::SearchCompleted { result, .. }) => {
                return match result {
                    Ok(result) => {
                        print!("{}", report::render(username, &result));
                        Ok(ExitCode::SUCCESS)
                    }
                    Err(err) => {
                        eprintln!("{err}");
                        Ok(ExitCode::FAILURE)
                    }
                };
            }
            None => return Err(anyhow!("engine stopped before the search completed")),
        }
    }
}
