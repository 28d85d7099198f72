// Entrypoint for the CLI application.
// - Keeps `main` small: parse argv, build the API client, hand both to `ui`.
// - Logging goes to stderr so stdout carries only the report.

use std::ffi::OsString;
use std::process::ExitCode;

use anyhow::Result;
use tracing_subscriber::EnvFilter;
use twitterfreq::{
    api::ApiClient,
    cli::{self, Command, Config},
    ui,
};

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args: Vec<OsString> = std::env::args_os().skip(1).collect();
    let config = match cli::parse_os_args(&args) {
        Command::Help => {
            cli::print_help();
            return ExitCode::SUCCESS;
        }
        Command::Run(config) => config,
    };

    match run(&config) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(config: &Config) -> Result<ExitCode> {
    // Base URL and token come from TWITTERFREQ_API_URL / TWITTER_BEARER_TOKEN.
    let api = ApiClient::from_env()?;

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    match ui::run_report(config, &api, &mut out) {
        Ok(_) => Ok(ExitCode::SUCCESS),
        Err(e) => {
            drop(out);
            ui::report_failure(&e);
            Ok(ExitCode::FAILURE)
        }
    }
}
