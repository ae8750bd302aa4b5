//! LogLens: analyze a log file, gzip archive or stdin in one pass and
//! print a structured report.

use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use ll_analyzer::cli::Cli;
use ll_log_tools::FileLineSource;

fn init_tracing(cli: &Cli) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(cli.log_directive()));
    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);

    if cli.log_json {
        subscriber.json().init();
    } else {
        subscriber.init();
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(&cli);

    tracing::debug!(version = env!("CARGO_PKG_VERSION"), "loglens starting");

    // Reading stays synchronous; the runtime only races it against Ctrl-C.
    let task = tokio::task::spawn_blocking(move || ll_analyzer::run(&cli, &FileLineSource));

    tokio::select! {
        joined = task => match joined {
            Ok(Ok(report)) => {
                println!("{report}");
                ExitCode::SUCCESS
            }
            Ok(Err(err)) => {
                eprintln!("Error during analysis: {err:#}");
                ExitCode::FAILURE
            }
            Err(err) => {
                eprintln!("Error during analysis: {err}");
                ExitCode::FAILURE
            }
        },
        _ = tokio::signal::ctrl_c() => {
            eprintln!("\nAnalysis interrupted by user");
            // The blocking reader may be parked on stdin; don't wait for it.
            std::process::exit(1)
        }
    }
}
