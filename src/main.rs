use std::io::{stderr, stdout, BufWriter};
use std::process::{exit, ExitCode};

use anyhow::Result;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, Layer};

use crypto_csv_parser::config::{Config, USAGE};
use crypto_csv_parser::ui::{FsFileSource, TerminalRenderer, UploadSession};

#[tokio::main]
async fn main() -> Result<ExitCode> {
    let config = match Config::from_args(std::env::args().skip(1)) {
        Ok(config) => config,
        Err(error) => {
            eprintln!("{error}");
            eprintln!("{USAGE}");
            eprintln!("Available log levels: error, warn, info, debug, trace (default: error)");
            exit(1);
        }
    };

    setup_logging(config.log_level);

    let renderer = TerminalRenderer::new(BufWriter::new(stdout().lock())).with_json(config.json);
    let mut session = UploadSession::new(FsFileSource, renderer)
        .with_date_policy(config.date_policy);

    let outcome = session.handle_files(&config.files).await?;

    match outcome {
        Ok(result) if result.is_success() => Ok(ExitCode::SUCCESS),
        _ => Ok(ExitCode::FAILURE)
    }
}

fn setup_logging(level: LevelFilter) {
    //NOTE: stdout carries the parse results, so logging goes to stderr
    let terminal_log = fmt::layer()
        .with_target(false)
        .with_writer(stderr)
        .with_filter(level);

    tracing_subscriber::registry()
        .with(terminal_log)
        .init();
}
