//! Console entry point.
//!
//! # Responsibility
//! - Read commands from stdin one line at a time and print the responses.
//! - Stop on `Q` or end of input.

use albumdex_core::{
    core_version, default_log_level, init_logging, Flow, LogConfig, Session, STARTUP_BANNER,
};
use anyhow::{Context, Result};
use clap::Parser;
use log::info;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;

/// Command-line arguments for albumdex
#[derive(Parser, Debug)]
#[command(name = "albumdex")]
#[command(about = "In-memory album collection manager driven by console commands")]
#[command(version)]
struct Args {
    /// Log level: trace|debug|info|warn|error
    #[arg(long, default_value = default_log_level(), env = "ALBUMDEX_LOG_LEVEL")]
    log_level: String,

    /// Absolute directory for rotating log files; logs go to stderr when unset
    #[arg(long, env = "ALBUMDEX_LOG_DIR")]
    log_dir: Option<PathBuf>,
}

fn main() -> Result<()> {
    let args = Args::parse();

    init_logging(&LogConfig::new(args.log_level, args.log_dir))
        .context("failed to initialize logging")?;
    info!(
        "event=app_start module=cli status=ok version={}",
        core_version()
    );

    let stdin = io::stdin();
    let mut stdout = io::stdout().lock();
    writeln!(stdout, "{STARTUP_BANNER}")?;

    let mut session = Session::new();
    for line in stdin.lock().lines() {
        let line = line.context("failed to read command from stdin")?;
        let response = session.handle_line(&line);
        for output in &response.lines {
            writeln!(stdout, "{output}")?;
        }
        stdout.flush()?;
        if response.flow == Flow::Quit {
            break;
        }
    }

    info!("event=app_stop module=cli status=ok");
    Ok(())
}
