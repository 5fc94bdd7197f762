use std::io;
use std::path::PathBuf;

use anyhow::{Context, Result};
use calc_core::Calculator;
use clap::Parser;
use tokio::io::BufReader;
use tracing::debug;

use calc_term::logging::init_logging;
use calc_term::{Session, TermConfig, TerminalDisplay};

// ─── CLI definition ──────────────────────────────────────────────────────────

/// Sequential four-function calculator driven from the keyboard.
///
/// Reads keys from stdin, one line at a time. Digits, `.`, `+ - * / %`,
/// `=` work as single characters; `Enter`, `Backspace` and `Escape` are
/// written out as words. Each change is printed as a two-line frame.
#[derive(Debug, Parser)]
#[command(name = "calc")]
#[command(version, about, long_about = None)]
struct Cli {
    /// TOML file with `[engine]` and `[display]` settings.
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Milliseconds an error stays on the display before the reset.
    #[arg(long)]
    recovery_delay_ms: Option<u64>,

    /// Let Backspace and Escape dismiss an error early.
    #[arg(long, default_value_t = false)]
    dismiss_error_on_clear: bool,

    /// Column the frame is right-aligned to.
    #[arg(short, long)]
    width: Option<usize>,

    /// Log filter directive (e.g. `debug`, `calc_core=trace`). Overrides `RUST_LOG`.
    #[arg(long)]
    log_level: Option<String>,

    /// Also append log records to this file.
    #[arg(long)]
    log_file: Option<PathBuf>,

    /// When input ends while an error is shown, wait for the reset.
    #[arg(long, default_value_t = false)]
    wait_recovery: bool,
}

// ─── entry point ─────────────────────────────────────────────────────────────

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    init_logging(cli.log_level.as_deref(), cli.log_file.as_deref())?;

    let mut config = TermConfig::load(cli.config.as_deref())?;
    config.apply_overrides(cli.recovery_delay_ms, cli.dismiss_error_on_clear, cli.width);
    config.validate().context("Invalid configuration")?;
    debug!(?config, "configuration loaded");

    let display = TerminalDisplay::new(io::stdout(), config.display.width);
    let calculator = Calculator::with_config(config.engine, display)?;

    let mut session = Session::new(calculator, cli.wait_recovery);
    session.run(BufReader::new(tokio::io::stdin())).await?;

    session
        .into_calculator()
        .into_display()
        .finish()
        .context("Failed to write to stdout")?;

    Ok(())
}
