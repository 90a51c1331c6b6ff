//! Scramble CLI Application
//!
//! Command-line host for the scramble-core library. It:
//! - Loads an optional TOML configuration
//! - Resolves a message callback (built-in, C ABI, or loaded from a library)
//! - Runs one receive/callback/transmit cycle
//! - Prints a TXT or JSON report

use anyhow::{Context, Result};
use chrono::Utc;
use clap::Parser;
use scramble_core::Scrambler;
use std::path::PathBuf;

mod callbacks;
mod config;
mod report;

use config::{AppConfig, CallbackMode, OutputFormat};
use report::RunReport;

/// Scramble - run a message callback through the scramble library
#[derive(Parser, Debug)]
#[command(name = "scramble-cli")]
#[command(
    about = "Swap \"cat\" and \"hat\" in a message via a registered callback",
    long_about = None
)]
#[command(version)]
struct Args {
    /// Message to scramble (default: "the cat in the hat")
    #[arg(short, long, value_name = "TEXT")]
    message: Option<String>,

    /// Path to configuration file (TOML)
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Which callback to register
    #[arg(long, value_enum)]
    mode: Option<CallbackMode>,

    /// Shared library to load the callback from (implies --mode library)
    #[arg(long, value_name = "FILE")]
    library: Option<PathBuf>,

    /// Exported symbol name of the callback in --library
    #[arg(long, value_name = "NAME")]
    symbol: Option<String>,

    /// Report format
    #[arg(short, long, value_enum)]
    format: Option<OutputFormat>,

    /// Verbosity level (can be repeated: -v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long)]
    quiet: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    init_logging(args.verbose, args.quiet);

    log::info!("Scramble CLI v{}", env!("CARGO_PKG_VERSION"));
    log::info!("Using scramble library v{}", scramble_core::VERSION);

    let config = build_config(&args)?;
    log::debug!("Effective configuration: {:?}", config);

    let callback = callbacks::resolve(&config.callback)?;
    let scrambler = Scrambler::new(config.scramble.clone());

    let started_at = Utc::now();
    let transmission = callback
        .run(&scrambler)
        .with_context(|| format!("Scramble with {} failed", callback.describe()))?;
    let finished_at = Utc::now();

    let report = RunReport {
        started_at,
        finished_at,
        mode: config.callback.mode,
        callback: callback.describe(),
        transmission,
    };

    if !args.quiet {
        println!("{}", report.render(config.output.format)?);
        println!("Done");
    }

    Ok(())
}

/// Merge the config file (if any) with command line overrides
fn build_config(args: &Args) -> Result<AppConfig> {
    let mut config = match &args.config {
        Some(path) => {
            log::info!("Loading configuration from: {:?}", path);
            config::load_config(path)?
        }
        None => AppConfig::default(),
    };

    if let Some(message) = &args.message {
        config.scramble.message = message.clone();
    }
    if let Some(library) = &args.library {
        config.callback.library = Some(library.clone());
        config.callback.mode = CallbackMode::Library;
    }
    if let Some(mode) = args.mode {
        config.callback.mode = mode;
    }
    if let Some(symbol) = &args.symbol {
        config.callback.symbol = symbol.clone();
    }
    if let Some(format) = args.format {
        config.output.format = format;
    }

    Ok(config)
}

/// Initialize logging based on verbosity level
fn init_logging(verbose: u8, quiet: bool) {
    use env_logger::Builder;
    use log::LevelFilter;
    use std::io::Write;

    let level = if quiet {
        LevelFilter::Error
    } else {
        match verbose {
            0 => LevelFilter::Info,
            1 => LevelFilter::Debug,
            _ => LevelFilter::Trace,
        }
    };

    Builder::new()
        .filter_level(level)
        .format(|buf, record| {
            writeln!(
                buf,
                "[{} {}] {}",
                record.level(),
                record.target(),
                record.args()
            )
        })
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_overrides_apply_on_top_of_defaults() {
        let args = Args::parse_from([
            "scramble-cli",
            "--message",
            "hat",
            "--mode",
            "ffi",
            "--format",
            "json",
        ]);
        let config = build_config(&args).unwrap();

        assert_eq!(config.scramble.message, "hat");
        assert_eq!(config.callback.mode, CallbackMode::Ffi);
        assert_eq!(config.output.format, OutputFormat::Json);
    }

    #[test]
    fn test_library_flag_implies_library_mode() {
        let args =
            Args::parse_from(["scramble-cli", "--library", "libcb.so", "--symbol", "swap"]);
        let config = build_config(&args).unwrap();

        assert_eq!(config.callback.mode, CallbackMode::Library);
        assert_eq!(config.callback.library, Some(PathBuf::from("libcb.so")));
        assert_eq!(config.callback.symbol, "swap");
    }

    #[test]
    fn test_no_args_runs_default_message() {
        let args = Args::parse_from(["scramble-cli"]);
        let config = build_config(&args).unwrap();
        assert_eq!(config.scramble.message, "the cat in the hat");
        assert_eq!(config.callback.mode, CallbackMode::Builtin);
    }
}
