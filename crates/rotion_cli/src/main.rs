//! CLI smoke entry point.
//!
//! # Responsibility
//! - Provide a minimal executable to verify `rotion_core` linkage.
//! - Build one Project from flags and print it as JSON.

use anyhow::{Context, Result};
use clap::Parser;
use log::info;
use rotion_core::{
    core_version, default_log_level, init_logging, LogConfig, LogLevel, LoggingError, Project,
};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

#[derive(Debug, Parser)]
#[command(name = "rotion", version, about = "Create and validate a Rotion project")]
struct Args {
    /// Project title; omitting it triggers the missing-title error.
    #[arg(long)]
    title: Option<String>,

    /// Project description (up to 10,000 characters).
    #[arg(long)]
    description: Option<String>,

    #[arg(long)]
    emoji: Option<String>,

    /// Log level: trace|debug|info|warn|error. Overrides `ROTION_LOG_LEVEL`.
    #[arg(long)]
    log_level: Option<String>,

    /// Absolute directory for rolling log files.
    ///
    /// Falls back to `ROTION_LOG_DIR`/`ROTION_LOG_LEVEL`; logging stays off
    /// when neither is set.
    #[arg(long)]
    log_dir: Option<PathBuf>,
}

fn main() -> Result<ExitCode> {
    let args = Args::parse();

    let log_config = resolve_log_config(
        args.log_dir.as_deref(),
        args.log_level.as_deref(),
        LogConfig::from_env,
    )?;
    if let Some(config) = &log_config {
        init_logging(config).context("failed to initialize logging")?;
    }

    println!("rotion_core version={}", core_version());

    match Project::new(args.title, args.description, args.emoji) {
        Ok(project) => {
            info!("event=cli_create module=cli status=ok");
            let json = serde_json::to_string_pretty(&project)?;
            println!("{json}");
            Ok(ExitCode::SUCCESS)
        }
        Err(err) => {
            eprintln!("{err}");
            Ok(ExitCode::FAILURE)
        }
    }
}

/// Flags win over the environment; `--log-level` also applies to a directory
/// taken from `ROTION_LOG_DIR`.
fn resolve_log_config(
    log_dir: Option<&Path>,
    log_level: Option<&str>,
    from_env: impl FnOnce() -> Result<Option<LogConfig>, LoggingError>,
) -> Result<Option<LogConfig>, LoggingError> {
    if let Some(dir) = log_dir {
        let level = log_level.unwrap_or(default_log_level());
        return LogConfig::new(level, dir).map(Some);
    }

    let Some(mut config) = from_env()? else {
        return Ok(None);
    };
    if let Some(level) = log_level {
        config.level = LogLevel::parse(level)?;
    }
    Ok(Some(config))
}
