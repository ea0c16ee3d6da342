
//! Command line argument parser.

use clap::Parser;

#[derive(Parser, Debug, Clone)]
#[command(version, about, long_about = None)]
pub struct CliArgs {
  /// If supplied, apply pending database migrations and exit instead
  /// of running the Rocket server.
  #[arg(long)]
  pub migrate_only: bool,
  /// Minimum level of log messages to print.
  #[arg(long, default_value = "info")]
  pub log_level: log::LevelFilter,
}
