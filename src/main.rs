
use highscores::args::CliArgs;
use highscores::config;
use highscores::logging::setup_logger;
use highscores::server::run_server;
use highscores::setup::migrate_database;

use clap::Parser;

#[rocket::main]
async fn main() -> anyhow::Result<()> {
  let args = CliArgs::parse();
  setup_logger(args.log_level)?;

  let figment = config::figment();
  if args.migrate_only {
    migrate_database(&figment)?;
    return Ok(());
  }
  run_server(figment).await?;
  Ok(())
}
