
//! Logger setup, shared by the server and the command line tools.

use std::time::SystemTime;

/// Installs a [`fern`] logger writing to stdout at the given level.
/// Rocket detects the existing logger and routes its own messages
/// through it.
pub fn setup_logger(level: log::LevelFilter) -> Result<(), fern::InitError> {
  fern::Dispatch::new()
    .format(|out, message, record| {
      out.finish(format_args!(
        "[{} {} {}] {}",
        humantime::format_rfc3339_seconds(SystemTime::now()),
        record.level(),
        record.target(),
        message
      ))
    })
    .level(level)
    .chain(std::io::stdout())
    .apply()?;
  Ok(())
}
