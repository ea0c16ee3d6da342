
//! Server configuration.
//!
//! Everything is read through Rocket's [`Figment`], so the usual
//! `Rocket.toml` and `ROCKET_*` sources still apply. On top of those,
//! two plain environment variables are honored: `ADMIN_TOKEN` and
//! `DB_PATH`.

use crate::db::DATABASE_NAME;

use rocket::figment::Figment;
use serde::{Serialize, Deserialize};

use std::env;

pub const ADMIN_TOKEN_ENV_VAR: &str = "ADMIN_TOKEN";
pub const DB_PATH_ENV_VAR: &str = "DB_PATH";

/// Placeholder admin token. Must be overridden in any real deployment.
pub const DEFAULT_ADMIN_TOKEN: &str = "change-me";
pub const DEFAULT_DB_PATH: &str = "./data/highscores.db";

/// Application-specific configuration, extracted from the Rocket
/// figment and placed in managed state.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
  pub admin_token: String,
}

impl AppConfig {
  pub fn is_admin_token(&self, token: &str) -> bool {
    self.admin_token == token
  }

  pub fn uses_default_admin_token(&self) -> bool {
    self.admin_token == DEFAULT_ADMIN_TOKEN
  }
}

/// Key of the database URL within the figment.
pub fn database_url_key() -> String {
  format!("databases.{}.url", DATABASE_NAME)
}

/// Builds the figment used to configure the server: Rocket's defaults
/// and sources, then our own defaults for anything left unset, then
/// the `ADMIN_TOKEN` and `DB_PATH` environment variables.
pub fn figment() -> Figment {
  let mut figment = rocket::Config::figment()
    .join(("admin_token", DEFAULT_ADMIN_TOKEN))
    .join((database_url_key(), DEFAULT_DB_PATH));
  if let Ok(admin_token) = env::var(ADMIN_TOKEN_ENV_VAR) {
    figment = figment.merge(("admin_token", admin_token));
  }
  if let Ok(db_path) = env::var(DB_PATH_ENV_VAR) {
    figment = figment.merge((database_url_key(), db_path));
  }
  figment
}

/// Reads the configured database path out of `figment`.
pub fn database_path(figment: &Figment) -> Result<String, rocket::figment::Error> {
  figment.extract_inner::<String>(&database_url_key())
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn admin_token_comparison_is_exact() {
    let config = AppConfig { admin_token: String::from("s3cret") };
    assert!(config.is_admin_token("s3cret"));
    assert!(!config.is_admin_token("S3CRET"));
    assert!(!config.is_admin_token("s3cret "));
    assert!(!config.is_admin_token(""));
  }

  #[test]
  fn figment_overrides_take_precedence() {
    let figment = figment()
      .merge(("admin_token", "override"))
      .merge((database_url_key(), "/tmp/override.db"));
    let config: AppConfig = figment.extract().unwrap();
    assert_eq!(config.admin_token, "override");
    assert_eq!(database_path(&figment).unwrap(), "/tmp/override.db");
  }

  #[test]
  fn default_token_is_detected() {
    let config = AppConfig { admin_token: String::from(DEFAULT_ADMIN_TOKEN) };
    assert!(config.uses_default_admin_token());
  }
}
