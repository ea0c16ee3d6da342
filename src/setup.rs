
//! Database preparation performed before (or instead of) serving
//! requests.

use crate::config;
use crate::db::MIGRATIONS;

use anyhow::Context;
use diesel::{Connection, SqliteConnection};
use diesel_migrations::MigrationHarness;
use rocket::figment::Figment;

use std::fs;
use std::path::Path;

/// Creates the directory holding the SQLite file, if needed.
pub fn prepare_database_dir(db_path: &str) -> anyhow::Result<()> {
  let Some(parent) = Path::new(db_path).parent() else {
    return Ok(());
  };
  if !parent.as_os_str().is_empty() {
    fs::create_dir_all(parent)
      .with_context(|| format!("Could not create database directory {}", parent.display()))?;
  }
  Ok(())
}

/// Applies every pending migration, returning how many were applied.
pub fn run_pending_migrations(conn: &mut SqliteConnection) -> anyhow::Result<usize> {
  let applied = conn.run_pending_migrations(MIGRATIONS)
    .map_err(|err| anyhow::anyhow!("Migration failed: {}", err))?;
  Ok(applied.len())
}

/// Brings the configured database up to date without starting the
/// server.
pub fn migrate_database(figment: &Figment) -> anyhow::Result<()> {
  let db_path = config::database_path(figment)?;
  prepare_database_dir(&db_path)?;

  println!("Running database migrations on {} ...", db_path);
  let mut connection = SqliteConnection::establish(&db_path)?;
  let applied = run_pending_migrations(&mut connection)?;
  println!("Successfully applied {} migrations.", applied);
  Ok(())
}

#[cfg(test)]
mod tests {
  use super::*;

  use diesel::prelude::*;
  use crate::db::schema;

  #[test]
  fn migrations_create_both_tables() {
    let mut conn = SqliteConnection::establish(":memory:").unwrap();
    assert_eq!(run_pending_migrations(&mut conn).unwrap(), 1);
    let games: i64 = schema::games::table.count().get_result(&mut conn).unwrap();
    let highscores: i64 = schema::highscores::table.count().get_result(&mut conn).unwrap();
    assert_eq!((games, highscores), (0, 0));
  }

  #[test]
  fn migrations_are_idempotent() {
    let mut conn = SqliteConnection::establish(":memory:").unwrap();
    run_pending_migrations(&mut conn).unwrap();
    assert_eq!(run_pending_migrations(&mut conn).unwrap(), 0);
  }

  #[test]
  fn database_dir_is_created() {
    let dir = tempfile::tempdir().unwrap();
    let db_path = dir.path().join("nested").join("highscores.db");
    prepare_database_dir(db_path.to_str().unwrap()).unwrap();
    assert!(dir.path().join("nested").is_dir());
  }

  #[test]
  fn bare_file_name_needs_no_dir() {
    prepare_database_dir("highscores.db").unwrap();
  }
}
