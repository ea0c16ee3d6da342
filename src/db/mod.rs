
//! Database schema, models, and the Rocket connection pool.

pub mod models;
pub mod schema;

use diesel::prelude::*;
use diesel::SqliteConnection;
use diesel_migrations::{embed_migrations, EmbeddedMigrations};
use rocket_sync_db_pools::database;

/// Migrations compiled into the binary and applied at startup.
pub const MIGRATIONS: EmbeddedMigrations = embed_migrations!("migrations");

/// Name of the database in Rocket's `databases` configuration table.
pub const DATABASE_NAME: &str = "highscores";

/// Pooled SQLite connection, usable as a Rocket request guard.
#[database("highscores")]
pub struct Db(SqliteConnection);

/// Looks up a game by its public identifier.
pub fn find_game(public_id: &str, conn: &mut SqliteConnection) -> QueryResult<models::Game> {
  schema::games::table
    .filter(schema::games::public_id.eq(public_id))
    .select(models::Game::as_select())
    .first(conn)
}

/// Loads the top `limit` scores of a game, highest first. Tied scores
/// rank by submission time, earliest first.
pub fn load_leaderboard(game_id: i32, limit: i64, conn: &mut SqliteConnection) -> QueryResult<Vec<models::Highscore>> {
  use schema::highscores::dsl;

  dsl::highscores
    .filter(dsl::game_id.eq(game_id))
    .order((dsl::score.desc(), dsl::created_at.asc(), dsl::id.asc()))
    .limit(limit)
    .select(models::Highscore::as_select())
    .load(conn)
}

/// Deletes every highscore of a game, returning the number of rows
/// removed.
pub fn clear_highscores(game_id: i32, conn: &mut SqliteConnection) -> QueryResult<usize> {
  diesel::delete(schema::highscores::table.filter(schema::highscores::game_id.eq(game_id)))
    .execute(conn)
}
