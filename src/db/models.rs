
use diesel::prelude::*;

#[derive(Queryable, Selectable, Identifiable, Debug, Clone)]
#[diesel(table_name = super::schema::games)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct Game {
  pub id: i32,
  pub public_id: String,
  pub name: String,
  pub email: String,
  pub api_key: String,
  pub created_at: chrono::NaiveDateTime,
}

#[derive(Insertable, Debug, Clone)]
#[diesel(table_name = super::schema::games)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct NewGame {
  pub public_id: String,
  pub name: String,
  pub email: String,
  pub api_key: String,
  pub created_at: chrono::NaiveDateTime,
}

#[derive(Queryable, Selectable, Identifiable, Associations, Debug, Clone)]
#[diesel(belongs_to(Game))]
#[diesel(table_name = super::schema::highscores)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct Highscore {
  pub id: i32,
  pub game_id: i32,
  pub player_name: String,
  pub score: i64,
  pub created_at: chrono::NaiveDateTime,
}

#[derive(Insertable, Debug, Clone)]
#[diesel(table_name = super::schema::highscores)]
#[diesel(check_for_backend(diesel::sqlite::Sqlite))]
pub struct NewHighscore {
  pub game_id: i32,
  pub player_name: String,
  pub score: i64,
  pub created_at: chrono::NaiveDateTime,
}
