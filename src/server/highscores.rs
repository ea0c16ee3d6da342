
//! Leaderboard endpoints: submitting, listing, and clearing scores.

use super::auth::GameCredentials;
use super::data_access::{
  GameOwnedExt, NewHighscoreDao, HighscoreResponse, LeaderboardResponse, ClearHighscoresResponse,
};
use super::error::{ApiError, ApiSuccessResponse, ApiSuccessResponseBody, ErrorPayload};
use super::validation::{ValidatedJson, parse_leaderboard_limit};
use crate::db::{self, models, schema, Db};

use rocket::{Route, routes, get, post, delete};
use diesel::prelude::*;

pub fn highscore_routes() -> Vec<Route> {
  routes![
    submit_highscore,
    get_highscores,
    clear_highscores,
  ]
}

/// Submits a new highscore for a game.
///
/// This endpoint is public; games call it directly from the client.
#[utoipa::path(
  post,
  path="/games/{public_id}/highscores",
  tag="highscores",
  security(()),
  params(
    ("public_id" = String, Path, description = "Public game identifier"),
  ),
  request_body = NewHighscoreDao,
  responses(
    (status = 201, description = "Highscore stored", body = ApiSuccessResponseBody<HighscoreResponse>),
    (status = 404, description = "Game not found", body = ErrorPayload),
    (status = 422, description = "Invalid player name or score", body = ErrorPayload),
  ),
)]
#[post("/games/<public_id>/highscores", data = "<params>")]
pub async fn submit_highscore(
  public_id: String,
  params: Result<ValidatedJson<NewHighscoreDao>, ApiError>,
  db: Db,
) -> Result<ApiSuccessResponse<HighscoreResponse>, ApiError> {
  let params = params?.into_inner();
  let created_at = chrono::Utc::now().naive_utc();
  let entry = db.run(move |conn| {
    conn.immediate_transaction::<_, ApiError, _>(|conn| {
      let game_id = schema::games::table
        .filter(schema::games::public_id.eq(&public_id))
        .select(schema::games::id)
        .first::<i32>(conn)
        .optional()?
        .ok_or_else(ApiError::game_not_found)?;
      let new_entry = models::NewHighscore {
        game_id,
        player_name: params.player_name,
        score: params.score,
        created_at,
      };
      diesel::insert_into(schema::highscores::table)
        .values(&new_entry)
        .execute(conn)?;
      Ok(new_entry)
    })
  }).await?;
  Ok(ApiSuccessResponse::created(HighscoreResponse::from(entry)))
}

/// Returns the top highscores of a game.
///
/// Scores are sorted from highest to lowest. Tied scores are sorted
/// by submission time, earliest first.
#[utoipa::path(
  get,
  path="/games/{public_id}/highscores",
  tag="highscores",
  security(()),
  params(
    ("public_id" = String, Path, description = "Public game identifier"),
    ("limit" = Option<i64>, Query, description = "Number of scores to return, 1 to 50 (default 10)"),
  ),
  responses(
    (status = 200, description = "Leaderboard", body = ApiSuccessResponseBody<LeaderboardResponse>),
    (status = 404, description = "Game not found", body = ErrorPayload),
    (status = 422, description = "Invalid limit", body = ErrorPayload),
  ),
)]
#[get("/games/<public_id>/highscores?<limit>")]
pub async fn get_highscores(
  public_id: String,
  limit: Option<&str>,
  db: Db,
) -> Result<ApiSuccessResponse<LeaderboardResponse>, ApiError> {
  let limit = parse_leaderboard_limit(limit)?;
  let response = db.run(move |conn| {
    let game = db::find_game(&public_id, conn)
      .optional()?
      .ok_or_else(ApiError::game_not_found)?;
    let highscores = db::load_leaderboard(game.id, limit, conn)?
      .into_iter()
      .map(HighscoreResponse::from)
      .collect();
    Ok::<_, ApiError>(LeaderboardResponse { game_id: game.public_id, highscores })
  }).await?;
  Ok(ApiSuccessResponse::new(response))
}

/// Deletes every highscore of a game, keeping the game itself.
///
/// Requires the game's own API key or the admin token.
#[utoipa::path(
  delete,
  path="/games/{public_id}/highscores",
  tag="highscores",
  security(("X-API-Key" = []), ("X-Admin-Token" = [])),
  params(
    ("public_id" = String, Path, description = "Public game identifier"),
  ),
  responses(
    (status = 200, description = "Highscores cleared", body = ApiSuccessResponseBody<ClearHighscoresResponse>),
    (status = 401, description = "No credentials supplied", body = ErrorPayload),
    (status = 403, description = "Wrong API key", body = ErrorPayload),
    (status = 404, description = "Game not found", body = ErrorPayload),
  ),
)]
#[delete("/games/<public_id>/highscores")]
pub async fn clear_highscores(
  public_id: String,
  credentials: GameCredentials,
  db: Db,
) -> Result<ApiSuccessResponse<ClearHighscoresResponse>, ApiError> {
  let (public_id, deleted) = db.run(move |conn| {
    conn.immediate_transaction::<_, ApiError, _>(|conn| {
      let game = db::find_game(&public_id, conn)
        .optional()?
        .check_permission(&credentials)?;
      let deleted = db::clear_highscores(game.id, conn)?;
      Ok((game.public_id, deleted))
    })
  }).await?;
  log::info!("Cleared {} highscores of game {}", deleted, public_id);
  Ok(ApiSuccessResponse::new(ClearHighscoresResponse { deleted }))
}
