
//! Admin-only endpoints. All of these require the `X-Admin-Token`
//! header.

use crate::db::{self, schema, models, Db};
use super::auth::AdminUser;
use super::data_access::{GameInfoResponse, GamesResponse};
use super::error::{ApiSuccessResponse, ApiSuccessResponseBody, ApiError, ErrorPayload};

use rocket::{Route, routes, get};
use diesel::prelude::*;

pub fn admin_routes() -> Vec<Route> {
  routes![list_games, get_game]
}

/// Lists every game on the server, oldest first.
#[utoipa::path(
  get,
  path="/games",
  tag="admin",
  security(("X-Admin-Token" = [])),
  responses(
    (status = 200, description = "All games", body = ApiSuccessResponseBody<GamesResponse>),
    (status = 401, description = "Invalid admin token", body = ErrorPayload),
  ),
)]
#[get("/games")]
pub async fn list_games(
  _admin_user: AdminUser,
  db: Db,
) -> Result<ApiSuccessResponse<GamesResponse>, ApiError> {
  let games = db.run(|conn| {
    schema::games::table
      .order((schema::games::created_at.asc(), schema::games::id.asc()))
      .select(models::Game::as_select())
      .load::<models::Game>(conn)
  }).await?;
  let games = games.into_iter().map(GameInfoResponse::from).collect();
  Ok(ApiSuccessResponse::new(GamesResponse { games }))
}

/// Gets details about the game with the given public identifier.
///
/// The game's API key is never included.
#[utoipa::path(
  get,
  path="/games/{public_id}",
  tag="admin",
  security(("X-Admin-Token" = [])),
  params(
    ("public_id" = String, Path, description = "Public game identifier"),
  ),
  responses(
    (status = 200, description = "Game details", body = ApiSuccessResponseBody<GameInfoResponse>),
    (status = 401, description = "Invalid admin token", body = ErrorPayload),
    (status = 404, description = "Game not found", body = ErrorPayload),
  ),
)]
#[get("/games/<public_id>")]
pub async fn get_game(
  _admin_user: AdminUser,
  public_id: String,
  db: Db,
) -> Result<ApiSuccessResponse<GameInfoResponse>, ApiError> {
  let game = db.run(move |conn| db::find_game(&public_id, conn).optional()).await?
    .ok_or_else(ApiError::game_not_found)?;
  Ok(ApiSuccessResponse::new(GameInfoResponse::from(game)))
}
