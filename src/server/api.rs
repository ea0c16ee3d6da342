
//! Endpoints for creating and deleting games.
//!
//! Highscore endpoints live in [`highscores`](crate::server::highscores)
//! and admin-only endpoints in [`admin`](crate::server::admin).

use super::auth::GameCredentials;
use super::data_access::{GameOwnedExt, NewGameDao, GameResponse, DeleteGameResponse};
use super::error::{ApiError, ApiSuccessResponse, ApiSuccessResponseBody, ErrorPayload};
use super::validation::ValidatedJson;
use crate::db::{self, models, schema, Db};
use crate::util::{generate_api_key, generate_public_id};

use rocket::{Route, routes, get, post, delete};
use diesel::prelude::*;
use serde::Serialize;
use utoipa::ToSchema;

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct HealthResponse {
  /// Version of the running server.
  pub version: String,
}

pub fn api_routes() -> Vec<Route> {
  routes![
    healthcheck,
    create_game,
    delete_game,
  ]
}

/// Reports that the server is up.
#[utoipa::path(
  get,
  path="/",
  tag="health",
  security(()),
  responses(
    (status = 200, description = "Server is healthy", body = ApiSuccessResponseBody<HealthResponse>),
  ),
)]
#[get("/")]
pub fn healthcheck() -> ApiSuccessResponse<HealthResponse> {
  ApiSuccessResponse::new(HealthResponse { version: env!("CARGO_PKG_VERSION").to_owned() })
}

/// Creates a new game.
///
/// Anyone can create a game. The returned `api_key` is needed to manage
/// the game later and cannot be accessed after this endpoint returns.
#[utoipa::path(
  post,
  path="/games",
  tag="game",
  security(()),
  request_body = NewGameDao,
  responses(
    (status = 201, description = "Game created successfully", body = ApiSuccessResponseBody<GameResponse>),
    (status = 422, description = "Invalid name or email", body = ErrorPayload),
  ),
)]
#[post("/games", data = "<params>")]
pub async fn create_game(
  params: Result<ValidatedJson<NewGameDao>, ApiError>,
  db: Db,
) -> Result<ApiSuccessResponse<GameResponse>, ApiError> {
  let params = params?.into_inner();
  let new_game = models::NewGame {
    public_id: generate_public_id(),
    name: params.name,
    email: params.email,
    api_key: generate_api_key(),
    created_at: chrono::Utc::now().naive_utc(),
  };
  let new_game = db.run(move |conn| {
    diesel::insert_into(schema::games::table)
      .values(&new_game)
      .execute(conn)?;
    Ok::<_, diesel::result::Error>(new_game)
  }).await?;
  log::info!("Created game {} ({})", new_game.public_id, new_game.name);
  Ok(ApiSuccessResponse::created(GameResponse::from(new_game)))
}

/// Deletes a game together with all of its highscores.
///
/// Requires the game's own API key or the admin token.
#[utoipa::path(
  delete,
  path="/games/{public_id}",
  tag="game",
  security(("X-API-Key" = []), ("X-Admin-Token" = [])),
  params(
    ("public_id" = String, Path, description = "Public game identifier"),
  ),
  responses(
    (status = 200, description = "Game deleted", body = ApiSuccessResponseBody<DeleteGameResponse>),
    (status = 401, description = "No credentials supplied", body = ErrorPayload),
    (status = 403, description = "Wrong API key", body = ErrorPayload),
    (status = 404, description = "Game not found", body = ErrorPayload),
  ),
)]
#[delete("/games/<public_id>")]
pub async fn delete_game(
  public_id: String,
  credentials: GameCredentials,
  db: Db,
) -> Result<ApiSuccessResponse<DeleteGameResponse>, ApiError> {
  let is_admin = credentials.is_admin();
  let response = db.run(move |conn| {
    conn.immediate_transaction::<_, ApiError, _>(|conn| {
      let game = db::find_game(&public_id, conn)
        .optional()?
        .check_permission(&credentials)?;
      // Explicit delete, since SQLite only honors ON DELETE CASCADE
      // when foreign keys are enabled on the connection.
      let deleted_highscores = db::clear_highscores(game.id, conn)?;
      diesel::delete(&game).execute(conn)?;
      Ok(DeleteGameResponse { public_id: game.public_id, deleted_highscores })
    })
  }).await?;
  log::info!(
    "Deleted game {} and {} highscores (by {})",
    response.public_id,
    response.deleted_highscores,
    if is_admin { "admin" } else { "owner" },
  );
  Ok(ApiSuccessResponse::new(response))
}
