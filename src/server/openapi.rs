
use super::{admin, api, highscores};
use super::auth::{X_API_KEY_HEADER, X_ADMIN_TOKEN_HEADER};

use utoipa::{Modify, OpenApi, openapi};
use utoipa::openapi::security::{SecurityScheme, ApiKey, ApiKeyValue};

/// Where the generated OpenAPI document is served.
pub const OPENAPI_JSON_PATH: &str = "/api-docs/openapi.json";

#[derive(OpenApi)]
#[openapi(
  info(
    title = "Highscores API",
    description = "A lightweight REST API for managing game leaderboards",
  ),
  paths(
    api::healthcheck, api::create_game, api::delete_game,
    highscores::submit_highscore, highscores::get_highscores, highscores::clear_highscores,
    admin::list_games, admin::get_game,
  ),
  tags(
    (name = "health", description = "Server status"),
    (name = "game", description = "Game creation and deletion"),
    (name = "highscores", description = "Leaderboard access and submission"),
    (name = "admin", description = "Administrative access to all games"),
  ),
  modifiers(&SecurityAddon),
)]
pub struct ApiDoc;

pub struct SecurityAddon;

impl Modify for SecurityAddon {
  fn modify(&self, openapi: &mut openapi::OpenApi) {
    let mut components = openapi.components.take().unwrap_or_default();

    let api_key = SecurityScheme::ApiKey(ApiKey::Header(ApiKeyValue::new(X_API_KEY_HEADER)));
    components.add_security_scheme("X-API-Key", api_key);

    let admin_token = SecurityScheme::ApiKey(ApiKey::Header(ApiKeyValue::new(X_ADMIN_TOKEN_HEADER)));
    components.add_security_scheme("X-Admin-Token", admin_token);

    openapi.components = Some(components);
  }
}
