
//! Request and response bodies, plus ownership checks for games.

use crate::db::models;
use super::auth::GameCredentials;
use super::error::{messages, ApiError};

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use utoipa::ToSchema;
use validator::Validate;

/// Upper bound on a submitted score.
pub const MAX_SCORE: i64 = 1_000_000_000;

/// Trait for objects guarded by a game's owner API key.
pub trait GameOwned {
  fn owner_api_key(&self) -> &str;

  /// Check the caller's credentials against this object. An
  /// administrator may access any object. Otherwise the caller must
  /// present exactly the owning game's API key. A missing object is
  /// reported as not found before any credential is inspected. Sending
  /// no credential is 401, sending a wrong one is 403.
  fn check_permission(object: Option<Self>, credentials: &GameCredentials) -> Result<Self, ApiError>
  where Self: Sized {
    let Some(object) = object else {
      return Err(ApiError::game_not_found());
    };
    if credentials.is_admin() {
      return Ok(object);
    }
    if credentials.api_key() == Some(object.owner_api_key()) {
      return Ok(object);
    }
    if credentials.is_present() {
      Err(ApiError::forbidden().with_message(messages::INVALID_CREDENTIALS))
    } else {
      Err(ApiError::unauthorized().with_message(messages::MISSING_CREDENTIALS))
    }
  }
}

/// Extension trait for `Option<T>` where `T` implements [`GameOwned`].
pub trait GameOwnedExt: Sized {
  type Target: GameOwned;

  fn check_permission(self, credentials: &GameCredentials) -> Result<Self::Target, ApiError>;
}

impl GameOwned for models::Game {
  fn owner_api_key(&self) -> &str {
    &self.api_key
  }
}

impl<T: GameOwned + Sized> GameOwnedExt for Option<T> {
  type Target = T;

  fn check_permission(self, credentials: &GameCredentials) -> Result<T, ApiError> {
    T::check_permission(self, credentials)
  }
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct NewGameDao {
  /// Display name of the game. Surrounding whitespace is removed.
  #[schema(examples("Space Frogs"))]
  #[serde(deserialize_with = "deserialize_trimmed")]
  #[validate(length(min = 1, max = 100))]
  pub name: String,
  /// Contact address of the game's creator. Stored in lowercase.
  #[schema(examples("dev@example.com"))]
  #[serde(deserialize_with = "deserialize_lowercase")]
  #[validate(email)]
  pub email: String,
}

/// A game as returned to its creator.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct GameResponse {
  #[schema(examples("g_3q2-7wEkZ_Vd1tXc"))]
  pub public_id: String,
  pub name: String,
  pub email: String,
  /// The game's API key is only supplied upon initial game creation
  /// and cannot be recovered after the fact.
  pub api_key: String,
  #[schema(value_type = String, example = "2025-11-16T12:30:00Z")]
  #[serde(serialize_with = "serialize_datetime")]
  pub created_at: chrono::NaiveDateTime,
}

/// A game as seen by an administrator. Never includes the contact
/// address or the API key.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct GameInfoResponse {
  pub public_id: String,
  pub name: String,
  #[schema(value_type = String, example = "2025-11-16T12:30:00Z")]
  #[serde(serialize_with = "serialize_datetime")]
  pub created_at: chrono::NaiveDateTime,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct GamesResponse {
  /// Every game on the server, oldest first.
  pub games: Vec<GameInfoResponse>,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct DeleteGameResponse {
  pub public_id: String,
  /// Number of highscores removed along with the game.
  pub deleted_highscores: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize, Validate, ToSchema)]
pub struct NewHighscoreDao {
  /// Surrounding whitespace is removed before the length check.
  #[schema(examples("P1"))]
  #[serde(deserialize_with = "deserialize_trimmed")]
  #[validate(length(min = 1, max = 32))]
  pub player_name: String,
  #[schema(minimum = 0, maximum = 1_000_000_000, examples(100))]
  #[validate(range(min = 0, max = 1000000000))]
  pub score: i64,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct HighscoreResponse {
  pub player_name: String,
  pub score: i64,
  /// When the score was submitted.
  #[schema(value_type = String, example = "2025-11-16T12:30:00Z")]
  #[serde(serialize_with = "serialize_datetime")]
  pub created_at: chrono::NaiveDateTime,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct LeaderboardResponse {
  /// Public identifier of the game.
  pub game_id: String,
  /// Highscores sorted in descending order by score. Tied scores are
  /// sorted by submission time, with earlier scores ranking higher.
  pub highscores: Vec<HighscoreResponse>,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct ClearHighscoresResponse {
  /// Number of highscores removed.
  pub deleted: usize,
}

impl From<models::NewGame> for GameResponse {
  fn from(g: models::NewGame) -> Self {
    Self {
      public_id: g.public_id,
      name: g.name,
      email: g.email,
      api_key: g.api_key,
      created_at: g.created_at,
    }
  }
}

impl From<models::Game> for GameInfoResponse {
  fn from(g: models::Game) -> Self {
    Self {
      public_id: g.public_id,
      name: g.name,
      created_at: g.created_at,
    }
  }
}

impl From<models::Highscore> for HighscoreResponse {
  fn from(h: models::Highscore) -> Self {
    Self {
      player_name: h.player_name,
      score: h.score,
      created_at: h.created_at,
    }
  }
}

impl From<models::NewHighscore> for HighscoreResponse {
  fn from(h: models::NewHighscore) -> Self {
    Self {
      player_name: h.player_name,
      score: h.score,
      created_at: h.created_at,
    }
  }
}

fn serialize_datetime<S>(datetime: &chrono::NaiveDateTime, serializer: S) -> Result<S::Ok, S::Error>
where S: Serializer {
  let formatted = datetime.format("%Y-%m-%dT%H:%M:%SZ").to_string();
  serializer.serialize_str(&formatted)
}

fn deserialize_trimmed<'de, D>(deserializer: D) -> Result<String, D::Error>
where D: Deserializer<'de> {
  let s = String::deserialize(deserializer)?;
  Ok(s.trim().to_owned())
}

fn deserialize_lowercase<'de, D>(deserializer: D) -> Result<String, D::Error>
where D: Deserializer<'de> {
  let s = String::deserialize(deserializer)?;
  Ok(s.trim().to_lowercase())
}
