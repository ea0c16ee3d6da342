
//! Authorization primitives for the highscores API.
//!
//! There are two independent credentials: the admin token, configured
//! once for the whole server, and the per-game API key handed to a
//! game's creator.

mod header;

pub use header::{X_API_KEY_HEADER, X_ADMIN_TOKEN_HEADER};

use crate::config::AppConfig;
use super::error::{messages, ApiError};
use header::header_value;

use rocket::http::Status;
use rocket::request::{self, Request, FromRequest};

/// Rocket request guard which succeeds only if the `X-Admin-Token`
/// header matches the configured admin token.
#[derive(Debug, Clone)]
pub struct AdminUser {
  _priv: (),
}

/// Credentials supplied with a request against a single game. This
/// guard never fails; it merely records what the caller sent.
/// Authorization against a concrete game happens in
/// [`GameOwned::check_permission`](super::data_access::GameOwned::check_permission).
#[derive(Debug, Clone, Default)]
pub struct GameCredentials {
  api_key: Option<String>,
  admin_token_presented: bool,
  is_admin: bool,
}

impl GameCredentials {
  pub fn new(api_key: Option<String>, is_admin: bool) -> Self {
    Self { api_key, admin_token_presented: is_admin, is_admin }
  }

  /// Credentials carrying an `X-Admin-Token` header which does not
  /// match the configured token.
  pub fn with_rejected_admin_token(api_key: Option<String>) -> Self {
    Self { api_key, admin_token_presented: true, is_admin: false }
  }

  pub fn api_key(&self) -> Option<&str> {
    self.api_key.as_deref()
  }

  pub fn is_admin(&self) -> bool {
    self.is_admin
  }

  /// Whether the caller sent any credential at all, valid or not.
  pub fn is_present(&self) -> bool {
    self.api_key.is_some() || self.admin_token_presented
  }
}

fn app_config<'r>(req: &'r Request<'_>) -> Result<&'r AppConfig, ApiError> {
  req.rocket()
    .state::<AppConfig>()
    .ok_or_else(|| ApiError::internal_server_error("Server configuration is unavailable"))
}

#[rocket::async_trait]
impl<'r> FromRequest<'r> for AdminUser {
  type Error = ApiError;

  async fn from_request(req: &'r Request<'_>) -> request::Outcome<Self, ApiError> {
    let config = match app_config(req) {
      Ok(config) => config,
      Err(err) => return request::Outcome::Error((err.status(), err)),
    };
    match header_value(req, X_ADMIN_TOKEN_HEADER) {
      Some(token) if config.is_admin_token(token) => request::Outcome::Success(AdminUser { _priv: () }),
      _ => {
        log::warn!("Rejected admin request to {}", req.uri());
        let err = ApiError::unauthorized().with_message(messages::INVALID_ADMIN_TOKEN);
        request::Outcome::Error((Status::Unauthorized, err))
      }
    }
  }
}

#[rocket::async_trait]
impl<'r> FromRequest<'r> for GameCredentials {
  type Error = ApiError;

  async fn from_request(req: &'r Request<'_>) -> request::Outcome<Self, ApiError> {
    let config = match app_config(req) {
      Ok(config) => config,
      Err(err) => return request::Outcome::Error((err.status(), err)),
    };
    let api_key = header_value(req, X_API_KEY_HEADER).map(str::to_owned);
    let credentials = match header_value(req, X_ADMIN_TOKEN_HEADER) {
      Some(token) if config.is_admin_token(token) => GameCredentials::new(api_key, true),
      Some(_) => {
        log::warn!("Rejected admin token on {}", req.uri());
        GameCredentials::with_rejected_admin_token(api_key)
      }
      None => GameCredentials::new(api_key, false),
    };
    request::Outcome::Success(credentials)
  }
}
