
//! Request guards and helpers for validating client input.

use super::error::{messages, ApiError};

use rocket::data::{self, Data, FromData};
use rocket::request::Request;
use rocket::serde::json::Json;
use serde::de::DeserializeOwned;
use validator::Validate;

use std::ops::RangeInclusive;

pub const DEFAULT_LEADERBOARD_LIMIT: i64 = 10;
pub const LEADERBOARD_LIMIT_RANGE: RangeInclusive<i64> = 1..=50;

/// Rocket data guard which parses a JSON body and validates it with
/// the `validator` crate.
///
/// Take this guard as `Result<ValidatedJson<T>, ApiError>` to report
/// the specific validation failure to the client. Otherwise Rocket
/// falls back to the generic 422 catcher.
#[derive(Debug, Clone)]
pub struct ValidatedJson<T>(pub T);

impl<T> ValidatedJson<T> {
  pub fn into_inner(self) -> T {
    self.0
  }
}

#[rocket::async_trait]
impl<'r, T: DeserializeOwned + Validate + Send> FromData<'r> for ValidatedJson<T> {
  type Error = ApiError;

  async fn from_data(req: &'r Request<'_>, data: Data<'r>) -> data::Outcome<'r, Self> {
    match Json::<T>::from_data(req, data).await {
      data::Outcome::Success(Json(value)) => match value.validate() {
        Ok(()) => data::Outcome::Success(ValidatedJson(value)),
        Err(errors) => {
          let err = ApiError::from(errors);
          data::Outcome::Error((err.status(), err))
        }
      },
      data::Outcome::Error((status, err)) => {
        let err = ApiError::unprocessable_entity().with_message(format!("Invalid JSON: {}", err));
        data::Outcome::Error((status, err))
      }
      data::Outcome::Forward(forward) => data::Outcome::Forward(forward),
    }
  }
}

/// Parses the `limit` query parameter of a leaderboard request.
/// Absent means [`DEFAULT_LEADERBOARD_LIMIT`]; anything that is not an
/// integer within [`LEADERBOARD_LIMIT_RANGE`] is rejected.
pub fn parse_leaderboard_limit(limit: Option<&str>) -> Result<i64, ApiError> {
  let Some(limit) = limit else {
    return Ok(DEFAULT_LEADERBOARD_LIMIT);
  };
  limit.trim()
    .parse::<i64>()
    .ok()
    .filter(|n| LEADERBOARD_LIMIT_RANGE.contains(n))
    .ok_or_else(|| ApiError::unprocessable_entity().with_message(messages::INVALID_LIMIT))
}
