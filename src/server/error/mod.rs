pub mod messages;

use rocket::{Request, Catcher, catch, catchers};
use rocket::http::Status;
use rocket::response::{self, Responder};
use rocket::serde::json::Json;
use serde::{Serialize, Deserialize};
use thiserror::Error;
use diesel::result::{DatabaseErrorKind, Error as DieselError};
use utoipa::ToSchema;
use validator::ValidationErrors;

use std::fmt::Display;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum ApiStatus {
  Success,
  Error,
}

/// Rocket responder wrapping a successful JSON body in the standard
/// `{"status": "success", ...}` envelope.
#[derive(Debug, Clone)]
pub struct ApiSuccessResponse<T> {
  status: Status,
  json: Json<ApiSuccessResponseBody<T>>,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct ApiSuccessResponseBody<T> {
  status: ApiStatus,
  #[serde(flatten)]
  body: T,
}

/// Rocket responder which responds using a JSON-like object
/// indicating what went wrong.
#[derive(Debug, Clone, Error)]
#[error("{message}")]
pub struct ApiError {
  status: Status,
  message: String,
}

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct ErrorPayload {
  status: ApiStatus,
  reason: String,
}

impl<T: Serialize> ApiSuccessResponse<T> {
  pub fn new(body: T) -> ApiSuccessResponse<T> {
    Self::with_status(Status::Ok, body)
  }

  /// A 201 Created response, for endpoints which insert a new row.
  pub fn created(body: T) -> ApiSuccessResponse<T> {
    Self::with_status(Status::Created, body)
  }

  fn with_status(status: Status, body: T) -> ApiSuccessResponse<T> {
    let body = ApiSuccessResponseBody {
      status: ApiStatus::Success,
      body
    };
    ApiSuccessResponse {
      status,
      json: Json(body),
    }
  }
}

impl ApiError {
  pub fn bad_request() -> ApiError {
    ApiError {
      status: Status::BadRequest,
      message: messages::BAD_REQUEST.to_string(),
    }
  }

  pub fn unauthorized() -> ApiError {
    ApiError {
      status: Status::Unauthorized,
      message: messages::UNAUTHORIZED.to_string(),
    }
  }

  pub fn forbidden() -> ApiError {
    ApiError {
      status: Status::Forbidden,
      message: messages::FORBIDDEN.to_string(),
    }
  }

  pub fn not_found() -> ApiError {
    ApiError {
      status: Status::NotFound,
      message: messages::NOT_FOUND.to_string(),
    }
  }

  pub fn game_not_found() -> ApiError {
    ApiError::not_found().with_message(messages::GAME_NOT_FOUND)
  }

  pub fn conflict(message: &str) -> ApiError {
    ApiError {
      status: Status::Conflict,
      message: message.to_string(),
    }
  }

  /// A 422 Unprocessable Entity, used for any request whose payload
  /// or query parameters fail validation.
  pub fn unprocessable_entity() -> ApiError {
    ApiError {
      status: Status::UnprocessableEntity,
      message: messages::UNPROCESSABLE_ENTITY.to_string(),
    }
  }

  /// A 500 Internal Server Error.
  ///
  /// This method takes [`Display`] rather than `str`, as we
  /// frequently pass error-like things to it. We can't take
  /// [`Error`](std::error::Error) since `anyhow` doesn't implement
  /// that.
  pub fn internal_server_error(message: impl Display) -> ApiError {
    ApiError {
      status: Status::InternalServerError,
      message: message.to_string(),
    }
  }

  pub fn service_unavailable() -> ApiError {
    ApiError {
      status: Status::ServiceUnavailable,
      message: messages::DB_UNAVAILABLE.to_string(),
    }
  }

  pub fn status(&self) -> Status {
    self.status
  }

  pub fn message(&self) -> &str {
    &self.message
  }

  pub fn with_message(mut self, message: impl Into<String>) -> Self {
    self.message = message.into();
    self
  }
}

impl ErrorPayload {
  pub fn new(message: String) -> ErrorPayload {
    ErrorPayload {
      status: ApiStatus::Error,
      reason: message,
    }
  }
}

impl<'r, T: Serialize> Responder<'r, 'static> for ApiSuccessResponse<T> {
  fn respond_to(self, req: &'r Request<'_>) -> response::Result<'static> {
    (self.status, self.json).respond_to(req)
  }
}

impl<'r> Responder<'r, 'static> for ApiError {
  fn respond_to(self, req: &'r Request<'_>) -> response::Result<'static> {
    let payload = ErrorPayload::new(self.message);
    (self.status, Json(payload)).respond_to(req)
  }
}

impl From<DieselError> for ApiError {
  fn from(err: DieselError) -> ApiError {
    if let DieselError::NotFound = err {
      ApiError::not_found()
    } else if let DieselError::DatabaseError(kind, info) = err {
      match kind {
        DatabaseErrorKind::UniqueViolation =>
          ApiError::conflict(&format!("Uniqueness error: {}", info.message())),
        DatabaseErrorKind::CheckViolation =>
          ApiError::unprocessable_entity().with_message(format!("Check violation: {}", info.message())),
        _ => {
          log::error!("Database error: {}", info.message());
          ApiError::internal_server_error(messages::UNKNOWN_DB_ERROR)
        }
      }
    } else {
      log::error!("Database error: {}", err);
      ApiError::internal_server_error(messages::UNKNOWN_DB_ERROR)
    }
  }
}

impl From<ValidationErrors> for ApiError {
  fn from(err: ValidationErrors) -> ApiError {
    ApiError::unprocessable_entity().with_message(format!("Validation failed: {}", err))
  }
}

pub fn catchers() -> Vec<Catcher> {
  catchers![
    bad_request_catcher,
    unauthorized_catcher,
    forbidden_catcher,
    not_found_catcher,
    unprocessable_entity_catcher,
    internal_server_error_catcher,
    service_unavailable_catcher,
  ]
}

#[catch(400)]
pub fn bad_request_catcher(_: &Request) -> ApiError {
  ApiError::bad_request()
}

#[catch(401)]
pub fn unauthorized_catcher(_: &Request) -> ApiError {
  ApiError::unauthorized().with_message(messages::INVALID_ADMIN_TOKEN)
}

#[catch(403)]
pub fn forbidden_catcher(_: &Request) -> ApiError {
  ApiError::forbidden()
}

#[catch(404)]
pub fn not_found_catcher(_: &Request) -> ApiError {
  ApiError::not_found()
}

#[catch(422)]
pub fn unprocessable_entity_catcher(_: &Request) -> ApiError {
  ApiError::unprocessable_entity()
}

#[catch(500)]
pub fn internal_server_error_catcher(_: &Request) -> ApiError {
  ApiError::internal_server_error("Internal Server Error")
}

#[catch(503)]
pub fn service_unavailable_catcher(_: &Request) -> ApiError {
  ApiError::service_unavailable()
}

#[cfg(test)]
mod tests {
  use super::*;

  use validator::Validate;

  #[derive(Validate)]
  struct Bounded {
    #[validate(range(min = 0, max = 10))]
    value: i64,
  }

  #[test]
  fn diesel_not_found_is_404() {
    let err = ApiError::from(DieselError::NotFound);
    assert_eq!(err.status(), Status::NotFound);
  }

  #[test]
  fn other_diesel_errors_hide_details() {
    let err = ApiError::from(DieselError::RollbackTransaction);
    assert_eq!(err.status(), Status::InternalServerError);
    assert_eq!(err.message(), messages::UNKNOWN_DB_ERROR);
  }

  #[test]
  fn validation_errors_are_422() {
    let errors = Bounded { value: 11 }.validate().unwrap_err();
    let err = ApiError::from(errors);
    assert_eq!(err.status(), Status::UnprocessableEntity);
    assert!(err.message().contains("value"));
  }

  #[test]
  fn success_body_is_flattened_into_envelope() {
    #[derive(Serialize)]
    struct Body {
      deleted: usize,
    }
    let body = ApiSuccessResponseBody { status: ApiStatus::Success, body: Body { deleted: 3 } };
    let value = serde_json::to_value(&body).unwrap();
    assert_eq!(value, serde_json::json!({ "status": "success", "deleted": 3 }));
  }
}
