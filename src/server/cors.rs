
//! Wildcard CORS support, so that browser games hosted anywhere can
//! call the API.

use rocket::fairing::{Fairing, Info, Kind};
use rocket::http::{Header, Status};
use rocket::{Request, Response, Route, options, routes};

/// Fairing which adds wildcard CORS headers to every response,
/// including error responses.
#[derive(Debug, Clone, Copy, Default)]
pub struct WildcardCors;

pub const ALLOWED_METHODS: &str = "GET, POST, DELETE, OPTIONS";
pub const ALLOWED_HEADERS: &str = "Content-Type, X-API-Key, X-Admin-Token";

pub fn set_wildcard_cors(response: &mut Response<'_>) {
  response.set_header(Header::new("Access-Control-Allow-Origin", "*"));
  response.set_header(Header::new("Access-Control-Allow-Methods", ALLOWED_METHODS));
  response.set_header(Header::new("Access-Control-Allow-Headers", ALLOWED_HEADERS));
}

#[rocket::async_trait]
impl Fairing for WildcardCors {
  fn info(&self) -> Info {
    Info {
      name: "Wildcard CORS",
      kind: Kind::Response,
    }
  }

  async fn on_response<'r>(&self, _req: &'r Request<'_>, response: &mut Response<'r>) {
    set_wildcard_cors(response);
  }
}

pub fn cors_routes() -> Vec<Route> {
  routes![preflight]
}

/// Answers browser preflight requests for any path.
#[options("/<_..>")]
pub fn preflight() -> Status {
  Status::NoContent
}
