
use rocket::request::Request;

/// Header carrying a game owner's secret API key.
pub const X_API_KEY_HEADER: &str = "X-API-Key";

/// Header carrying the server-wide admin token.
pub const X_ADMIN_TOKEN_HEADER: &str = "X-Admin-Token";

/// Returns the value of `name`, treating an empty header as absent.
pub fn header_value<'r>(req: &'r Request<'_>, name: &str) -> Option<&'r str> {
  req.headers()
    .get_one(name)
    .filter(|value| !value.is_empty())
}
