
//! Common error messages, as constants to be reused by endpoints.

pub const NOT_FOUND: &'static str = "Not Found";
pub const GAME_NOT_FOUND: &'static str = "Game not found";
pub const UNKNOWN_DB_ERROR: &'static str = "An unexpected database error occurred";
pub const DB_UNAVAILABLE: &'static str = "Database unavailable";
pub const BAD_REQUEST: &'static str = "Bad Request";
pub const UNPROCESSABLE_ENTITY: &'static str = "Unprocessable Entity";
pub const UNAUTHORIZED: &'static str = "Unauthorized";
pub const INVALID_ADMIN_TOKEN: &'static str = "Invalid admin token";
pub const MISSING_CREDENTIALS: &'static str = "Provide X-API-Key (game owner) or X-Admin-Token (admin)";
pub const FORBIDDEN: &'static str = "Forbidden";
pub const INVALID_CREDENTIALS: &'static str = "Unauthorized. Provide valid X-API-Key (game owner) or X-Admin-Token (admin)";
pub const INVALID_LIMIT: &'static str = "limit must be an integer between 1 and 50";
