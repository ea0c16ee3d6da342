
pub mod args;
pub mod config;
pub mod db;
pub mod logging;
pub mod server;
pub mod setup;
pub mod util;
