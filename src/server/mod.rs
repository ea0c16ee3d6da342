
pub mod admin;
pub mod api;
pub mod auth;
pub mod cors;
pub mod data_access;
pub mod error;
pub mod highscores;
pub mod openapi;
pub mod validation;

use crate::config::{self, AppConfig};
use crate::db::Db;
use crate::setup;

use rocket::{Rocket, Build, Ignite, Route};
use rocket::fairing::{self, AdHoc};
use rocket::figment::Figment;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

/// Prepares the database directory and launches the server, returning
/// once it shuts down.
pub async fn run_server(figment: Figment) -> anyhow::Result<Rocket<Ignite>> {
  let db_path = config::database_path(&figment)?;
  setup::prepare_database_dir(&db_path)?;
  let rocket = build_rocket(figment).launch().await?;
  Ok(rocket)
}

pub fn build_rocket(figment: Figment) -> Rocket<Build> {
  let mut base_routes = Vec::new();
  base_routes.extend(api::api_routes());
  base_routes.extend(highscores::highscore_routes());
  base_routes.extend(admin::admin_routes());
  base_routes.extend(cors::cors_routes());

  rocket::custom(figment)
    .attach(Db::fairing())
    .attach(AdHoc::config::<AppConfig>())
    .attach(AdHoc::on_liftoff("Admin Token Check", |rocket| Box::pin(async move {
      if rocket.state::<AppConfig>().is_some_and(AppConfig::uses_default_admin_token) {
        log::warn!("ADMIN_TOKEN is not set; the placeholder admin token is in use");
      }
    })))
    .attach(AdHoc::try_on_ignite("Database Migrations", run_migrations))
    .attach(cors::WildcardCors)
    .mount("/", base_routes)
    .mount("/", swagger_routes())
    .register("/", error::catchers())
}

fn swagger_routes() -> Vec<Route> {
  SwaggerUi::new("/docs/<_..>")
    .url(openapi::OPENAPI_JSON_PATH, openapi::ApiDoc::openapi())
    .into()
}

async fn run_migrations(rocket: Rocket<Build>) -> fairing::Result {
  let Some(db) = Db::get_one(&rocket).await else {
    log::error!("No database connection available for migrations");
    return Err(rocket);
  };
  match db.run(|conn| setup::run_pending_migrations(conn)).await {
    Ok(applied) => {
      log::info!("Database is up to date ({} migrations applied)", applied);
      Ok(rocket)
    }
    Err(err) => {
      log::error!("Failed to run database migrations: {}", err);
      Err(rocket)
    }
  }
}
