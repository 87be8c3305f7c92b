use sea_orm::Database;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod api;
mod core;
mod entities;
mod migration;
mod server;
mod store;
mod utils;

use crate::migration::{Migrator, MigratorTrait};
use crate::server::server;
use crate::utils::{APP_ENV, AppError};

#[tokio::main]
async fn main() -> Result<(), AppError> {
  tracing_subscriber::registry()
    .with(
      tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| format!("{}=debug", env!("CARGO_CRATE_NAME")).into()),
    )
    .with(tracing_subscriber::fmt::layer())
    .init();
  dotenvy::dotenv().ok();

  let db = Database::connect(APP_ENV.database_url.as_str()).await?;

  // Create the glove_vectors table if it does not exist yet
  Migrator::up(&db, None).await?;

  server(db).await?;

  Ok(())
}
