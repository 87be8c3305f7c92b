use axum::Router;
use sea_orm::DatabaseConnection;
use tokio::net::TcpListener;

use crate::{
  api,
  store::PgVectorStore,
  utils::{AppError, AppState, shutdown_signal},
};

const BIND_ADDR: &str = "0.0.0.0:5000";

pub async fn server(db: DatabaseConnection) -> Result<(), AppError> {
  let app_state = AppState::new(PgVectorStore::new(db));

  let app = Router::new().merge(api::app()).with_state(app_state);

  let listener = TcpListener::bind(BIND_ADDR).await?;

  tracing::info!("server started at http://{BIND_ADDR}");

  axum::serve(listener, app)
    .with_graceful_shutdown(shutdown_signal())
    .await?;

  Ok(())
}
