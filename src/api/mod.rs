use axum::{
  Json, Router,
  http::StatusCode,
  routing::{get, post},
};
use utoipa::OpenApi;
use utoipa_scalar::{Scalar, Servable};

use crate::{
  core::CoreError,
  utils::{AppError, AppState},
};

mod compare;
mod vectors;

pub use compare::CompareResponse;
pub use vectors::RetrieveVectors;

#[derive(OpenApi)]
#[openapi(
  info(
    title = "GloVe Vector API",
    version = "0.1.0",
    description = "Cosine-similarity comparison and bulk lookup over stored word embeddings"
  ),
  paths(compare::compare, vectors::retrieve_vectors),
  components(schemas(CompareResponse, RetrieveVectors, crate::core::VectorEntry))
)]
pub struct ApiDoc;

async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
  Json(ApiDoc::openapi())
}

async fn health() -> &'static str {
  "ok"
}

/// Map core errors onto HTTP statuses: invalid input is the caller's
/// fault, a store failure is ours.
fn core_error(err: CoreError) -> AppError {
  match err {
    CoreError::InvalidRequest(_) => AppError::with_status(StatusCode::BAD_REQUEST, err),
    CoreError::Store(_) => AppError::new(err),
  }
}

pub fn app() -> Router<AppState> {
  Router::new()
    .route("/", get(health))
    .route("/compare", get(compare::compare))
    .route("/vectors", post(vectors::retrieve_vectors))
    .route("/openapi.json", get(openapi_json))
    .merge(Scalar::with_url("/openapi/", ApiDoc::openapi()))
}
