use axum::{
  Json,
  extract::{Query, State},
};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::{
  core,
  utils::{AppError, AppState},
};

use super::core_error;

#[derive(Deserialize, IntoParams)]
pub struct CompareParams {
  /// First word to compare
  pub string1: Option<String>,
  /// Second word to compare
  pub string2: Option<String>,
}

#[derive(Serialize, ToSchema)]
pub struct CompareResponse {
  /// Cosine similarity, or null when either word has no stored vector
  pub result: Option<f64>,
}

/// Compare two stored words by cosine similarity
#[utoipa::path(
  get,
  path = "/compare",
  params(CompareParams),
  responses(
    (status = 200, description = "Similarity result; null when either word is unknown", body = CompareResponse),
    (status = 400, description = "string1 or string2 query param missing")
  )
)]
#[axum::debug_handler]
pub async fn compare(
  State(state): State<AppState>,
  Query(params): Query<CompareParams>,
) -> Result<Json<CompareResponse>, AppError> {
  let result = core::compare(
    params.string1.as_deref(),
    params.string2.as_deref(),
    &state.store,
  )
  .await
  .map_err(core_error)?;

  Ok(Json(CompareResponse { result }))
}
