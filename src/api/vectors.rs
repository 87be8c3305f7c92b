use axum::{Json, extract::State};
use serde::Deserialize;
use utoipa::ToSchema;

use crate::{
  core::{self, VectorEntry},
  utils::{AppError, AppState},
};

use super::core_error;

#[derive(Deserialize, ToSchema)]
pub struct RetrieveVectors {
  /// Words to look up; duplicates collapse to one entry
  pub strings: Vec<String>,
}

/// Bulk vector lookup with explicit misses
#[utoipa::path(
  post,
  path = "/vectors",
  request_body = RetrieveVectors,
  responses(
    (status = 200, description = "One entry per distinct requested word", body = Vec<VectorEntry>),
    (status = 400, description = "Body missing or lacks the strings field")
  )
)]
#[axum::debug_handler]
pub async fn retrieve_vectors(
  State(state): State<AppState>,
  Json(payload): Json<RetrieveVectors>,
) -> Result<Json<Vec<VectorEntry>>, AppError> {
  let entries = core::retrieve_vectors(&payload.strings, &state.store)
    .await
    .map_err(core_error)?;

  Ok(Json(entries))
}
