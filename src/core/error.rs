use thiserror::Error;

use crate::store::StoreError;

#[derive(Debug, Error)]
pub enum CoreError {
  /// Missing or empty required request input; the boundary maps this to
  /// a client error.
  #[error("invalid request: {0}")]
  InvalidRequest(String),

  #[error(transparent)]
  Store(#[from] StoreError),
}
