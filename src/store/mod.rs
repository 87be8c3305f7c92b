use async_trait::async_trait;
use thiserror::Error;

use crate::core::WordVector;

mod postgres;
pub use postgres::PgVectorStore;

/// The underlying store could not be reached or a query failed; surfaces
/// as a server error at the boundary. No retries happen here.
#[derive(Debug, Error)]
#[error("vector store unavailable: {0}")]
pub struct StoreError(#[from] sea_orm::DbErr);

/// Read-only word-to-embedding lookup backed by the `glove_vectors` table.
#[async_trait]
pub trait VectorStore {
  /// Exact single-key lookup.
  async fn get(&self, string: &str) -> Result<Option<WordVector>, StoreError>;

  /// Batched lookup issued as one query; only matched rows come back, in
  /// whatever order the store returns them.
  async fn get_many(&self, strings: &[String]) -> Result<Vec<WordVector>, StoreError>;
}

#[cfg(test)]
pub(crate) mod memory {
  use std::collections::HashMap;

  use async_trait::async_trait;

  use crate::core::WordVector;

  use super::{StoreError, VectorStore};

  /// In-memory store for exercising the core without Postgres.
  pub(crate) struct MemoryStore {
    rows: HashMap<String, Vec<f64>>,
  }

  impl MemoryStore {
    pub(crate) fn new<I>(rows: I) -> Self
    where
      I: IntoIterator<Item = (&'static str, Vec<f64>)>,
    {
      Self {
        rows: rows
          .into_iter()
          .map(|(string, vector)| (string.to_owned(), vector))
          .collect(),
      }
    }
  }

  #[async_trait]
  impl VectorStore for MemoryStore {
    async fn get(&self, string: &str) -> Result<Option<WordVector>, StoreError> {
      Ok(self.rows.get(string).map(|vector| WordVector {
        string: string.to_owned(),
        vector: vector.clone(),
      }))
    }

    async fn get_many(&self, strings: &[String]) -> Result<Vec<WordVector>, StoreError> {
      Ok(
        strings
          .iter()
          .filter_map(|string| {
            self.rows.get(string).map(|vector| WordVector {
              string: string.clone(),
              vector: vector.clone(),
            })
          })
          .collect(),
      )
    }
  }
}
