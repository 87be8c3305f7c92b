use std::collections::{HashMap, HashSet};

use serde::Serialize;
use utoipa::ToSchema;

use crate::store::VectorStore;

use super::CoreError;

/// One reconciled entry per requested word; `vector` is `null` when the
/// word has no stored embedding.
#[derive(Debug, Serialize, ToSchema)]
pub struct VectorEntry {
  pub string: String,
  pub vector: Option<Vec<f64>>,
}

/// Resolve a batch of words against the store in a single query.
///
/// Duplicates in the request collapse to one entry and the output keeps
/// first-seen request order. Every requested word appears exactly once:
/// matched words carry their vector, unmatched words an explicit `null`.
pub async fn retrieve_vectors<S: VectorStore>(
  requested: &[String],
  store: &S,
) -> Result<Vec<VectorEntry>, CoreError> {
  let mut seen = HashSet::with_capacity(requested.len());
  let mut order = Vec::with_capacity(requested.len());
  for string in requested {
    if seen.insert(string.as_str()) {
      order.push(string.clone());
    }
  }

  let rows = store.get_many(&order).await?;
  let mut found: HashMap<String, Vec<f64>> = rows
    .into_iter()
    .map(|word| (word.string, word.vector))
    .collect();

  Ok(
    order
      .into_iter()
      .map(|string| {
        let vector = found.remove(&string);
        VectorEntry { string, vector }
      })
      .collect(),
  )
}
