use crate::store::VectorStore;

use super::{CoreError, cosine_similarity};

/// Compare two stored words by cosine similarity.
///
/// `Ok(None)` when either word is absent from the store, or when the
/// similarity is non-finite (zero-magnitude vector); both serialize as
/// `null` rather than failing the request.
pub async fn compare<S: VectorStore>(
  string1: Option<&str>,
  string2: Option<&str>,
  store: &S,
) -> Result<Option<f64>, CoreError> {
  let (string1, string2) = match (string1, string2) {
    (Some(s1), Some(s2)) if !s1.is_empty() && !s2.is_empty() => (s1, s2),
    _ => {
      return Err(CoreError::InvalidRequest(
        "string1 or string2 query param missing".to_owned(),
      ));
    }
  };

  let Some(word1) = store.get(string1).await? else {
    return Ok(None);
  };
  let Some(word2) = store.get(string2).await? else {
    return Ok(None);
  };

  let cos = cosine_similarity(&word1.vector, &word2.vector);
  Ok(cos.is_finite().then_some(cos))
}

#[cfg(test)]
mod tests {
  use super::compare;
  use crate::core::{CoreError, cosine_similarity};
  use crate::store::memory::MemoryStore;

  fn store() -> MemoryStore {
    MemoryStore::new([
      ("france", vec![0.1, 0.2, 0.3]),
      ("paris", vec![0.1, 0.19, 0.31]),
    ])
  }

  #[tokio::test]
  async fn known_pair_scores_like_the_raw_vectors() {
    let result = compare(Some("france"), Some("paris"), &store())
      .await
      .unwrap();

    let expected = cosine_similarity(&[0.1, 0.2, 0.3], &[0.1, 0.19, 0.31]);
    let cos = result.unwrap();
    assert!((cos - expected).abs() < 1e-12);
    assert!(cos > 0.999);
  }

  #[tokio::test]
  async fn unknown_word_yields_null_not_error() {
    let store = store();
    let result = compare(Some("france"), Some("unknown"), &store)
      .await
      .unwrap();
    assert_eq!(result, None);

    let result = compare(Some("unknown"), Some("paris"), &store)
      .await
      .unwrap();
    assert_eq!(result, None);
  }

  #[tokio::test]
  async fn missing_or_empty_param_is_invalid_request() {
    let store = store();
    let err = compare(None, Some("paris"), &store).await.unwrap_err();
    assert!(matches!(err, CoreError::InvalidRequest(_)));

    let err = compare(Some("france"), None, &store).await.unwrap_err();
    assert!(matches!(err, CoreError::InvalidRequest(_)));

    let err = compare(Some(""), Some("paris"), &store).await.unwrap_err();
    assert!(matches!(err, CoreError::InvalidRequest(_)));
  }

  #[tokio::test]
  async fn zero_magnitude_vector_yields_null() {
    let store = MemoryStore::new([("zero", vec![0.0, 0.0]), ("one", vec![1.0, 0.0])]);
    let result = compare(Some("zero"), Some("one"), &store).await.unwrap();
    assert_eq!(result, None);
  }
}
