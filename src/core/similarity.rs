fn dot(a: &[f64], b: &[f64]) -> f64 {
  a.iter().zip(b).map(|(x, y)| x * y).sum()
}

/// Compute cosine similarity between two embedding vectors.
///
/// The dot product pairs positions over the shorter of the two lengths;
/// norms are taken over each full vector. There is no guard against
/// zero-magnitude inputs: the result is NaN when either norm is zero, and
/// callers must not assume a finite value.
pub fn cosine_similarity(a: &[f64], b: &[f64]) -> f64 {
  dot(a, b) / (dot(a, a).sqrt() * dot(b, b).sqrt())
}

#[cfg(test)]
mod tests {
  use super::cosine_similarity;

  #[test]
  fn identical_vectors_score_one() {
    let v = [0.25233, 0.10176, -0.67485];
    assert!((cosine_similarity(&v, &v) - 1.0).abs() < 1e-12);
  }

  #[test]
  fn symmetric() {
    let a = [0.1, 0.2, 0.3];
    let b = [0.1, 0.19, 0.31];
    assert_eq!(cosine_similarity(&a, &b), cosine_similarity(&b, &a));
  }

  #[test]
  fn nearby_vectors_score_close_to_one() {
    let france = [0.1, 0.2, 0.3];
    let paris = [0.1, 0.19, 0.31];
    let cos = cosine_similarity(&france, &paris);
    assert!(cos > 0.999 && cos <= 1.0);
  }

  #[test]
  fn orthogonal_vectors_score_zero() {
    assert!(cosine_similarity(&[1.0, 0.0], &[0.0, 1.0]).abs() < 1e-12);
  }

  #[test]
  fn opposite_vectors_score_negative_one() {
    assert!((cosine_similarity(&[1.0, 2.0], &[-1.0, -2.0]) + 1.0).abs() < 1e-12);
  }

  #[test]
  fn unequal_lengths_pair_over_the_shorter() {
    // dot truncates to two positions, norms stay full-length
    let a = [1.0, 0.0];
    let b = [1.0, 0.0, 3.0];
    let expected = 1.0 / 10.0_f64.sqrt();
    assert!((cosine_similarity(&a, &b) - expected).abs() < 1e-12);
  }

  #[test]
  fn zero_magnitude_input_is_not_finite() {
    assert!(cosine_similarity(&[0.0, 0.0], &[1.0, 2.0]).is_nan());
    assert!(cosine_similarity(&[], &[]).is_nan());
  }
}
