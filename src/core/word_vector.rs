use crate::entities::glove_vector;

/// A word and its embedding, as stored in the `glove_vectors` table.
#[derive(Clone, Debug, PartialEq)]
pub struct WordVector {
  pub string: String,
  pub vector: Vec<f64>,
}

impl WordVector {
  /// Typed row reader. A row whose `vector` column is NULL carries no
  /// embedding to compare or return, so it reads as no match.
  pub fn from_model(model: glove_vector::Model) -> Option<Self> {
    Some(Self {
      string: model.string,
      vector: model.vector?,
    })
  }
}
