use async_trait::async_trait;
use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter};

use crate::core::WordVector;
use crate::entities::glove_vector;

use super::{StoreError, VectorStore};

/// `VectorStore` over the pooled sea-orm connection. Each call borrows a
/// connection from the pool for the duration of its single query.
#[derive(Clone)]
pub struct PgVectorStore {
  db: DatabaseConnection,
}

impl PgVectorStore {
  #[must_use]
  pub const fn new(db: DatabaseConnection) -> Self {
    Self { db }
  }
}

#[async_trait]
impl VectorStore for PgVectorStore {
  async fn get(&self, string: &str) -> Result<Option<WordVector>, StoreError> {
    let model = glove_vector::Entity::find()
      .filter(glove_vector::Column::String.eq(string))
      .one(&self.db)
      .await?;

    Ok(model.and_then(WordVector::from_model))
  }

  async fn get_many(&self, strings: &[String]) -> Result<Vec<WordVector>, StoreError> {
    let models = glove_vector::Entity::find()
      .filter(glove_vector::Column::String.is_in(strings.iter().map(String::as_str)))
      .all(&self.db)
      .await?;

    Ok(
      models
        .into_iter()
        .filter_map(WordVector::from_model)
        .collect(),
    )
  }
}
