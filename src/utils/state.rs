use crate::store::PgVectorStore;

#[derive(Clone)]
pub struct AppState {
  pub store: PgVectorStore,
}

impl AppState {
  #[must_use]
  pub const fn new(store: PgVectorStore) -> Self {
    Self { store }
  }
}
