pub use sea_orm_migration::prelude::*;

mod m20260830_01_create_glove_vectors_table;

pub struct Migrator;

#[async_trait::async_trait]
impl MigratorTrait for Migrator {
  fn migrations() -> Vec<Box<dyn MigrationTrait>> {
    vec![Box::new(
      m20260830_01_create_glove_vectors_table::Migration,
    )]
  }
}
