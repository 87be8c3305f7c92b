use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
  async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
    manager
      .create_table(
        Table::create()
          .table(GloveVectors::Table)
          .if_not_exists()
          .col(
            ColumnDef::new(GloveVectors::Id)
              .big_integer()
              .not_null()
              .auto_increment()
              .primary_key(),
          )
          .col(
            ColumnDef::new(GloveVectors::String)
              .text()
              .not_null()
              .unique_key(),
          )
          .col(
            ColumnDef::new(GloveVectors::Vector)
              .array(ColumnType::Double)
              .null(),
          )
          .to_owned(),
      )
      .await
  }

  async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
    manager
      .drop_table(Table::drop().table(GloveVectors::Table).to_owned())
      .await
  }
}

#[derive(Iden)]
pub enum GloveVectors {
  Table,
  Id,
  // unique word key
  String,
  // double precision[], nullable
  Vector,
}
