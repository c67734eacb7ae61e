use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Presentations::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Presentations::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Presentations::Name).text().not_null())
                    .col(ColumnDef::new(Presentations::Text).text().null())
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Presentations::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum Presentations {
    Table,
    Id,
    Name,
    Text,
}
