use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Authors::Table)
                    .if_not_exists()
                    .col(ColumnDef::new(Authors::IdPresentation).integer().not_null())
                    .col(ColumnDef::new(Authors::IdUser).integer().not_null())
                    .primary_key(
                        Index::create()
                            .col(Authors::IdPresentation)
                            .col(Authors::IdUser),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(Authors::Table, Authors::IdPresentation)
                            .to(Presentations::Table, Presentations::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(Authors::Table, Authors::IdUser)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;
        manager
            .create_index(
                Index::create()
                    .table(Authors::Table)
                    .col(Authors::IdUser)
                    .name("idx_authors_id_user")
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Authors::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum Authors {
    Table,
    IdPresentation,
    IdUser,
}

#[derive(Iden)]
enum Presentations {
    Table,
    Id,
}

#[derive(Iden)]
enum Users {
    Table,
    Id,
}
