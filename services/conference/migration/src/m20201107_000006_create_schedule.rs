use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Schedule::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Schedule::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Schedule::DateStart).date_time().not_null())
                    .col(ColumnDef::new(Schedule::IdPresentation).integer().not_null())
                    .col(ColumnDef::new(Schedule::IdRoom).integer().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .from(Schedule::Table, Schedule::IdPresentation)
                            .to(Presentations::Table, Presentations::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .from(Schedule::Table, Schedule::IdRoom)
                            .to(Rooms::Table, Rooms::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Schedule::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum Schedule {
    Table,
    Id,
    DateStart,
    IdPresentation,
    IdRoom,
}

#[derive(Iden)]
enum Presentations {
    Table,
    Id,
}

#[derive(Iden)]
enum Rooms {
    Table,
    Id,
}
