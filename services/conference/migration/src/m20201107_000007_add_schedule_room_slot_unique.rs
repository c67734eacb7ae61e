use sea_orm_migration::prelude::*;

/// A room hosts at most one presentation per start time. Enforced here so
/// concurrent saves cannot both pass the application-level check.
#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_index(
                Index::create()
                    .table(Schedule::Table)
                    .col(Schedule::IdRoom)
                    .col(Schedule::DateStart)
                    .name("uq_schedule_room_date_start")
                    .unique()
                    .if_not_exists()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name("uq_schedule_room_date_start")
                    .table(Schedule::Table)
                    .to_owned(),
            )
            .await
    }
}

#[derive(Iden)]
enum Schedule {
    Table,
    IdRoom,
    DateStart,
}
