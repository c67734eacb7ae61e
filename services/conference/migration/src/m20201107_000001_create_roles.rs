use sea_orm_migration::prelude::*;
use sea_orm_migration::sea_orm::ConnectionTrait;

use podium_domain::role::Role;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Roles::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Roles::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(Roles::Name)
                            .string_len(64)
                            .not_null()
                            .unique_key(),
                    )
                    .to_owned(),
            )
            .await?;

        // Role ids are matched in code; seed them with fixed values.
        let mut seed = Query::insert();
        seed.into_table(Roles::Table)
            .columns([Roles::Id, Roles::Name])
            .on_conflict(OnConflict::column(Roles::Id).do_nothing().to_owned());
        for role in [Role::Presenter, Role::Administrator] {
            seed.values_panic([role.id().into(), role.name().into()]);
        }
        let db = manager.get_connection();
        db.execute(db.get_database_backend().build(&seed)).await?;
        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Roles::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum Roles {
    Table,
    Id,
    Name,
}
