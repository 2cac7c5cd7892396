use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(UcsbDiningCommonsMenuItem::Table)
                    .if_not_exists()
                    .col(big_pk_auto(UcsbDiningCommonsMenuItem::Id))
                    .col(string(UcsbDiningCommonsMenuItem::DiningCommonsCode))
                    .col(string(UcsbDiningCommonsMenuItem::Name))
                    .col(string(UcsbDiningCommonsMenuItem::Station))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(
                Table::drop()
                    .table(UcsbDiningCommonsMenuItem::Table)
                    .to_owned(),
            )
            .await
    }
}

#[derive(DeriveIden)]
pub enum UcsbDiningCommonsMenuItem {
    Table,
    Id,
    DiningCommonsCode,
    Name,
    Station,
}
