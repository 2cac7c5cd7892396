use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(UcsbOrganization::Table)
                    .if_not_exists()
                    .col(string(UcsbOrganization::OrgCode).primary_key())
                    .col(string(UcsbOrganization::OrgTranslationShort))
                    .col(string(UcsbOrganization::OrgTranslation))
                    .col(boolean(UcsbOrganization::Inactive))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(UcsbOrganization::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
pub enum UcsbOrganization {
    Table,
    OrgCode,
    OrgTranslationShort,
    OrgTranslation,
    Inactive,
}
