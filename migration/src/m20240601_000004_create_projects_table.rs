use sea_orm_migration::{prelude::*, schema::*};

use crate::m20240601_000001_create_organizations_table::Organizations;

static IDX_PROJECTS_ORGANIZATION_ID: &str = "idx_projects_organization_id";
static FK_PROJECTS_ORGANIZATION_ID: &str = "fk_projects_organization_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Projects::Table)
                    .if_not_exists()
                    .col(pk_uuid(Projects::Id))
                    .col(string(Projects::Name))
                    .col(string_null(Projects::Description))
                    .col(uuid(Projects::OrganizationId))
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_PROJECTS_ORGANIZATION_ID)
                            .from(Projects::Table, Projects::OrganizationId)
                            .to(Organizations::Table, Organizations::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_PROJECTS_ORGANIZATION_ID)
                    .table(Projects::Table)
                    .col(Projects::OrganizationId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name(IDX_PROJECTS_ORGANIZATION_ID)
                    .table(Projects::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Projects::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum Projects {
    Table,
    Id,
    Name,
    Description,
    OrganizationId,
}
