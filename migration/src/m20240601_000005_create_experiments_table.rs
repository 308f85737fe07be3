use sea_orm_migration::{prelude::*, schema::*};

use crate::m20240601_000004_create_projects_table::Projects;

static IDX_EXPERIMENTS_PROJECT_ID: &str = "idx_experiments_project_id";
static FK_EXPERIMENTS_PROJECT_ID: &str = "fk_experiments_project_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Experiments::Table)
                    .if_not_exists()
                    .col(pk_uuid(Experiments::Id))
                    .col(string(Experiments::Name))
                    .col(string_null(Experiments::Description))
                    .col(uuid(Experiments::ProjectId))
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_EXPERIMENTS_PROJECT_ID)
                            .from(Experiments::Table, Experiments::ProjectId)
                            .to(Projects::Table, Projects::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_EXPERIMENTS_PROJECT_ID)
                    .table(Experiments::Table)
                    .col(Experiments::ProjectId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name(IDX_EXPERIMENTS_PROJECT_ID)
                    .table(Experiments::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Experiments::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum Experiments {
    Table,
    Id,
    Name,
    Description,
    ProjectId,
}
