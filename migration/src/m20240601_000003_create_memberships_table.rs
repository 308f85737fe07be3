use sea_orm_migration::{prelude::*, schema::*};

use crate::{
    m20240601_000001_create_organizations_table::Organizations,
    m20240601_000002_create_users_table::Users,
};

static PK_MEMBERSHIPS: &str = "pk_memberships";
static FK_MEMBERSHIPS_USER_ID: &str = "fk_memberships_user_id";
static FK_MEMBERSHIPS_ORGANIZATION_ID: &str = "fk_memberships_organization_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Memberships::Table)
                    .if_not_exists()
                    .col(uuid(Memberships::UserId))
                    .col(uuid(Memberships::OrganizationId))
                    .col(boolean(Memberships::IsAdmin))
                    .primary_key(
                        Index::create()
                            .name(PK_MEMBERSHIPS)
                            .col(Memberships::UserId)
                            .col(Memberships::OrganizationId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_MEMBERSHIPS_USER_ID)
                            .from(Memberships::Table, Memberships::UserId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_MEMBERSHIPS_ORGANIZATION_ID)
                            .from(Memberships::Table, Memberships::OrganizationId)
                            .to(Organizations::Table, Organizations::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Memberships::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum Memberships {
    Table,
    UserId,
    OrganizationId,
    IsAdmin,
}
