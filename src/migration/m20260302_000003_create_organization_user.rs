//! Migration: Create organization_user join table.

use sea_orm_migration::prelude::*;

use super::m20260302_000001_create_organizations::Organizations;
use super::m20260302_000002_create_users::Users;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(OrganizationUser::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(OrganizationUser::OrganizationId)
                            .integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(OrganizationUser::UserId)
                            .integer()
                            .not_null(),
                    )
                    .primary_key(
                        Index::create()
                            .col(OrganizationUser::OrganizationId)
                            .col(OrganizationUser::UserId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_organization_user_organization_id")
                            .from(OrganizationUser::Table, OrganizationUser::OrganizationId)
                            .to(Organizations::Table, Organizations::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_organization_user_user_id")
                            .from(OrganizationUser::Table, OrganizationUser::UserId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_organization_user_user_id")
                    .table(OrganizationUser::Table)
                    .col(OrganizationUser::UserId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(OrganizationUser::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum OrganizationUser {
    Table,
    OrganizationId,
    UserId,
}
