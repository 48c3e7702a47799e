//! Migration: Create access_keys table.

use sea_orm_migration::prelude::*;

use super::m20260302_000001_create_organizations::Organizations;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(AccessKeys::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(AccessKeys::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(AccessKeys::OrganizationId)
                            .integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(AccessKeys::KeyHash)
                            .string()
                            .not_null()
                            .unique_key(),
                    )
                    .col(ColumnDef::new(AccessKeys::Name).string().not_null())
                    .col(
                        ColumnDef::new(AccessKeys::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null(),
                    )
                    .col(ColumnDef::new(AccessKeys::RevokeTime).timestamp_with_time_zone())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_access_keys_organization_id")
                            .from(AccessKeys::Table, AccessKeys::OrganizationId)
                            .to(Organizations::Table, Organizations::Id)
                            .on_delete(ForeignKeyAction::Cascade)
                            .on_update(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_access_keys_organization_id")
                    .table(AccessKeys::Table)
                    .col(AccessKeys::OrganizationId)
                    .to_owned(),
            )
            .await?;

        // Range scans over revocation times hit this index.
        manager
            .create_index(
                Index::create()
                    .name("idx_access_keys_revoke_time")
                    .table(AccessKeys::Table)
                    .col(AccessKeys::RevokeTime)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(AccessKeys::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum AccessKeys {
    Table,
    Id,
    OrganizationId,
    KeyHash,
    Name,
    CreatedAt,
    RevokeTime,
}
