//! Create cast member table migration.

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(CastMember::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(CastMember::Id)
                            .string_len(36)
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(CastMember::Name).string_len(255).not_null())
                    // 1 - director, 2 - actor
                    .col(ColumnDef::new(CastMember::Kind).small_integer().not_null())
                    .col(
                        ColumnDef::new(CastMember::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(ColumnDef::new(CastMember::UpdatedAt).timestamp_with_time_zone())
                    .col(ColumnDef::new(CastMember::DeletedAt).timestamp_with_time_zone())
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_cast_member_deleted_at")
                    .table(CastMember::Table)
                    .col(CastMember::DeletedAt)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(CastMember::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum CastMember {
    Table,
    Id,
    Name,
    Kind,
    CreatedAt,
    UpdatedAt,
    DeletedAt,
}
