//! Create video and association tables migration.

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Create video table
        manager
            .create_table(
                Table::create()
                    .table(Video::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Video::Id)
                            .string_len(36)
                            .not_null()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Video::Title).string_len(255).not_null())
                    .col(ColumnDef::new(Video::Description).text().not_null())
                    .col(ColumnDef::new(Video::YearLaunched).integer().not_null())
                    .col(ColumnDef::new(Video::Duration).integer().not_null())
                    .col(ColumnDef::new(Video::Rating).string_len(3).not_null())
                    .col(
                        ColumnDef::new(Video::Opened)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(ColumnDef::new(Video::BannerFile).string_len(255))
                    .col(ColumnDef::new(Video::TrailerFile).string_len(255))
                    .col(ColumnDef::new(Video::ThumbFile).string_len(255))
                    .col(ColumnDef::new(Video::VideoFile).string_len(255))
                    .col(
                        ColumnDef::new(Video::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(ColumnDef::new(Video::UpdatedAt).timestamp_with_time_zone())
                    .col(ColumnDef::new(Video::DeletedAt).timestamp_with_time_zone())
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_video_deleted_at")
                    .table(Video::Table)
                    .col(Video::DeletedAt)
                    .to_owned(),
            )
            .await?;

        // Create category_video association table
        manager
            .create_table(
                Table::create()
                    .table(CategoryVideo::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(CategoryVideo::CategoryId)
                            .string_len(36)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(CategoryVideo::VideoId)
                            .string_len(36)
                            .not_null(),
                    )
                    .primary_key(
                        Index::create()
                            .col(CategoryVideo::CategoryId)
                            .col(CategoryVideo::VideoId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_category_video_category")
                            .from(CategoryVideo::Table, CategoryVideo::CategoryId)
                            .to(Category::Table, Category::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_category_video_video")
                            .from(CategoryVideo::Table, CategoryVideo::VideoId)
                            .to(Video::Table, Video::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // Index: video_id (for loading a video's categories)
        manager
            .create_index(
                Index::create()
                    .name("idx_category_video_video_id")
                    .table(CategoryVideo::Table)
                    .col(CategoryVideo::VideoId)
                    .to_owned(),
            )
            .await?;

        // Create genre_video association table
        manager
            .create_table(
                Table::create()
                    .table(GenreVideo::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(GenreVideo::GenreId)
                            .string_len(36)
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(GenreVideo::VideoId)
                            .string_len(36)
                            .not_null(),
                    )
                    .primary_key(
                        Index::create()
                            .col(GenreVideo::GenreId)
                            .col(GenreVideo::VideoId),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_genre_video_genre")
                            .from(GenreVideo::Table, GenreVideo::GenreId)
                            .to(Genre::Table, Genre::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_genre_video_video")
                            .from(GenreVideo::Table, GenreVideo::VideoId)
                            .to(Video::Table, Video::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // Index: video_id (for loading a video's genres)
        manager
            .create_index(
                Index::create()
                    .name("idx_genre_video_video_id")
                    .table(GenreVideo::Table)
                    .col(GenreVideo::VideoId)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(GenreVideo::Table).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(CategoryVideo::Table).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(Video::Table).to_owned())
            .await
    }
}

#[derive(Iden)]
enum Video {
    Table,
    Id,
    Title,
    Description,
    YearLaunched,
    Duration,
    Rating,
    Opened,
    BannerFile,
    TrailerFile,
    ThumbFile,
    VideoFile,
    CreatedAt,
    UpdatedAt,
    DeletedAt,
}

#[derive(Iden)]
enum CategoryVideo {
    Table,
    CategoryId,
    VideoId,
}

#[derive(Iden)]
enum GenreVideo {
    Table,
    GenreId,
    VideoId,
}

#[derive(Iden)]
enum Category {
    Table,
    Id,
}

#[derive(Iden)]
enum Genre {
    Table,
    Id,
}
