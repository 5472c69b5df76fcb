//! Video entity.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Video entity - a catalog title with optional uploaded media files.
///
/// The four `*_file` columns hold generated stored names present in the file
/// store under this video's directory, never original upload filenames.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "video")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,

    /// Video title.
    pub title: String,

    /// Synopsis / description.
    #[sea_orm(column_type = "Text")]
    pub description: String,

    /// Launch year.
    pub year_launched: i32,

    /// Duration in minutes.
    pub duration: i32,

    /// Age rating code: "L", "10", "12", "14", "16" or "18".
    pub rating: String,

    /// Whether this title is a current release.
    pub opened: bool,

    /// Stored name of the banner image.
    #[sea_orm(nullable)]
    pub banner_file: Option<String>,

    /// Stored name of the trailer video.
    #[sea_orm(nullable)]
    pub trailer_file: Option<String>,

    /// Stored name of the thumbnail image.
    #[sea_orm(nullable)]
    pub thumb_file: Option<String>,

    /// Stored name of the main video file.
    #[sea_orm(nullable)]
    pub video_file: Option<String>,

    pub created_at: DateTimeWithTimeZone,

    pub updated_at: Option<DateTimeWithTimeZone>,

    /// Soft-delete timestamp. Live rows have `None`.
    pub deleted_at: Option<DateTimeWithTimeZone>,
}

impl Model {
    /// Stored file names currently referenced by this row, keyed by field.
    #[must_use]
    pub fn file_fields(&self) -> [(&'static str, Option<&str>); 4] {
        [
            ("banner_file", self.banner_file.as_deref()),
            ("trailer_file", self.trailer_file.as_deref()),
            ("thumb_file", self.thumb_file.as_deref()),
            ("video_file", self.video_file.as_deref()),
        ]
    }
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::category_video::Entity")]
    CategoryVideos,
    #[sea_orm(has_many = "super::genre_video::Entity")]
    GenreVideos,
}

impl Related<super::category_video::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::CategoryVideos.def()
    }
}

impl Related<super::genre_video::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::GenreVideos.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
