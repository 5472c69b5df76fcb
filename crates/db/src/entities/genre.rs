//! Genre entity.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Genre entity - a catalog genre for videos.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "genre")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,

    /// Genre name.
    pub name: String,

    /// Whether this genre is active.
    pub is_active: bool,

    pub created_at: DateTimeWithTimeZone,

    pub updated_at: Option<DateTimeWithTimeZone>,

    /// Soft-delete timestamp. Live rows have `None`.
    pub deleted_at: Option<DateTimeWithTimeZone>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::genre_video::Entity")]
    GenreVideos,
}

impl Related<super::genre_video::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::GenreVideos.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
