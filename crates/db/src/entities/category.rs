//! Category entity.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Category entity - a catalog classification for videos.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "category")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,

    /// Category name.
    pub name: String,

    /// Category description (optional).
    #[sea_orm(column_type = "Text", nullable)]
    pub description: Option<String>,

    /// Whether this category is active.
    pub is_active: bool,

    pub created_at: DateTimeWithTimeZone,

    pub updated_at: Option<DateTimeWithTimeZone>,

    /// Soft-delete timestamp. Live rows have `None`.
    pub deleted_at: Option<DateTimeWithTimeZone>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::category_video::Entity")]
    CategoryVideos,
}

impl Related<super::category_video::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::CategoryVideos.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
