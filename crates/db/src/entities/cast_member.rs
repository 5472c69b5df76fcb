//! Cast member entity.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Cast member kind: director.
pub const KIND_DIRECTOR: i16 = 1;
/// Cast member kind: actor.
pub const KIND_ACTOR: i16 = 2;

/// Cast member entity - a director or actor credited on videos.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "cast_member")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,

    /// Member name.
    pub name: String,

    /// 1 - director, 2 - actor.
    pub kind: i16,

    pub created_at: DateTimeWithTimeZone,

    pub updated_at: Option<DateTimeWithTimeZone>,

    /// Soft-delete timestamp. Live rows have `None`.
    pub deleted_at: Option<DateTimeWithTimeZone>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
