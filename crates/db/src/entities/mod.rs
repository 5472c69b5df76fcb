//! Database entities.

pub mod cast_member;
pub mod category;
pub mod category_video;
pub mod genre;
pub mod genre_video;
pub mod video;

pub use cast_member::Entity as CastMember;
pub use category::Entity as Category;
pub use category_video::Entity as CategoryVideo;
pub use genre::Entity as Genre;
pub use genre_video::Entity as GenreVideo;
pub use video::Entity as Video;
