//! Database repositories.

mod cast_member;
mod category;
mod genre;
mod video;

pub use cast_member::CastMemberRepository;
pub use category::CategoryRepository;
pub use genre::GenreRepository;
pub use video::VideoRepository;
