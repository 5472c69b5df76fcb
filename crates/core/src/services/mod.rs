//! Business logic services.

pub mod cast_member;
pub mod category;
pub mod genre;
pub mod upload;
pub mod video;

pub use cast_member::{CastMemberInput, CastMemberService};
pub use category::{CategoryInput, CategoryService};
pub use genre::{GenreInput, GenreService};
pub use upload::{FileField, FilePayload, PendingFile, VideoFiles, extract_files};
pub use video::{VideoDetails, VideoInput, VideoService};
