//! Common utilities and shared types for catalog-rs.
//!
//! This crate provides foundational components used across all catalog-rs crates:
//!
//! - **Configuration**: Application settings via [`Config`]
//! - **Error handling**: Unified error types via [`AppError`] and [`AppResult`]
//! - **ID Generation**: UUID-based unique identifiers via [`IdGenerator`]
//! - **Storage**: File store abstraction for uploaded media
//!
//! # Example
//!
//! ```no_run
//! use catalog_common::{Config, IdGenerator, AppResult};
//!
//! fn example() -> AppResult<()> {
//!     let config = Config::load()?;
//!     let id_gen = IdGenerator::new();
//!     let id = id_gen.generate();
//!     println!("Generated ID: {}", id);
//!     Ok(())
//! }
//! ```

pub mod config;
pub mod error;
pub mod id;
pub mod storage;

pub use config::Config;
pub use error::{AppError, AppResult, FieldErrors};
pub use id::IdGenerator;
pub use storage::{FileStore, FileStoreRef, LocalFileStore, NoOpFileStore, generate_stored_name};
