//! Common utilities and shared types for campus.
//!
//! This crate provides foundational components used across all campus crates:
//!
//! - **Configuration**: Application settings via [`Config`]
//! - **Error handling**: Unified error types via [`AppError`] and [`AppResult`]
//! - **ID Generation**: ULID-based unique identifiers via [`IdGenerator`]
//! - **Clock**: ISO-8601 UTC timestamp rendering via [`now_iso`]
//!
//! # Example
//!
//! ```no_run
//! use campus_common::{Config, IdGenerator, AppResult};
//!
//! fn example() -> AppResult<()> {
//!     let config = Config::load()?;
//!     let id_gen = IdGenerator::new();
//!     let id = id_gen.generate();
//!     println!("Generated ID: {}", id);
//!     Ok(())
//! }
//! ```

pub mod clock;
pub mod config;
pub mod error;
pub mod id;

pub use clock::now_iso;
pub use config::Config;
pub use error::{AppError, AppResult};
pub use id::IdGenerator;
