//! Document store layer for campus.
//!
//! Persistence is expressed as a schemaless [`DocumentStore`] trait so the
//! rest of the system never touches a concrete backend. The crate ships an
//! in-memory implementation ([`MemoryStore`]) and typed repositories over
//! the store for each document kind.

pub mod documents;
pub mod memory;
pub mod repositories;
pub mod store;

pub use memory::MemoryStore;
pub use store::{Cond, Document, DocumentStore, Filter};
