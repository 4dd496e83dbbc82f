//! YOGA Element Storage
//!
//! This crate provides the storage collaborator of the update pipeline:
//! - `ElementStore`: the `get`/`save` boundary the endpoint works against
//! - `Collection`: an in-memory store keyed by element name

mod collection;
mod error;

pub use collection::*;
pub use error::*;
