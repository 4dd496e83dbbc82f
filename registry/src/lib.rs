//! YOGA Registry
//!
//! Runtime schema lookup: the mutability policy for every element type.
//! Single source of truth for which attributes exist, which of them accept
//! updates, and what values they may hold.
//! The registry is immutable after construction via RegistryBuilder.

mod builder;
mod registry;
mod types;

pub use builder::{RegistryBuilder, RegistryError, TypeBuilder};
pub use registry::Registry;
pub use types::*;
