//! YOGA Core Types
//!
//! This crate provides the foundational types used throughout the YOGA system:
//! - Type identifiers (TypeId)
//! - Value types (the Value enum and its JSON mapping)
//! - Element structure (a named, typed record owned by a collection)
//! - Common error messages

mod element;
mod id;
mod json;
pub mod messages;
mod value;

pub use element::*;
pub use id::*;
pub use value::*;
