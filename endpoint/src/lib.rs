//! YOGA Endpoint
//!
//! The collection update endpoint: takes a raw update request for one named
//! element and turns it into an outcome the transport layer can send back.
//!
//! Responsibilities:
//! - Run decode, validate and apply in order, stopping at the first rejection
//! - Serialize updates to the same element
//! - Map every result to an outcome class and an error body
//!
//! # Module Structure
//!
//! - `endpoint` - The `CollectionEndpoint` state machine
//! - `config` - Endpoint configuration
//! - `locks` - Per-element lock table
//! - `outcome` - Outcome classes, stages and error bodies

mod config;
mod endpoint;
mod locks;
mod outcome;

pub use config::EndpointConfig;
pub use endpoint::CollectionEndpoint;
pub use locks::{ElementGuard, ElementLocks};
pub use outcome::{ErrorBody, Outcome, OutcomeClass, RejectReason, UpdateStage};
