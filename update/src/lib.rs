//! YOGA Update
//!
//! Decide and apply partial updates to a single element.
//!
//! Responsibilities:
//! - Decode a request body into a candidate update
//! - Validate every candidate attribute against the mutability policy
//! - Convert and commit the candidate, all or nothing
//!
//! # Module Structure
//!
//! - `updater` - Main Updater that coordinates the validate and apply stages
//! - `decoder` - Content-type gate and body decoding
//! - `candidate` - The decoded, not yet applied attribute map
//! - `validation` - Mutability checks producing a verdict
//! - `apply` - Value conversion and commit
//! - `error` - Error types for update failures
//! - `result` - Verdict and outcome types

mod apply;
mod candidate;
mod decoder;
mod error;
mod result;
mod updater;
mod validation;

pub use apply::{apply, convert_all};
pub use candidate::CandidateUpdate;
pub use decoder::{decode, ContentType};
pub use error::{ConversionFailure, UpdateError, UpdateErrorKind, UpdateResult};
pub use result::{AppliedUpdate, Verdict};
pub use updater::Updater;
pub use validation::{check, validate};
