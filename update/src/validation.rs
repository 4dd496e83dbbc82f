//! Mutability validation for candidate updates.
//!
//! Validation reads the registry and the element but writes nothing, and it
//! runs to completion before the applicator is allowed to touch the element.

use yoga_core::Element;
use yoga_registry::Registry;

use crate::candidate::CandidateUpdate;
use crate::error::{UpdateError, UpdateResult};
use crate::result::Verdict;

/// Classify a candidate update as allowed or forbidden.
///
/// Every key is checked. Attributes the element type does not declare are
/// treated as immutable. An empty candidate is allowed.
///
/// # Panics
///
/// Panics if the element's type is not registered.
pub fn validate(registry: &Registry, element: &Element, candidate: &CandidateUpdate) -> Verdict {
    let type_def = registry.expect_type(element.type_id);

    // Candidate keys are sorted, so the offending list is too
    let offending: Vec<String> = candidate
        .keys()
        .filter(|attr| !type_def.mutability(attr).is_mutable())
        .map(str::to_string)
        .collect();

    if offending.is_empty() {
        Verdict::Allowed
    } else {
        Verdict::Forbidden { offending }
    }
}

/// Validate and turn a forbidden verdict into an error carrying the
/// requested and updatable attribute lists.
pub fn check(
    registry: &Registry,
    element: &Element,
    candidate: &CandidateUpdate,
) -> UpdateResult<()> {
    match validate(registry, element, candidate) {
        Verdict::Allowed => Ok(()),
        Verdict::Forbidden { offending } => {
            let type_def = registry.expect_type(element.type_id);
            Err(UpdateError::forbidden(
                candidate.keys().map(str::to_string).collect(),
                type_def
                    .updatable_attrs()
                    .into_iter()
                    .map(str::to_string)
                    .collect(),
                offending,
            ))
        }
    }
}
