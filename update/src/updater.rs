//! Updater - runs validation and application against one registry.

use yoga_core::Element;
use yoga_registry::Registry;

use crate::apply;
use crate::candidate::CandidateUpdate;
use crate::error::UpdateResult;
use crate::result::{AppliedUpdate, Verdict};
use crate::validation;

/// Runs candidate updates against elements of registered types.
pub struct Updater<'r> {
    registry: &'r Registry,
}

impl<'r> Updater<'r> {
    /// Create a new updater.
    pub fn new(registry: &'r Registry) -> Self {
        Self { registry }
    }

    // ==================== Stages ====================

    /// Classify a candidate without touching the element.
    pub fn validate(&self, element: &Element, candidate: &CandidateUpdate) -> Verdict {
        validation::validate(self.registry, element, candidate)
    }

    /// Validate, reporting a forbidden candidate as an error.
    pub fn check(&self, element: &Element, candidate: &CandidateUpdate) -> UpdateResult<()> {
        validation::check(self.registry, element, candidate)
    }

    /// Convert and commit a candidate. Does not check mutability.
    pub fn apply(
        &self,
        element: &mut Element,
        candidate: &CandidateUpdate,
    ) -> UpdateResult<AppliedUpdate> {
        apply::apply(self.registry, element, candidate)
    }

    // ==================== Full Update ====================

    /// Validate and then apply a candidate update.
    ///
    /// Nothing is written unless the candidate is allowed and every value
    /// converts.
    pub fn update(
        &self,
        element: &mut Element,
        candidate: &CandidateUpdate,
    ) -> UpdateResult<AppliedUpdate> {
        self.check(element, candidate)?;
        self.apply(element, candidate)
    }
}
