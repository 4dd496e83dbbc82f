//! Update result types.

/// Verdict of the validator for one candidate update.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Verdict {
    /// Every candidate attribute accepts updates.
    Allowed,
    /// At least one candidate attribute does not accept updates.
    Forbidden {
        /// Offending attribute names, sorted.
        offending: Vec<String>,
    },
}

impl Verdict {
    pub fn is_allowed(&self) -> bool {
        matches!(self, Verdict::Allowed)
    }

    /// All offending attributes (empty when allowed).
    pub fn offending(&self) -> &[String] {
        match self {
            Verdict::Allowed => &[],
            Verdict::Forbidden { offending } => offending,
        }
    }

    /// The first offending attribute in name order.
    pub fn first_offending(&self) -> Option<&str> {
        self.offending().first().map(String::as_str)
    }
}

/// Outcome of a committed update.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AppliedUpdate {
    /// Attributes whose stored value changed, sorted.
    pub changed: Vec<String>,
    /// Element version after the commit.
    pub version: u64,
}

impl AppliedUpdate {
    /// Check if the update left the element as it was.
    pub fn is_noop(&self) -> bool {
        self.changed.is_empty()
    }
}
