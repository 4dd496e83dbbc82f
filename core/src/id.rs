//! Identity types for YOGA element types.

use std::fmt;

/// Identifier for an element type in the registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TypeId(pub u32);

impl TypeId {
    pub fn new(id: u32) -> Self {
        Self(id)
    }

    pub fn raw(&self) -> u32 {
        self.0
    }
}

impl fmt::Display for TypeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "t{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_type_id_equality() {
        let id1 = TypeId::new(1);
        let id2 = TypeId::new(1);
        let id3 = TypeId::new(2);

        assert_eq!(id1, id2);
        assert_ne!(id1, id3);
    }

    #[test]
    fn test_type_id_display() {
        assert_eq!(TypeId::new(7).to_string(), "t7");
        assert_eq!(TypeId::new(7).raw(), 7);
    }
}
