//! The Registry - immutable schema lookup.

use crate::TypeDef;
use std::collections::HashMap;
use yoga_core::TypeId;

/// The Registry provides runtime lookup of element type definitions.
/// It is immutable after construction.
#[derive(Debug, Default)]
pub struct Registry {
    /// Element type definitions by ID.
    types: HashMap<TypeId, TypeDef>,
    /// Element type ID lookup by name.
    type_names: HashMap<String, TypeId>,
}

impl Registry {
    pub(crate) fn new(
        types: HashMap<TypeId, TypeDef>,
        type_names: HashMap<String, TypeId>,
    ) -> Self {
        Self { types, type_names }
    }

    /// Get a type definition by ID.
    pub fn get_type(&self, id: TypeId) -> Option<&TypeDef> {
        self.types.get(&id)
    }

    /// Get a type definition for an element that is known to exist.
    ///
    /// # Panics
    ///
    /// Panics if the type was never registered. Every stored element carries a
    /// `TypeId` handed out by the builder of this registry, so a miss means the
    /// element was built against a different registry.
    pub fn expect_type(&self, id: TypeId) -> &TypeDef {
        match self.get_type(id) {
            Some(type_def) => type_def,
            None => panic!("element type {} is not registered", id),
        }
    }

    /// Get a type ID by name.
    pub fn get_type_id(&self, name: &str) -> Option<TypeId> {
        self.type_names.get(name).copied()
    }

    /// Get the number of types.
    pub fn type_count(&self) -> usize {
        self.types.len()
    }
}

#[cfg(test)]
mod tests {
    use crate::{AttrDef, RegistryBuilder};
    use yoga_core::{TypeId, ValueKind};

    #[test]
    fn test_lookups() {
        // GIVEN
        let mut builder = RegistryBuilder::new();
        let bikeshed = builder
            .add_type("Bikeshed")
            .attr(AttrDef::new("color", ValueKind::String).updatable())
            .attr(AttrDef::new("maximumOccupancy", ValueKind::Int))
            .done()
            .unwrap();
        let registry = builder.build().unwrap();

        // THEN
        assert_eq!(registry.type_count(), 1);
        assert_eq!(registry.get_type_id("Bikeshed"), Some(bikeshed));
        assert_eq!(registry.get_type_id("Shed"), None);
        assert_eq!(registry.get_type(bikeshed).unwrap().name, "Bikeshed");
        assert!(registry.get_type(TypeId::new(99)).is_none());
    }

    #[test]
    #[should_panic(expected = "not registered")]
    fn test_expect_type_panics_on_foreign_type() {
        let registry = RegistryBuilder::new().build().unwrap();

        registry.expect_type(TypeId::new(3));
    }
}
