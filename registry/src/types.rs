//! Schema definition types.

use regex_lite::Regex;
use std::collections::HashMap;
use yoga_core::{TypeId, Value, ValueKind};

/// Whether an attribute accepts updates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mutability {
    /// The attribute may be changed by an update request.
    Mutable,
    /// The attribute is fixed once the element exists.
    #[default]
    Immutable,
}

impl Mutability {
    pub fn is_mutable(&self) -> bool {
        matches!(self, Mutability::Mutable)
    }
}

/// Attribute definition within a type.
#[derive(Debug, Clone)]
pub struct AttrDef {
    /// Attribute name.
    pub name: String,
    /// Expected value kind.
    pub kind: ValueKind,
    /// Whether update requests may change this attribute.
    pub mutability: Mutability,
    /// Whether this attribute is part of the element's read state.
    pub exposed: bool,
    /// Whether this attribute can be null.
    pub nullable: bool,
    /// Minimum value constraint (for Int, Float).
    pub min: Option<Value>,
    /// Maximum value constraint (for Int, Float).
    pub max: Option<Value>,
    /// Match pattern constraint (regex, whole value).
    pub match_pattern: Option<String>,
}

impl AttrDef {
    pub fn new(name: impl Into<String>, kind: ValueKind) -> Self {
        Self {
            name: name.into(),
            kind,
            mutability: Mutability::Immutable,
            exposed: true,
            nullable: false,
            min: None,
            max: None,
            match_pattern: None,
        }
    }

    pub fn updatable(mut self) -> Self {
        self.mutability = Mutability::Mutable;
        self
    }

    pub fn hidden(mut self) -> Self {
        self.exposed = false;
        self
    }

    pub fn nullable(mut self) -> Self {
        self.nullable = true;
        self
    }

    pub fn with_range(mut self, min: Option<Value>, max: Option<Value>) -> Self {
        // Merge rather than replace: only update if Some is provided
        if min.is_some() {
            self.min = min;
        }
        if max.is_some() {
            self.max = max;
        }
        self
    }

    pub fn with_match_pattern(mut self, pattern: impl Into<String>) -> Self {
        self.match_pattern = Some(pattern.into());
        self
    }

    pub fn is_mutable(&self) -> bool {
        self.mutability.is_mutable()
    }
}

/// Element type definition.
#[derive(Debug, Clone)]
pub struct TypeDef {
    /// Unique identifier.
    pub id: TypeId,
    /// Type name.
    pub name: String,
    /// Attribute definitions.
    pub attributes: HashMap<String, AttrDef>,
    /// Compiled match patterns, keyed by attribute name.
    pub(crate) patterns: HashMap<String, Regex>,
}

impl TypeDef {
    pub fn new(id: TypeId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            attributes: HashMap::new(),
            patterns: HashMap::new(),
        }
    }

    /// Get an attribute definition by name.
    pub fn get_attr(&self, name: &str) -> Option<&AttrDef> {
        self.attributes.get(name)
    }

    /// Check if this type has an attribute.
    pub fn has_attr(&self, name: &str) -> bool {
        self.attributes.contains_key(name)
    }

    /// Mutability of an attribute. Unknown attributes are immutable.
    pub fn mutability(&self, name: &str) -> Mutability {
        self.get_attr(name)
            .map(|attr| attr.mutability)
            .unwrap_or(Mutability::Immutable)
    }

    /// Names of all updatable attributes, sorted.
    pub fn updatable_attrs(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self
            .attributes
            .values()
            .filter(|attr| attr.is_mutable())
            .map(|attr| attr.name.as_str())
            .collect();
        names.sort_unstable();
        names
    }

    /// Names of all exposed attributes, sorted.
    pub fn exposed_attrs(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self
            .attributes
            .values()
            .filter(|attr| attr.exposed)
            .map(|attr| attr.name.as_str())
            .collect();
        names.sort_unstable();
        names
    }

    /// Compiled match pattern for an attribute, if it declares one.
    pub fn pattern(&self, name: &str) -> Option<&Regex> {
        self.patterns.get(name)
    }
}
