//! RegistryBuilder for constructing an immutable Registry.

use crate::{AttrDef, Registry, TypeDef};
use regex_lite::Regex;
use std::collections::HashMap;
use thiserror::Error;
use yoga_core::{TypeId, ValueKind};

/// Errors that can occur during registry construction.
#[derive(Debug, Error)]
pub enum RegistryError {
    #[error("Duplicate type name: {0}")]
    DuplicateTypeName(String),

    #[error("Duplicate attribute: {attr} on type {type_name}")]
    DuplicateAttribute { type_name: String, attr: String },

    #[error("Invalid match pattern for {attr}: {message}")]
    InvalidPattern { attr: String, message: String },

    #[error("Invalid range for {attr}: {message}")]
    InvalidRange { attr: String, message: String },
}

impl RegistryError {
    pub fn duplicate_attribute(type_name: impl Into<String>, attr: impl Into<String>) -> Self {
        Self::DuplicateAttribute {
            type_name: type_name.into(),
            attr: attr.into(),
        }
    }

    pub fn invalid_pattern(attr: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidPattern {
            attr: attr.into(),
            message: message.into(),
        }
    }

    pub fn invalid_range(attr: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidRange {
            attr: attr.into(),
            message: message.into(),
        }
    }
}

/// Builder for constructing an immutable Registry.
#[derive(Debug, Default)]
pub struct RegistryBuilder {
    /// Next type ID to allocate.
    next_type_id: u32,
    /// Types being built.
    types: HashMap<TypeId, TypeDef>,
    /// Type name to ID mapping.
    type_names: HashMap<String, TypeId>,
}

impl RegistryBuilder {
    /// Create a new builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a type definition.
    pub fn add_type(&mut self, name: impl Into<String>) -> TypeBuilder<'_> {
        let name = name.into();
        let id = TypeId::new(self.next_type_id);
        self.next_type_id += 1;

        TypeBuilder {
            builder: self,
            id,
            name,
            attributes: Vec::new(),
        }
    }

    /// Build the immutable Registry.
    pub fn build(self) -> Result<Registry, RegistryError> {
        Ok(Registry::new(self.types, self.type_names))
    }
}

/// Builder for a type definition.
pub struct TypeBuilder<'a> {
    builder: &'a mut RegistryBuilder,
    id: TypeId,
    name: String,
    attributes: Vec<AttrDef>,
}

impl<'a> TypeBuilder<'a> {
    /// Add an attribute.
    pub fn attr(mut self, attr: AttrDef) -> Self {
        self.attributes.push(attr);
        self
    }

    /// Finish building this type.
    pub fn done(self) -> Result<TypeId, RegistryError> {
        // Check for duplicate name
        if self.builder.type_names.contains_key(&self.name) {
            return Err(RegistryError::DuplicateTypeName(self.name));
        }

        let mut type_def = TypeDef::new(self.id, self.name.clone());

        for attr in self.attributes {
            if type_def.has_attr(&attr.name) {
                return Err(RegistryError::duplicate_attribute(&self.name, &attr.name));
            }

            check_range(&attr)?;

            if let Some(pattern) = &attr.match_pattern {
                if !matches!(attr.kind, ValueKind::String | ValueKind::Any) {
                    return Err(RegistryError::invalid_pattern(
                        &attr.name,
                        format!("patterns only apply to strings, not {}", attr.kind),
                    ));
                }
                // Anchor so the pattern must cover the whole value
                let anchored = format!("^(?:{})$", pattern);
                let regex = Regex::new(&anchored)
                    .map_err(|e| RegistryError::invalid_pattern(&attr.name, e.to_string()))?;
                type_def.patterns.insert(attr.name.clone(), regex);
            }

            type_def.attributes.insert(attr.name.clone(), attr);
        }

        self.builder.type_names.insert(self.name, self.id);
        self.builder.types.insert(self.id, type_def);

        Ok(self.id)
    }
}

fn check_range(attr: &AttrDef) -> Result<(), RegistryError> {
    for bound in [&attr.min, &attr.max].into_iter().flatten() {
        if bound.as_float().is_none() {
            return Err(RegistryError::invalid_range(
                &attr.name,
                format!("bound {} is not numeric", bound),
            ));
        }
    }

    if let (Some(min), Some(max)) = (&attr.min, &attr.max) {
        if !max.gte(min) {
            return Err(RegistryError::invalid_range(
                &attr.name,
                format!("min {} is greater than max {}", min, max),
            ));
        }
    }

    Ok(())
}
