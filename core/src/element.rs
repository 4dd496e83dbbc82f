//! Element structure for YOGA.
//!
//! An element is a single named record inside a collection. Its name is the
//! lookup key and never changes; its attributes change only through the
//! update pipeline.

use std::collections::BTreeMap;

use crate::{Attributes, TypeId, Value};

/// Key under which the element name appears in its read state.
pub const NAME_KEY: &str = "name";

/// A named, typed record.
#[derive(Debug, Clone, PartialEq)]
pub struct Element {
    /// Unique name within the owning collection.
    name: String,
    /// Type of this element (reference to registry).
    pub type_id: TypeId,
    /// Commit counter, bumped once per applied update.
    pub version: u64,
    /// Attribute values.
    pub attributes: Attributes,
}

impl Element {
    /// Create a new element with the given properties.
    pub fn new(name: impl Into<String>, type_id: TypeId, attributes: Attributes) -> Self {
        Self {
            name: name.into(),
            type_id,
            version: 1,
            attributes,
        }
    }

    /// The element's name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Get an attribute value by name.
    pub fn get_attr(&self, name: &str) -> Option<&Value> {
        self.attributes.get(name)
    }

    /// Write a batch of attribute values as a single commit.
    ///
    /// The version is bumped once, and only if the batch is non-empty.
    pub fn commit<I>(&mut self, values: I)
    where
        I: IntoIterator<Item = (String, Value)>,
    {
        let mut written = false;
        for (name, value) in values {
            self.attributes.insert(name, value);
            written = true;
        }
        if written {
            self.version += 1;
        }
    }

    /// Produce the readable state of this element: its name plus the given
    /// exposed attributes. Attributes the element has no value for are omitted.
    pub fn to_state<'a, I>(&self, exposed: I) -> Value
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut state = BTreeMap::new();
        state.insert(NAME_KEY.to_string(), Value::String(self.name.clone()));
        for attr in exposed {
            if let Some(value) = self.attributes.get(attr) {
                state.insert(attr.to_string(), value.clone());
            }
        }
        Value::Map(state)
    }
}
