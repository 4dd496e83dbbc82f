//! In-memory element storage.

use std::collections::HashMap;
use std::sync::{PoisonError, RwLock};

use yoga_core::Element;

use crate::error::{StoreError, StoreResult};

/// Storage boundary used by the update endpoint.
///
/// `get` hands out a copy of the element; changes become visible to other
/// readers only once `save` succeeds.
pub trait ElementStore: Send + Sync {
    /// Look up an element by name.
    fn get(&self, name: &str) -> Option<Element>;

    /// Replace a stored element with a new version of itself.
    fn save(&self, element: Element) -> StoreResult<()>;
}

/// An in-memory collection of elements keyed by name.
#[derive(Debug, Default)]
pub struct Collection {
    elements: RwLock<HashMap<String, Element>>,
}

impl Collection {
    /// Create a new empty collection.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an element. Names are unique within a collection.
    pub fn insert(&self, element: Element) -> StoreResult<()> {
        let mut elements = self.elements.write().unwrap_or_else(PoisonError::into_inner);
        if elements.contains_key(element.name()) {
            return Err(StoreError::DuplicateElement(element.name().to_string()));
        }
        elements.insert(element.name().to_string(), element);
        Ok(())
    }

    /// Remove an element by name, returning it.
    pub fn remove(&self, name: &str) -> StoreResult<Element> {
        self.elements
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .remove(name)
            .ok_or_else(|| StoreError::ElementNotFound(name.to_string()))
    }

    /// Check if an element with this name is stored.
    pub fn contains(&self, name: &str) -> bool {
        self.elements
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .contains_key(name)
    }

    /// Number of stored elements.
    pub fn len(&self) -> usize {
        self.elements
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    /// Check if the collection is empty.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Names of all stored elements, sorted.
    pub fn names(&self) -> Vec<String> {
        let mut names: Vec<String> = self
            .elements
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .keys()
            .cloned()
            .collect();
        names.sort();
        names
    }
}

impl ElementStore for Collection {
    fn get(&self, name: &str) -> Option<Element> {
        self.elements
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(name)
            .cloned()
    }

    fn save(&self, element: Element) -> StoreResult<()> {
        let mut elements = self.elements.write().unwrap_or_else(PoisonError::into_inner);
        // Saving never resurrects an element removed in the meantime
        match elements.get_mut(element.name()) {
            Some(slot) => {
                *slot = element;
                Ok(())
            }
            None => Err(StoreError::ElementNotFound(element.name().to_string())),
        }
    }
}
