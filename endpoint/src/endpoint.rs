//! The collection update endpoint.

use std::sync::Arc;

use tracing::{debug, info, warn};
use yoga_registry::Registry;
use yoga_store::ElementStore;
use yoga_update::{decode, UpdateError, Updater};

use crate::config::EndpointConfig;
use crate::locks::ElementLocks;
use crate::outcome::{Outcome, UpdateStage};

/// Accepts update and read requests for the elements of one collection.
pub struct CollectionEndpoint<S: ElementStore> {
    registry: Arc<Registry>,
    store: S,
    config: EndpointConfig,
    locks: ElementLocks,
}

impl<S: ElementStore> CollectionEndpoint<S> {
    /// Create an endpoint accepting JSON bodies.
    pub fn new(registry: Arc<Registry>, store: S) -> Self {
        Self::with_config(registry, store, EndpointConfig::default())
    }

    /// Create an endpoint with the given configuration.
    pub fn with_config(registry: Arc<Registry>, store: S, config: EndpointConfig) -> Self {
        Self {
            registry,
            store,
            config,
            locks: ElementLocks::new(),
        }
    }

    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn config(&self) -> &EndpointConfig {
        &self.config
    }

    // ==================== Update ====================

    /// Handle a partial update of the named element.
    ///
    /// The body is decoded before the element lock is taken. Lookup,
    /// validation, application and the save all happen under the lock, and
    /// the stored element is only replaced once every value has converted.
    pub fn update_element(
        &self,
        name: &str,
        body: &[u8],
        content_type: Option<&str>,
    ) -> Outcome {
        enter(name, UpdateStage::Received);

        let candidate = match decode(body, content_type, &self.config.accepted_content_type) {
            Ok(candidate) => candidate,
            Err(err) => return reject(name, &err),
        };
        enter(name, UpdateStage::Decoded);

        // Unknown names never reach the lock table
        if self.store.get(name).is_none() {
            return not_found(name);
        }

        let _guard = self.locks.lock(name);
        let mut element = match self.store.get(name) {
            Some(element) => element,
            None => return not_found(name),
        };

        let updater = Updater::new(&self.registry);
        if let Err(err) = updater.check(&element, &candidate) {
            return reject(name, &err);
        }
        enter(name, UpdateStage::Validated);

        let applied = match updater.apply(&mut element, &candidate) {
            Ok(applied) => applied,
            Err(err) => return reject(name, &err),
        };

        if !applied.is_noop() {
            if let Err(err) = self.store.save(element) {
                warn!(element = %name, error = %err, "element vanished before save");
                return not_found(name);
            }
        }
        enter(name, UpdateStage::Applied);

        info!(
            element = %name,
            version = applied.version,
            changed = ?applied.changed,
            "update applied"
        );
        enter(name, UpdateStage::Responded);
        Outcome::applied()
    }

    // ==================== Read ====================

    /// Read the exposed state of the named element.
    pub fn read_element(&self, name: &str) -> Outcome {
        match self.store.get(name) {
            Some(element) => {
                let type_def = self.registry.expect_type(element.type_id);
                Outcome::read(element.to_state(type_def.exposed_attrs()))
            }
            None => not_found(name),
        }
    }
}

fn enter(name: &str, stage: UpdateStage) {
    debug!(element = %name, stage = %stage, "update stage");
}

fn reject(name: &str, err: &UpdateError) -> Outcome {
    let outcome = Outcome::rejected(err);
    warn!(element = %name, stage = %outcome.stage, error = %err, "update rejected");
    enter(name, UpdateStage::Responded);
    outcome
}

fn not_found(name: &str) -> Outcome {
    let outcome = Outcome::not_found(name);
    warn!(element = %name, stage = %outcome.stage, "no such element");
    enter(name, UpdateStage::Responded);
    outcome
}
