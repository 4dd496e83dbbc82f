//! Update scenarios against an in-memory bikeshed collection.

use std::sync::Arc;
use std::thread;

use pretty_assertions::assert_eq;
use serde_json::json;
use yoga_core::{attrs, messages, Element, Value, ValueKind};
use yoga_endpoint::{
    CollectionEndpoint, EndpointConfig, Outcome, OutcomeClass, RejectReason, UpdateStage,
};
use yoga_registry::{AttrDef, Registry, RegistryBuilder};
use yoga_store::{Collection, ElementStore, StoreError, StoreResult};

const JSON: Option<&str> = Some("application/json");

fn bikeshed_registry() -> Arc<Registry> {
    let mut builder = RegistryBuilder::new();
    builder
        .add_type("Bikeshed")
        .attr(AttrDef::new("color", ValueKind::String).updatable())
        .attr(
            AttrDef::new("height", ValueKind::Float)
                .updatable()
                .with_range(Some(Value::Int(1)), Some(Value::Int(10))),
        )
        .attr(AttrDef::new("maximumOccupancy", ValueKind::Int))
        .done()
        .unwrap();
    Arc::new(builder.build().unwrap())
}

fn bikesheds() -> CollectionEndpoint<Collection> {
    bikesheds_with(EndpointConfig::default())
}

fn bikesheds_with(config: EndpointConfig) -> CollectionEndpoint<Collection> {
    let registry = bikeshed_registry();
    let bikeshed = registry.get_type_id("Bikeshed").unwrap();
    let collection = Collection::new();
    collection
        .insert(Element::new(
            "e1",
            bikeshed,
            attrs! { "color" => "red", "height" => 2.5, "maximumOccupancy" => 100i64 },
        ))
        .unwrap();
    CollectionEndpoint::with_config(registry, collection, config)
}

fn read_attr(endpoint: &CollectionEndpoint<Collection>, attr: &str) -> Option<Value> {
    let state = endpoint.read_element("e1").state?;
    state.as_map()?.get(attr).cloned()
}

fn body_json(outcome: &Outcome) -> serde_json::Value {
    serde_json::to_value(outcome.body.as_ref().unwrap()).unwrap()
}

#[test]
fn test_update_mutable_attribute() {
    // GIVEN
    let endpoint = bikesheds();

    // WHEN
    let outcome = endpoint.update_element("e1", br#"{"color": "green"}"#, JSON);

    // THEN
    assert_eq!(outcome.class, OutcomeClass::SuccessNoContent);
    assert_eq!(outcome.status, 204);
    assert_eq!(read_attr(&endpoint, "color"), Some(Value::from("green")));
    assert_eq!(read_attr(&endpoint, "maximumOccupancy"), Some(Value::Int(100)));
}

#[test]
fn test_update_immutable_attribute_forbidden() {
    // GIVEN
    let endpoint = bikesheds();

    // WHEN
    let outcome = endpoint.update_element("e1", br#"{"maximumOccupancy": 200}"#, JSON);

    // THEN
    assert_eq!(outcome.class, OutcomeClass::ClientPolicyError);
    assert_eq!(outcome.status, 403);
    assert_eq!(
        body_json(&outcome),
        json!({
            "message": messages::ERR_FORBIDDEN_UPDATE,
            "attribute": "maximumOccupancy",
            "details": {
                "requestedAttributes": ["maximumOccupancy"],
                "updatableAttributes": ["color", "height"],
                "offendingAttributes": ["maximumOccupancy"],
            },
        })
    );
    assert_eq!(read_attr(&endpoint, "maximumOccupancy"), Some(Value::Int(100)));
}

#[test]
fn test_mixed_update_changes_nothing() {
    // GIVEN
    let endpoint = bikesheds();

    // WHEN
    let outcome = endpoint.update_element(
        "e1",
        br#"{"maximumOccupancy": 200, "color": "green"}"#,
        JSON,
    );

    // THEN
    assert_eq!(outcome.class, OutcomeClass::ClientPolicyError);
    assert_eq!(read_attr(&endpoint, "color"), Some(Value::from("red")));
    assert_eq!(read_attr(&endpoint, "maximumOccupancy"), Some(Value::Int(100)));
    assert_eq!(endpoint.store().get("e1").unwrap().version, 1);
}

#[test]
fn test_missing_content_type() {
    let endpoint = bikesheds();

    let outcome = endpoint.update_element("e1", br#"{"color": "green"}"#, None);

    assert_eq!(outcome.class, OutcomeClass::ClientFormatError);
    assert_eq!(outcome.status, 415);
    assert_eq!(
        body_json(&outcome),
        json!({
            "message": messages::ERR_MISSING_CONTENT_TYPE,
            "details": {
                "supportedMimeTypes": ["application/json"],
                "providedMimeType": null,
            },
        })
    );
    assert_eq!(read_attr(&endpoint, "color"), Some(Value::from("red")));
}

#[test]
fn test_unsupported_content_type() {
    let endpoint = bikesheds();

    let outcome = endpoint.update_element("e1", br#"{"color": "green"}"#, Some("ZALGO/ZALGO"));

    assert_eq!(outcome.status, 415);
    let body = body_json(&outcome);
    assert_eq!(body["message"], json!(messages::ERR_UNSUPPORTED_CONTENT_TYPE));
    assert_eq!(body["details"]["providedMimeType"], json!("ZALGO/ZALGO"));
    assert_eq!(read_attr(&endpoint, "color"), Some(Value::from("red")));
}

#[test]
fn test_content_type_variants_rejected() {
    // GIVEN
    let endpoint = bikesheds();

    for declared in ["application/json; charset=utf-8", "Application/JSON"] {
        // WHEN
        let outcome = endpoint.update_element("e1", br#"{"color": "green"}"#, Some(declared));

        // THEN
        assert_eq!(outcome.status, 415);
        assert_eq!(body_json(&outcome)["details"]["providedMimeType"], json!(declared));
    }
    assert_eq!(read_attr(&endpoint, "color"), Some(Value::from("red")));
}

#[test]
fn test_configured_content_type() {
    let config = EndpointConfig::new().with_accepted_content_type("application/vnd.bikeshed+json");
    let endpoint = bikesheds_with(config);

    let plain = endpoint.update_element("e1", br#"{"color": "green"}"#, JSON);
    let custom = endpoint.update_element(
        "e1",
        br#"{"color": "green"}"#,
        Some("application/vnd.bikeshed+json"),
    );

    assert_eq!(plain.status, 415);
    assert_eq!(custom.status, 204);
}

#[test]
fn test_malformed_body() {
    let endpoint = bikesheds();

    let outcome = endpoint.update_element("e1", br#"{"color": "#, JSON);

    assert_eq!(outcome.class, OutcomeClass::ClientFormatError);
    assert_eq!(outcome.status, 400);
    assert_eq!(
        outcome.stage,
        UpdateStage::Rejected(RejectReason::MalformedBody)
    );
}

#[test]
fn test_unknown_element() {
    let endpoint = bikesheds();

    let outcome = endpoint.update_element("e2", br#"{"color": "green"}"#, JSON);

    assert_eq!(outcome.class, OutcomeClass::NotFound);
    assert_eq!(outcome.status, 404);
    assert_eq!(body_json(&outcome)["message"], json!("no such element e2"));
}

#[test]
fn test_unknown_attribute_forbidden() {
    let endpoint = bikesheds();

    let outcome = endpoint.update_element("e1", br#"{"roof": "thatch"}"#, JSON);

    assert_eq!(outcome.class, OutcomeClass::ClientPolicyError);
    assert_eq!(outcome.body.unwrap().attribute.as_deref(), Some("roof"));
}

#[test]
fn test_empty_update_is_noop() {
    let endpoint = bikesheds();

    let outcome = endpoint.update_element("e1", b"{}", JSON);

    assert_eq!(outcome.class, OutcomeClass::SuccessNoContent);
    assert_eq!(endpoint.store().get("e1").unwrap().version, 1);
}

#[test]
fn test_repeated_update_is_idempotent() {
    // GIVEN
    let endpoint = bikesheds();
    let body = br#"{"color": "green", "height": 4}"#;

    // WHEN
    endpoint.update_element("e1", body, JSON);
    let after_once = endpoint.read_element("e1").state;
    let again = endpoint.update_element("e1", body, JSON);

    // THEN
    assert_eq!(again.class, OutcomeClass::SuccessNoContent);
    assert_eq!(endpoint.read_element("e1").state, after_once);
    assert_eq!(read_attr(&endpoint, "height"), Some(Value::Float(4.0)));
    assert_eq!(endpoint.store().get("e1").unwrap().version, 2);
}

#[test]
fn test_invalid_value_changes_nothing() {
    // GIVEN
    let endpoint = bikesheds();

    // WHEN: color converts, height is out of range
    let outcome = endpoint.update_element("e1", br#"{"color": "green", "height": 50}"#, JSON);

    // THEN
    assert_eq!(outcome.status, 400);
    assert_eq!(
        outcome.stage,
        UpdateStage::Rejected(RejectReason::InvalidValue)
    );
    assert_eq!(outcome.body.unwrap().attribute.as_deref(), Some("height"));
    assert_eq!(read_attr(&endpoint, "color"), Some(Value::from("red")));
}

#[test]
fn test_concurrent_updates_never_interleave() {
    // GIVEN
    let endpoint = Arc::new(bikesheds());
    let threads = 8;
    let updates_per_thread = 25;

    // WHEN: every update writes a color no other update uses
    let handles: Vec<_> = (0..threads)
        .map(|t| {
            let endpoint = Arc::clone(&endpoint);
            thread::spawn(move || {
                for i in 0..updates_per_thread {
                    let body = format!(r#"{{"color": "shade-{}-{}"}}"#, t, i);
                    let outcome = endpoint.update_element("e1", body.as_bytes(), JSON);
                    assert_eq!(outcome.class, OutcomeClass::SuccessNoContent);
                }
            })
        })
        .collect();
    for handle in handles {
        handle.join().unwrap();
    }

    // THEN
    let element = endpoint.store().get("e1").unwrap();
    assert_eq!(element.version, 1 + (threads * updates_per_thread) as u64);
    assert_eq!(element.get_attr("maximumOccupancy"), Some(&Value::Int(100)));
}

/// A store whose elements disappear between lookup and save.
struct VanishingStore {
    inner: Collection,
}

impl ElementStore for VanishingStore {
    fn get(&self, name: &str) -> Option<Element> {
        self.inner.get(name)
    }

    fn save(&self, element: Element) -> StoreResult<()> {
        Err(StoreError::ElementNotFound(element.name().to_string()))
    }
}

#[test]
fn test_element_removed_during_update() {
    let registry = bikeshed_registry();
    let bikeshed = registry.get_type_id("Bikeshed").unwrap();
    let inner = Collection::new();
    inner
        .insert(Element::new("e1", bikeshed, attrs! { "color" => "red" }))
        .unwrap();
    let endpoint = CollectionEndpoint::new(registry, VanishingStore { inner });

    let outcome = endpoint.update_element("e1", br#"{"color": "green"}"#, JSON);

    assert_eq!(outcome.class, OutcomeClass::NotFound);
}
