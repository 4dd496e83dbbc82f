//! Applying an allowed candidate update.
//!
//! Every value is converted first without touching the element. Only when
//! all conversions succeed are the values written, as a single commit.

use yoga_core::{Element, Value, ValueKind};
use yoga_registry::{AttrDef, Registry, TypeDef};

use crate::candidate::CandidateUpdate;
use crate::error::{ConversionFailure, UpdateError, UpdateResult};
use crate::result::AppliedUpdate;

/// Convert and commit a candidate that the validator allowed.
///
/// # Panics
///
/// Panics if the element's type is not registered.
pub fn apply(
    registry: &Registry,
    element: &mut Element,
    candidate: &CandidateUpdate,
) -> UpdateResult<AppliedUpdate> {
    let type_def = registry.expect_type(element.type_id);
    let converted = convert_all(type_def, candidate)?;

    // Only values that differ are written, so repeating an update is a no-op
    let changes: Vec<(String, Value)> = converted
        .into_iter()
        .filter(|(name, value)| element.get_attr(name) != Some(value))
        .collect();
    let changed = changes.iter().map(|(name, _)| name.clone()).collect();

    element.commit(changes);

    Ok(AppliedUpdate {
        changed,
        version: element.version,
    })
}

/// Convert every candidate value against its attribute definition.
///
/// Pure: returns the converted values in attribute name order, or an
/// `InvalidValue` error listing every failure.
pub fn convert_all(
    type_def: &TypeDef,
    candidate: &CandidateUpdate,
) -> UpdateResult<Vec<(String, Value)>> {
    let mut converted = Vec::with_capacity(candidate.len());
    let mut failures = Vec::new();

    for (name, value) in candidate.iter() {
        match convert_value(type_def, name, value) {
            Ok(value) => converted.push((name.to_string(), value)),
            Err(reason) => failures.push(ConversionFailure {
                attr: name.to_string(),
                reason,
            }),
        }
    }

    if failures.is_empty() {
        Ok(converted)
    } else {
        Err(UpdateError::invalid_value(failures))
    }
}

fn convert_value(type_def: &TypeDef, name: &str, value: &Value) -> Result<Value, String> {
    let attr = type_def
        .get_attr(name)
        .ok_or_else(|| format!("unknown attribute on type {}", type_def.name))?;

    if value.is_null() {
        return if attr.nullable {
            Ok(Value::Null)
        } else {
            Err("null is not allowed".to_string())
        };
    }

    let converted = match (attr.kind, value) {
        (ValueKind::Any, v) => v.clone(),
        // Int can be used where Float is expected
        (ValueKind::Float, Value::Int(i)) => Value::Float(*i as f64),
        (kind, v) if v.kind() == kind => v.clone(),
        (kind, v) => return Err(format!("expected {}, got {}", kind, v.type_name())),
    };

    check_range(attr, &converted)?;

    if let (Some(regex), Value::String(s)) = (type_def.pattern(name), &converted) {
        if !regex.is_match(s) {
            return Err(format!(
                "value does not match pattern {}",
                attr.match_pattern.as_deref().unwrap_or_default()
            ));
        }
    }

    Ok(converted)
}

/// Check range constraints (min/max) for a value.
fn check_range(attr: &AttrDef, value: &Value) -> Result<(), String> {
    if let Some(min_val) = &attr.min {
        if !value.gte(min_val) {
            return Err(format!("{} is out of range{}", value, range_desc(attr)));
        }
    }

    if let Some(max_val) = &attr.max {
        if !value.lte(max_val) {
            return Err(format!("{} is out of range{}", value, range_desc(attr)));
        }
    }

    Ok(())
}

fn range_desc(attr: &AttrDef) -> String {
    match (&attr.min, &attr.max) {
        (Some(min), Some(max)) => format!(" [{}..{}]", min, max),
        (Some(min), None) => format!(" [>= {}]", min),
        (None, Some(max)) => format!(" [<= {}]", max),
        (None, None) => String::new(),
    }
}
