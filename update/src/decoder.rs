//! Update request decoding.
//!
//! The content type is checked before the body is looked at, so an
//! unsupported content type is reported even for a body that would parse.

use yoga_core::Value;

use crate::candidate::CandidateUpdate;
use crate::error::{UpdateError, UpdateResult};

/// An accepted media type identifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContentType(String);

impl ContentType {
    /// The JSON media type.
    pub const JSON: &'static str = "application/json";

    pub fn new(media_type: impl Into<String>) -> Self {
        Self(media_type.into())
    }

    /// The JSON content type.
    pub fn json() -> Self {
        Self::new(Self::JSON)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Check a declared content type header against this identifier.
    ///
    /// The header must be the identifier itself: no parameters, same case.
    pub fn matches(&self, declared: &str) -> bool {
        declared == self.0
    }
}

impl Default for ContentType {
    fn default() -> Self {
        Self::json()
    }
}

/// Decode a request body into a candidate update.
pub fn decode(
    body: &[u8],
    declared: Option<&str>,
    accepted: &ContentType,
) -> UpdateResult<CandidateUpdate> {
    let supported = vec![accepted.as_str().to_string()];
    let declared = declared.ok_or_else(|| UpdateError::missing_content_type(supported.clone()))?;
    if !accepted.matches(declared) {
        return Err(UpdateError::unsupported_content_type(declared, supported));
    }

    let document: serde_json::Value = serde_json::from_slice(body)
        .map_err(|e| UpdateError::malformed_body(format!("invalid JSON: {}", e)))?;

    match document {
        serde_json::Value::Object(entries) => Ok(entries
            .into_iter()
            .map(|(attr, value)| (attr, Value::from_json(value)))
            .collect()),
        other => Err(UpdateError::malformed_body(format!(
            "expected a JSON object, got {}",
            Value::from_json(other).type_name()
        ))),
    }
}
