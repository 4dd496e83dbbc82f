//! Update error types.

use thiserror::Error;
use yoga_core::messages;

/// Result type for update operations.
pub type UpdateResult<T> = Result<T, UpdateError>;

/// A single attribute whose value could not be converted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConversionFailure {
    pub attr: String,
    pub reason: String,
}

/// Classification of an update failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UpdateErrorKind {
    UnsupportedContentType,
    MalformedBody,
    Forbidden,
    InvalidValue,
}

/// Errors that can occur while decoding, validating or applying an update.
#[derive(Debug, Error)]
pub enum UpdateError {
    #[error("Unsupported content type: {}", .provided.as_deref().unwrap_or("<none>"))]
    UnsupportedContentType {
        provided: Option<String>,
        supported: Vec<String>,
    },

    #[error("Malformed body: {reason}")]
    MalformedBody { reason: String },

    #[error("Update forbidden for attributes: {}", .offending.join(", "))]
    Forbidden {
        /// Every attribute named by the candidate, sorted.
        requested: Vec<String>,
        /// Every attribute of the element type that accepts updates, sorted.
        updatable: Vec<String>,
        /// The requested attributes that do not accept updates, sorted.
        offending: Vec<String>,
    },

    #[error("Invalid value for attribute {attr}: {reason}")]
    InvalidValue {
        attr: String,
        reason: String,
        failures: Vec<ConversionFailure>,
    },
}

impl UpdateError {
    pub fn missing_content_type(supported: Vec<String>) -> Self {
        Self::UnsupportedContentType {
            provided: None,
            supported,
        }
    }

    pub fn unsupported_content_type(provided: impl Into<String>, supported: Vec<String>) -> Self {
        Self::UnsupportedContentType {
            provided: Some(provided.into()),
            supported,
        }
    }

    pub fn malformed_body(reason: impl Into<String>) -> Self {
        Self::MalformedBody {
            reason: reason.into(),
        }
    }

    pub fn forbidden(
        requested: Vec<String>,
        updatable: Vec<String>,
        offending: Vec<String>,
    ) -> Self {
        Self::Forbidden {
            requested,
            updatable,
            offending,
        }
    }

    /// Build an `InvalidValue` error reporting the first failure.
    ///
    /// # Panics
    ///
    /// Panics if `failures` is empty.
    pub fn invalid_value(failures: Vec<ConversionFailure>) -> Self {
        let first = match failures.first() {
            Some(first) => first.clone(),
            None => panic!("invalid_value requires at least one conversion failure"),
        };
        Self::InvalidValue {
            attr: first.attr,
            reason: first.reason,
            failures,
        }
    }

    /// Get the failure classification.
    pub fn kind(&self) -> UpdateErrorKind {
        match self {
            Self::UnsupportedContentType { .. } => UpdateErrorKind::UnsupportedContentType,
            Self::MalformedBody { .. } => UpdateErrorKind::MalformedBody,
            Self::Forbidden { .. } => UpdateErrorKind::Forbidden,
            Self::InvalidValue { .. } => UpdateErrorKind::InvalidValue,
        }
    }

    /// Client-facing message for this failure.
    pub fn message(&self) -> &'static str {
        match self {
            Self::UnsupportedContentType { provided: None, .. } => {
                messages::ERR_MISSING_CONTENT_TYPE
            }
            Self::UnsupportedContentType { .. } => messages::ERR_UNSUPPORTED_CONTENT_TYPE,
            Self::MalformedBody { .. } => messages::ERR_MALFORMED_BODY,
            Self::Forbidden { .. } => messages::ERR_FORBIDDEN_UPDATE,
            Self::InvalidValue { .. } => messages::ERR_INVALID_VALUE,
        }
    }

    /// The attribute this failure is about, if any.
    pub fn attribute(&self) -> Option<&str> {
        match self {
            Self::Forbidden { offending, .. } => offending.first().map(String::as_str),
            Self::InvalidValue { attr, .. } => Some(attr),
            _ => None,
        }
    }
}
