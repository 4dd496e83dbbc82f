//! Outcomes returned by the endpoint.

use std::fmt;

use serde::Serialize;
use serde_json::{json, Map};
use yoga_core::{messages, Value};
use yoga_update::{UpdateError, UpdateErrorKind};

/// Outcome class of a request, independent of transport.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OutcomeClass {
    /// The element was read.
    Ok,
    /// The update was applied; there is nothing to send back.
    SuccessNoContent,
    /// The request was not in a shape the endpoint can use.
    ClientFormatError,
    /// The request asked for something the mutability policy forbids.
    ClientPolicyError,
    /// No element with the requested name exists.
    NotFound,
}

impl OutcomeClass {
    /// Default HTTP status for this class.
    ///
    /// `ClientFormatError` maps to 400 here; an unsupported content type
    /// carries 415 on its `Outcome` instead.
    pub fn status_code(&self) -> u16 {
        match self {
            OutcomeClass::Ok => 200,
            OutcomeClass::SuccessNoContent => 204,
            OutcomeClass::ClientFormatError => 400,
            OutcomeClass::ClientPolicyError => 403,
            OutcomeClass::NotFound => 404,
        }
    }
}

/// Why an update request was rejected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RejectReason {
    UnsupportedContentType,
    MalformedBody,
    Forbidden,
    InvalidValue,
    NotFound,
}

impl From<UpdateErrorKind> for RejectReason {
    fn from(kind: UpdateErrorKind) -> Self {
        match kind {
            UpdateErrorKind::UnsupportedContentType => RejectReason::UnsupportedContentType,
            UpdateErrorKind::MalformedBody => RejectReason::MalformedBody,
            UpdateErrorKind::Forbidden => RejectReason::Forbidden,
            UpdateErrorKind::InvalidValue => RejectReason::InvalidValue,
        }
    }
}

/// Stage of the update state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UpdateStage {
    Received,
    Decoded,
    Validated,
    Applied,
    Responded,
    Rejected(RejectReason),
}

impl fmt::Display for UpdateStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UpdateStage::Received => write!(f, "received"),
            UpdateStage::Decoded => write!(f, "decoded"),
            UpdateStage::Validated => write!(f, "validated"),
            UpdateStage::Applied => write!(f, "applied"),
            UpdateStage::Responded => write!(f, "responded"),
            UpdateStage::Rejected(reason) => write!(f, "rejected({:?})", reason),
        }
    }
}

/// Structured error body sent with a failed request.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ErrorBody {
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub attribute: Option<String>,
    pub details: Map<String, serde_json::Value>,
}

impl ErrorBody {
    /// Create an error body with no details.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            attribute: None,
            details: Map::new(),
        }
    }

    /// Name the attribute the error is about.
    pub fn with_attribute(mut self, attr: impl Into<String>) -> Self {
        self.attribute = Some(attr.into());
        self
    }

    /// Add a detail entry.
    pub fn with_detail(mut self, key: &str, value: serde_json::Value) -> Self {
        self.details.insert(key.to_string(), value);
        self
    }

    /// Body for an element that does not exist.
    pub fn no_such_element(name: &str) -> Self {
        Self::new(format!("{} {}", messages::ERR_NO_SUCH_ELEMENT, name))
    }
}

impl From<&UpdateError> for ErrorBody {
    fn from(err: &UpdateError) -> Self {
        let body = ErrorBody::new(err.message());
        let body = match err.attribute() {
            Some(attr) => body.with_attribute(attr),
            None => body,
        };

        match err {
            UpdateError::UnsupportedContentType { provided, supported } => body
                .with_detail("supportedMimeTypes", json!(supported))
                .with_detail("providedMimeType", json!(provided)),
            UpdateError::MalformedBody { reason } => body.with_detail("reason", json!(reason)),
            UpdateError::Forbidden {
                requested,
                updatable,
                offending,
            } => body
                .with_detail("requestedAttributes", json!(requested))
                .with_detail("updatableAttributes", json!(updatable))
                .with_detail("offendingAttributes", json!(offending)),
            UpdateError::InvalidValue {
                reason, failures, ..
            } => {
                let failures: Map<String, serde_json::Value> = failures
                    .iter()
                    .map(|f| (f.attr.clone(), json!(f.reason)))
                    .collect();
                body.with_detail("reason", json!(reason))
                    .with_detail("failures", serde_json::Value::Object(failures))
            }
        }
    }
}

/// Result of one endpoint call.
#[derive(Debug, Clone, PartialEq)]
pub struct Outcome {
    pub class: OutcomeClass,
    /// HTTP status code for the transport layer.
    pub status: u16,
    /// Last state-machine stage before responding.
    pub stage: UpdateStage,
    pub body: Option<ErrorBody>,
    /// Element state, for reads.
    pub state: Option<Value>,
}

impl Outcome {
    /// An applied update.
    pub fn applied() -> Self {
        Self {
            class: OutcomeClass::SuccessNoContent,
            status: OutcomeClass::SuccessNoContent.status_code(),
            stage: UpdateStage::Applied,
            body: None,
            state: None,
        }
    }

    /// A successful read.
    pub fn read(state: Value) -> Self {
        Self {
            class: OutcomeClass::Ok,
            status: OutcomeClass::Ok.status_code(),
            stage: UpdateStage::Responded,
            body: None,
            state: Some(state),
        }
    }

    /// The named element does not exist.
    pub fn not_found(name: &str) -> Self {
        Self {
            class: OutcomeClass::NotFound,
            status: OutcomeClass::NotFound.status_code(),
            stage: UpdateStage::Rejected(RejectReason::NotFound),
            body: Some(ErrorBody::no_such_element(name)),
            state: None,
        }
    }

    /// A rejected update.
    pub fn rejected(err: &UpdateError) -> Self {
        let (class, status) = match err.kind() {
            UpdateErrorKind::UnsupportedContentType => (OutcomeClass::ClientFormatError, 415),
            UpdateErrorKind::MalformedBody | UpdateErrorKind::InvalidValue => {
                (OutcomeClass::ClientFormatError, 400)
            }
            UpdateErrorKind::Forbidden => (OutcomeClass::ClientPolicyError, 403),
        };
        Self {
            class,
            status,
            stage: UpdateStage::Rejected(err.kind().into()),
            body: Some(ErrorBody::from(err)),
            state: None,
        }
    }

    pub fn is_success(&self) -> bool {
        matches!(self.class, OutcomeClass::Ok | OutcomeClass::SuccessNoContent)
    }
}
