//! Common error messages used across YOGA components.
//!
//! These constants keep the messages in error bodies consistent between the
//! update pipeline and the endpoint.

/// Error: the request did not declare a content type.
pub const ERR_MISSING_CONTENT_TYPE: &str = "request didn't specify a content type";

/// Error: no decoder exists for the declared content type.
pub const ERR_UNSUPPORTED_CONTENT_TYPE: &str =
    "no acceptable decoder available for given MIME type";

/// Error: the body could not be decoded under the declared content type.
pub const ERR_MALFORMED_BODY: &str = "request body could not be decoded";

/// Error: the update named at least one attribute that may not be updated.
pub const ERR_FORBIDDEN_UPDATE: &str = "attribute update not allowed, update aborted";

/// Error: an updatable attribute was given a value it cannot hold.
pub const ERR_INVALID_VALUE: &str = "invalid attribute value, update aborted";

/// Error prefix: the named element does not exist.
pub const ERR_NO_SUCH_ELEMENT: &str = "no such element";
