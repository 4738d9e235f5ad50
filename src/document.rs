// Copyright (c) 2025 - Cowboy AI, Inc.
//! Cluster Specification Documents
//!
//! A JSON document is either a bare properties object or a wrapper of the
//! form `{ "properties": { ... } }`. The shape is decided by the presence of
//! the `properties` key before any typed parse, so a type error inside a
//! wrapped document is reported as such.

use serde_json::Value;
use thiserror::Error;

use crate::domain::ClusterProperties;

/// Key holding the properties object in a wrapped document
pub const PROPERTIES_KEY: &str = "properties";

/// Errors raised while reading a specification document
#[derive(Debug, Error)]
pub enum DocumentError {
    /// Not well-formed JSON
    #[error("invalid JSON: {0}")]
    Syntax(#[source] serde_json::Error),

    /// Wrapped document whose `properties` object has the wrong shape
    #[error("invalid cluster properties under 'properties': {0}")]
    Wrapped(#[source] serde_json::Error),

    /// Bare document with the wrong shape
    #[error("invalid cluster properties: {0}")]
    Bare(#[source] serde_json::Error),
}

/// Parse a specification document in either shape
pub fn parse_document(raw: &str) -> Result<ClusterProperties, DocumentError> {
    let mut value: Value = serde_json::from_str(raw).map_err(DocumentError::Syntax)?;

    match value.as_object_mut().and_then(|obj| obj.remove(PROPERTIES_KEY)) {
        Some(properties) => serde_json::from_value(properties).map_err(DocumentError::Wrapped),
        None => serde_json::from_value(value).map_err(DocumentError::Bare),
    }
}
