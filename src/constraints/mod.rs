// Copyright (c) 2025 - Cowboy AI, Inc.
//! Field Constraints
//!
//! Declarative field-level checks (required, numeric range, enum membership)
//! over a [`ClusterProperties`] tree. An engine reports every violation it
//! finds, in field order; [`classify`] turns the first one into an operator
//! facing [`ValidationError`](crate::errors::ValidationError).

pub mod classify;
pub mod structural;

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::domain::ClusterProperties;

pub use classify::classify;
pub use structural::StructuralConstraints;

/// Offending value carried by a violation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "snake_case")]
pub enum ViolationValue {
    Null,
    Int(i64),
    Str(String),
}

impl fmt::Display for ViolationValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ViolationValue::Null => write!(f, "<nil>"),
            ViolationValue::Int(v) => write!(f, "{v}"),
            ViolationValue::Str(v) => write!(f, "{v}"),
        }
    }
}

/// A single failed constraint
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConstraintViolation {
    /// Dotted path to the field, e.g. `Properties.AgentPoolProfiles[0].Count`
    pub namespace: String,
    /// Constraint that failed (`required`, `min`, `max`, `eq`)
    pub tag: String,
    pub value: ViolationValue,
}

impl ConstraintViolation {
    pub fn new(namespace: impl Into<String>, tag: impl Into<String>, value: ViolationValue) -> Self {
        Self {
            namespace: namespace.into(),
            tag: tag.into(),
            value,
        }
    }

    /// Last path segment, without any index suffix
    pub fn field(&self) -> &str {
        let last = self.namespace.rsplit('.').next().unwrap_or(&self.namespace);
        last.split('[').next().unwrap_or(last)
    }
}

impl fmt::Display for ConstraintViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Key: '{}' Error:Field validation for '{}' failed on the '{}' tag (value: {})",
            self.namespace,
            self.field(),
            self.tag,
            self.value
        )
    }
}

/// Ordered, non-empty list of violations from one engine run
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ConstraintViolations(Vec<ConstraintViolation>);

impl ConstraintViolations {
    /// Wrap a list of violations; `None` when the list is empty
    pub fn from_vec(violations: Vec<ConstraintViolation>) -> Option<Self> {
        if violations.is_empty() {
            None
        } else {
            Some(Self(violations))
        }
    }

    /// The violation that gets surfaced
    pub fn first(&self) -> &ConstraintViolation {
        &self.0[0]
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &ConstraintViolation> {
        self.0.iter()
    }
}

impl fmt::Display for ConstraintViolations {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, violation) in self.0.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{violation}")?;
        }
        Ok(())
    }
}

/// Field-level constraint checking over a whole specification
pub trait FieldConstraintEngine {
    fn validate_struct(&self, properties: &ClusterProperties) -> Result<(), ConstraintViolations>;
}
