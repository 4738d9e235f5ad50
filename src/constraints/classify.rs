// Copyright (c) 2025 - Cowboy AI, Inc.
//! Violation Classification
//!
//! Maps the first constraint violation onto a domain-specific error. Only
//! the first violation is ever surfaced; the rest are carried along in the
//! catch-all message and otherwise dropped.

use crate::config::ValidationLimits;
use crate::errors::ValidationError;

use super::{ConstraintViolations, ViolationValue};

/// Namespaces whose only failure mode is being absent
const REQUIRED_NAMESPACES: [&str; 4] = [
    "Properties.ServicePrincipalProfile.ClientID",
    "Properties.ServicePrincipalProfile.Secret",
    "Properties.WindowsProfile.AdminUsername",
    "Properties.WindowsProfile.AdminPassword",
];

const AGENT_POOL_PREFIX: &str = "Properties.AgentPoolProfiles";

/// Turn an engine failure into the error returned to the caller
///
/// # Rules (first match wins)
/// 1. Service principal and Windows credentials: missing field
/// 2. Agent pool `.Name` / `.VMSize`: missing field
/// 3. Agent pool `.Count`: count range
/// 4. Agent pool `.OSDiskSizeGB`: disk size range with the offending integer
/// 5. Agent pool `.StorageProfile`: unknown storage profile
/// 6. Anything else, or a value of an unexpected type: catch-all naming the
///    namespace and every violation
pub fn classify(violations: &ConstraintViolations, limits: &ValidationLimits) -> ValidationError {
    let first = violations.first();
    let ns = first.namespace.as_str();

    if REQUIRED_NAMESPACES.contains(&ns) {
        return ValidationError::MissingField(ns.to_string());
    }

    if ns.starts_with(AGENT_POOL_PREFIX) {
        if ns.ends_with(".Name") || ns.ends_with(".VMSize") {
            return ValidationError::MissingField(ns.to_string());
        }
        if ns.ends_with(".Count") {
            return ValidationError::CountOutOfRange {
                min: limits.min_agent_count,
                max: limits.max_agent_count,
            };
        }
        if ns.ends_with(".OSDiskSizeGB") {
            if let ViolationValue::Int(value) = first.value {
                return ValidationError::DiskSizeOutOfRange {
                    value,
                    min: limits.min_disk_size_gb,
                    max: limits.max_disk_size_gb,
                };
            }
        } else if ns.ends_with(".StorageProfile") {
            if let ViolationValue::Str(value) = &first.value {
                return ValidationError::UnknownStorageProfile {
                    value: value.clone(),
                    expected: limits.managed_disks.clone(),
                };
            }
        }
    }

    ValidationError::UnclassifiedViolation {
        namespace: ns.to_string(),
        violations: violations.to_string(),
    }
}
