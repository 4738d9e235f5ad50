// Copyright (c) 2025 - Cowboy AI, Inc.
//! Pool Name Policy
//!
//! Pool names are embedded in generated virtual-machine names, so they are
//! capped at 12 characters of lowercase letters and digits, starting with a
//! letter.

use std::collections::HashSet;

use once_cell::sync::Lazy;
use regex::Regex;

use crate::errors::{ValidationError, ValidationResult};

use super::properties::AgentPoolProfile;

static POOL_NAME_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[a-z][a-z0-9]{0,11}$").expect("pool name pattern is valid"));

/// Validate a single pool name
///
/// # Rules
/// - Starts with a lowercase ASCII letter
/// - Remaining characters are lowercase ASCII letters or digits
/// - At most 12 characters
pub fn validate_pool_name(name: &str) -> ValidationResult {
    if !POOL_NAME_PATTERN.is_match(name) {
        return Err(ValidationError::InvalidPoolName(name.to_string()));
    }
    Ok(())
}

/// Validate that pool names are pairwise distinct
///
/// Reports the first repeated name in collection order.
pub fn validate_unique_pool_names(profiles: &[AgentPoolProfile]) -> ValidationResult {
    let mut seen: HashSet<&str> = HashSet::with_capacity(profiles.len());
    for profile in profiles {
        if !seen.insert(profile.name.as_str()) {
            return Err(ValidationError::DuplicatePoolName(profile.name.clone()));
        }
    }
    Ok(())
}
